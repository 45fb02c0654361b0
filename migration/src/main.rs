// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// Database migration CLI entry point
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
