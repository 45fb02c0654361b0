// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20260512_000001_initial_schema;

/// Database migrator
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Collects all migrations in apply order
    ///
    /// # Returns
    ///
    /// The ordered migration list
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260512_000001_initial_schema::Migration)]
    }
}
