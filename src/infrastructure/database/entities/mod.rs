// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Database entity module
///
/// Defines the entity structs backing the database tables.
/// Object-relational mapping is handled by the SeaORM framework.
pub mod comment;
pub mod partner;
pub mod session;
pub mod task;
pub mod user;
