// Copyright (c) 2025 ThinkHuge
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod cookies;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
