//! HTTP API backend for the league CMS and live game tracking.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Validation, orchestration and transactions
//! - **Data Layer** (`data/`) - Repositories converting entities into domain models
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application errors and their HTTP mapping
//! - **Middleware** (`middleware/`) - Auth cookie and permission guard
//!
//! `config`, `state`, `startup` and `router` wire these together at boot.
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and applies CORS, timeout, tracing and rate limits
//! 2. **Controller** checks permissions with `AuthGuard` and converts the DTO into params
//! 3. **Service** validates and runs the operation, in a transaction when it spans rows
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the result back into a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
