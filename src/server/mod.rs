//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the rental platform: API endpoints,
//! business rules, data access and infrastructure services. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules spanning one or more bounded contexts
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, value objects and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Extractors** (`extract`) - `Json`, `Path` and `Query` rejecting with `AppError`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, notification dispatcher)
//! - **Startup** (`startup`) - Database, HTTP client, CORS and rate limit setup
//! - **Router** (`router`) - Axum routes and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (hourly no-show sweep)
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts the DTO into validated params and calls a service
//! 3. **Service** applies business rules and orchestrates repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
