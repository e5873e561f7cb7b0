//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the bookstore: API endpoints, business
//! logic, data access and infrastructure. The backend uses Axum as the web framework,
//! SeaORM for database operations and tower-sessions for cookie sessions.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transactions between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database, session store and HTTP layers
//! - **Router** (`router`) - Route registration and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **CORS**, request tracing and the session layer wrap every request
//! 2. **Router** dispatches to the matching controller
//! 3. **Controller** runs the `AuthGuard`, converts DTOs to params, calls a service
//! 4. **Service** applies business rules and orchestrates repositories
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO inside the response envelope

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
pub mod util;
