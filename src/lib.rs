//! # Location Registry Library
//!
//! This crate provides a location registry service with:
//! - Create/list/get/edit of named, colored map locations
//! - A nearest-first route query ranking every location by haversine
//!   distance from a target point
//! - RESTful HTTP API endpoints
//! - PostgreSQL or in-memory storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Location entity, repository trait, validation, distance
//! - **Application Layer**: Location service and DTOs
//! - **Infrastructure Layer**: Database, repository implementations, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! location_registry/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, validation, distance
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
