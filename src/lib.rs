//! # Deer - User Registration and Session Service
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to registration, login and session tokens in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! deer = { path = "../deer" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `User`, `SessionClaims`, etc.
//! - **Ports**: `UserStore`, `PasswordHasher`, `SessionTokenService`
//! - **Workflow**: `AuthWorkflow` and the use cases it drives
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `Argon2PasswordHasher`, `JwtSessionTokens`
//! - **Service**: `AuthService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use deer_core::*;
}

// Re-export most commonly used core types at the root level
pub use deer_core::{
    Email, Password, PasswordHash, SessionClaims, SessionToken, User, UserError, UserId, Username,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use deer_core::{
        AuthValidator, PasswordHasher, PasswordHasherError, SessionTokenService, TokenError,
        UserStore, UserStoreError,
    };
}

pub use deer_core::{PasswordHasher, SessionTokenService, UserStore, UserStoreError};

// ============================================================================
// Workflow (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use deer_application::*;
}

pub use deer_application::{AuthError, AuthWorkflow};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Axum routes and middleware
    pub mod http {
        pub use deer_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use deer_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use deer_adapters::hashing::*;
    }

    /// Session token issuing and validation
    pub mod auth {
        pub use deer_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use deer_adapters::config::*;
    }
}

pub use deer_adapters::{
    auth_validation::{BearerTokenValidator, JwtConfig, JwtSessionTokens},
    config::DeerSettings,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, PostgresUserStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main HTTP service
pub use deer_auth_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
