//! # Cognito Auth - Identity Gateway Library
//!
//! Facade crate re-exporting the public APIs of the gateway components.
//!
//! ## Structure
//!
//! - **Core domain types**: `ServiceResult`, `ErrorCategory`, request and response bodies
//! - **Ports**: `IdentityProvider`, `AuthValidator`
//! - **Use cases**: `SignUpUseCase`, `SignInUseCase`, etc.
//! - **Adapters**: `CognitoIdentityProvider`, `BearerTokenValidator`, settings
//! - **Service**: `AuthService` - The main entry point for the HTTP gateway

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and ports
pub mod core {
    pub use cognito_auth_core::*;
}

pub use cognito_auth_core::{
    AccessToken, AppClientId, ErrorCategory, IdentityProvider, IdentityProviderError,
    ServiceError, ServiceResult,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases and the provider error classifier
pub mod use_cases {
    pub use cognito_auth_application::*;
}

pub use cognito_auth_application::{
    ChangePasswordUseCase, ConfirmForgotPasswordUseCase, ConfirmSignUpUseCase, GetMeUseCase,
    SendForgotPasswordCodeUseCase, SignInUseCase, SignOutUseCase, SignUpUseCase, classify,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Cognito user pool client
    pub mod cognito {
        pub use cognito_auth_adapters::cognito::*;
    }

    /// Bearer token validation
    pub mod auth {
        pub use cognito_auth_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use cognito_auth_adapters::config::*;
    }
}

pub use cognito_auth_adapters::{
    AuthServiceSettings, BearerTokenValidator, CognitoIdentityProvider,
};

// ============================================================================
// HTTP Layer
// ============================================================================

/// Axum routes and error mapping
pub mod http_api {
    pub use cognito_auth_axum::*;
}

/// Main auth service
pub use cognito_auth_service::AuthService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing `IdentityProvider`
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
