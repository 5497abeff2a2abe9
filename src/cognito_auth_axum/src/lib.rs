//! Axum integration for the identity gateway.
//!
//! Route handlers extract the request, run the matching use case from
//! `cognito_auth_application` and turn its [`ServiceResult`] into a response:
//! 200 with the payload on success, otherwise the category's status with a
//! `{ "message": ... }` body.
//!
//! ```text
//! request ─► bearer gate (protected routes) ─► route ─► use case ─► provider
//!                                                 │
//!                          ApiError ◄─────────────┘ (failure / unexpected)
//! ```
//!
//! [`ServiceResult`]: cognito_auth_core::ServiceResult

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE, status_for};
pub use middleware::require_bearer;
pub use state::IdentityState;
