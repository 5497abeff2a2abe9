use async_trait::async_trait;

/// Trait for validating authentication on protected routes.
///
/// Validators extract authentication information from HTTP request parts and
/// produce the claims handed to the route. For the bearer-token flow the
/// claims are the opaque access token itself; whether it is still valid is
/// decided by the identity provider when the route forwards it.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions) rather
/// than the full `Request` to avoid issues with non-`Sync` request bodies.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The claims extracted from a request that passed validation.
    ///
    /// Made available to protected route handlers via request extensions.
    type Claims: Clone + Send + Sync + 'static;

    /// The request parts type this validator operates on.
    ///
    /// Typically `http::request::Parts`.
    type RequestParts;

    /// Errors that can occur during validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate authentication from the request parts.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable credential is present.
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
