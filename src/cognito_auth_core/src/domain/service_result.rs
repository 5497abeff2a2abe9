use super::error_category::ErrorCategory;

/// A classified failure returned by an identity operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    category: ErrorCategory,
    message: String,
}

impl ServiceError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        debug_assert!(
            category.is_failure(),
            "a failed result must carry a failure category"
        );
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_parts(self) -> (ErrorCategory, String) {
        (self.category, self.message)
    }
}

/// Envelope returned by every identity operation.
///
/// Recoverable, provider-reported failures travel as [`ServiceResult::Failure`]
/// values; they are never raised as Rust errors. Payload-less operations use
/// `ServiceResult<()>`.
///
/// The flat view (`is_success`, `error_category`, `message`, `data`) keeps the
/// invariant that a result is successful exactly when its category is
/// [`ErrorCategory::None`] and it has no message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ServiceResult<T = ()> {
    Success(T),
    Failure(ServiceError),
}

impl<T> ServiceResult<T> {
    pub fn success(data: T) -> Self {
        ServiceResult::Success(data)
    }

    pub fn error(category: ErrorCategory, message: impl Into<String>) -> Self {
        ServiceResult::Failure(ServiceError::new(category, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResult::Success(_))
    }

    pub fn error_category(&self) -> ErrorCategory {
        match self {
            ServiceResult::Success(_) => ErrorCategory::None,
            ServiceResult::Failure(error) => error.category(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ServiceResult::Success(_) => None,
            ServiceResult::Failure(error) => Some(error.message()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ServiceResult::Success(data) => Some(data),
            ServiceResult::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ServiceError> {
        self.into()
    }
}

impl ServiceResult<()> {
    /// Success without a payload.
    pub fn ok() -> Self {
        ServiceResult::Success(())
    }
}

impl<T> From<ServiceResult<T>> for Result<T, ServiceError> {
    fn from(result: ServiceResult<T>) -> Self {
        match result {
            ServiceResult::Success(data) => Ok(data),
            ServiceResult::Failure(error) => Err(error),
        }
    }
}
