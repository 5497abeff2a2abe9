/// Normalized failure classification, independent of the identity provider's
/// own error vocabulary.
///
/// `None` is reserved for successful results; every failed result carries one
/// of the other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCategory {
    #[default]
    None,
    InvalidParameter,
    NotFound,
    Unauthorized,
    Conflict,
    TooManyFailedAttempts,
    LimitExceeded,
    ProviderError,
}

impl ErrorCategory {
    /// Every category, in declaration order.
    pub const ALL: [ErrorCategory; 8] = [
        ErrorCategory::None,
        ErrorCategory::InvalidParameter,
        ErrorCategory::NotFound,
        ErrorCategory::Unauthorized,
        ErrorCategory::Conflict,
        ErrorCategory::TooManyFailedAttempts,
        ErrorCategory::LimitExceeded,
        ErrorCategory::ProviderError,
    ];

    pub fn is_failure(self) -> bool {
        self != ErrorCategory::None
    }
}
