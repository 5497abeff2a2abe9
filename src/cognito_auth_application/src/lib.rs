pub mod error_classifier;
pub mod use_cases;

pub use error_classifier::{GENERIC_PROVIDER_MESSAGE, classify};
pub use use_cases::{
    ChangePasswordUseCase, ConfirmForgotPasswordUseCase, ConfirmSignUpUseCase, GetMeUseCase,
    SendForgotPasswordCodeUseCase, SignInUseCase, SignOutUseCase, SignUpUseCase, UseCaseResult,
};
