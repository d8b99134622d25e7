use thiserror::Error;

/// Application error types.
///
/// The catalog itself has no domain errors: a lookup that finds nothing
/// is an absence result, not a failure. What remains are infrastructure
/// errors raised while bringing the service up.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Application result type.
///
/// Type alias for Result with [`AppError`] as the error type.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(config::ConfigError, std::io::Error);
