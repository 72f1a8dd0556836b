use thiserror::Error;

/// Errors surfaced synchronously by the core helpers.
///
/// Numeric update paths clamp instead of failing, so the only failure is a
/// caller handing in an argument that has no meaningful result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
