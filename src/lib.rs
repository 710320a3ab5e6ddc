pub mod datagen;

pub mod error;

pub mod settings;

/// Error handling approach: boxing errors.
///
/// Errors from the `config` crate and from the output stream are carried as trait objects,
/// conditions detected by the generator itself are `error::GeneratorError`s.
pub type OrdersError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias.
pub type Result<T> = std::result::Result<T, OrdersError>;
