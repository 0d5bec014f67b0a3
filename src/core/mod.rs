//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{ConversionError, ConversionResult, ExchangeRateProvider};
