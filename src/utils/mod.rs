pub mod error;
pub mod logger;
pub mod repr;
pub mod validation;
