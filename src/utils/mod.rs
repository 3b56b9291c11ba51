pub mod error;

pub use error::KycError;
