pub mod config;
pub mod error;
pub mod signup;
pub mod submit;
pub mod validation;

pub use config::*;
pub use error::*;
pub use signup::*;
pub use submit::*;
pub use validation::*;
