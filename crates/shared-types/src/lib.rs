pub mod appointment;
pub mod config;
pub mod error;
pub mod models;

pub use appointment::*;
pub use config::*;
pub use error::*;
pub use models::*;
