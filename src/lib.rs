pub mod changelog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod notes;
pub mod ui;
pub mod version;

pub use error::{RelcutError, Result};
