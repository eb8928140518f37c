//! Store-locations import/export service.
//!
//! Imports store locations from an uploaded xlsx file into SQLite inside a
//! single all-or-nothing transaction, and exports the table back as a
//! downloadable xlsx file.

pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod http;
pub mod import;
pub mod store;

pub use config::Config;
pub use error::ApiError;
