//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTML pages) and
//! driven adapters (configuration, SQLite repositories).

pub mod driven_adapters;
pub mod driving_adapters;
