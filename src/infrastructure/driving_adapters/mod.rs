//! Driving Adapters
//!
//! Entry points that drive the application:
//! - Server-rendered HTML pages
//! - Form DTOs for submitted data

pub mod web;
