//! Book Catalog
//!
//! A small web application for tracking books and their authors, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
