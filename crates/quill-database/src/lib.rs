//! # quill-database
//!
//! SQLite connection pool management, migration runner, and repository
//! implementations for Quill.

pub mod connection;
pub mod migration;
pub mod repositories;
