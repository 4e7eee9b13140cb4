//! Database entities
pub mod stories;
