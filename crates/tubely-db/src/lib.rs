//! Tubely database access
//!
//! Repositories over the PostgreSQL metadata store.

pub mod db;

pub use db::{PgVideoRepository, VideoRepository};
