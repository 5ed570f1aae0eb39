//! snipbin-storage
//!
//! Snippet persistence. The [`repository::SnippetRepository`] trait is the
//! seam handlers talk to; S3 backs it in production and an in-memory map
//! backs it in tests.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod repository;
pub mod s3;
