//! Bookgraph API definitions.
//!
//! This crate provides the shared vocabulary of the bookgraph service:
//!
//! - Model definitions for authors and books
//! - The fixed dataset loaded at process start
//! - A GraphQL-over-HTTP client for talking to a running service
//!
//! # Features
//!
//! - `client`: Enables client functionality for connecting to remote services

#[cfg(feature = "client")]
pub mod client;
pub mod model;
pub mod seed;
