//! Error types for the Scrivano draft-generation pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Scrivano workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivano_error::{ScrivanoResult, HttpError};
//!
//! fn fetch_data() -> ScrivanoResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod http;
mod json;
mod parse;
mod schedule;

pub use config::ConfigError;
pub use error::{ScrivanoError, ScrivanoErrorKind, ScrivanoResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use parse::{ParseError, ParseErrorKind};
pub use schedule::{ScheduleError, ScheduleErrorKind};
