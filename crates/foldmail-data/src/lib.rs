//! # foldmail-data
//!
//! Data layer for the `Foldmail` email client.
//!
//! This crate provides:
//! - Immutable email entities (messages, senders, reply threads)
//! - The repository seam the UI observes for inbox updates
//! - A deterministic fixture repository serving as the sample data source

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod email;
mod error;

pub use email::{Email, EmailId, EmailListStream, EmailRepository, FixtureRepository, Sender};
pub use error::{RepositoryError, Result};
