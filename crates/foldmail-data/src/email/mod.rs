//! Email entities and the repositories that produce them.

mod fixtures;
mod model;
mod repository;

pub use model::{Email, EmailId, Sender};
pub use repository::{EmailListStream, EmailRepository, FixtureRepository};
