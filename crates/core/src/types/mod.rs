//! Core types for Projects Hub.
//!
//! This module provides type-safe wrappers for the domain concepts shared by
//! the server and the CLI.

pub mod account;
pub mod email;
pub mod id;
pub mod project;
pub mod timestamp;

pub use account::{AdminAccount, SetupInput, SetupInputError};
pub use email::{Email, EmailError};
pub use id::ProjectId;
pub use project::{Project, ProjectInput, ProjectInputError, ProjectsDocument};
pub use timestamp::{Millis, now_millis};
