//! BitTutor client library
//!
//! Collects the registration and login forms, reads an attached image and
//! submits the result as JSON to the BitTutor server.

pub mod config;
pub mod error;
pub mod form;
pub mod network;

pub use error::{Result, SubmitError};
pub use network::{RegistrationOutcome, SubmissionClient};
