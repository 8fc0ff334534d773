//! EmpleaWorks client library.
//!
//! Typed access to the EmpleaWorks job-board API: authentication, offers,
//! applications, saved offers, profile management and email verification,
//! plus the session store and local reminder notifications the front-ends
//! share.

pub mod auth;
pub mod candidates;
pub mod client;
pub mod common;
pub mod companies;
pub mod notifications;
pub mod offers;
pub mod profile;
pub mod storage;
pub mod verification;

#[cfg(test)]
mod testing;

pub use common::{AppContext, ApiError, ClientConfig, ErrorKind};
