//! # Storage Module
//!
//! On-device key-value storage for the session: the auth token, a snapshot
//! of the signed-in user and an optional candidate profile snapshot.

pub mod session_store;


pub use session_store::{SessionStore, StoreError};
