//! The Omi façade: wire types, request construction, response mapping, and the client.

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

pub use client::OmiClient;
pub use error::{ErrorKind, OmiError};
