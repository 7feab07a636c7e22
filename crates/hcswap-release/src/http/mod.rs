//! HTTP client construction for the release index

mod client;

pub use client::{DEFAULT_TIMEOUT, USER_AGENT, build_client, build_default_client};
