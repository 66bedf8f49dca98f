//! HTTP client building.

mod client;

pub use client::{
    AuthenticatedClientBuilder, HttpClientConfig, CLIENT_VERSION, CLIENT_VERSION_HEADER,
    DEFAULT_TIMEOUT,
};
