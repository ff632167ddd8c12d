//! HTTP client module
//!
//! A thin wrapper over `reqwest` used to talk to the CMS. Requests are sent
//! exactly once: failures are classified and returned, never retried.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};

#[cfg(test)]
mod tests;
