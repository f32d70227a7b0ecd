//! Blocking HTTP source module
//!
//! Provides the HTTP client used to fetch response bodies for decoding.
//!
//! # Features
//!
//! - **Automatic Retries**: exponential backoff on transient failures
//! - **Streaming bodies**: responses are returned unread and implement
//!   [`std::io::Read`], so they plug straight into the decoder
//! - **Generic requests**: plain GET with caller-supplied headers and
//!   query parameters; no service-specific protocol or login flow

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
