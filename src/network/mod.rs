//! HTTP client for talking to the hospital backend

mod client;

pub use client::HttpClient;
