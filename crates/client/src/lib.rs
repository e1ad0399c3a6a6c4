//! `larder-client`
//!
//! **Responsibility:** everything between the controllers and the backend.
//!
//! This crate provides:
//! - the Remote Data Client (`RemoteClient`) with uniform failure translation
//! - the Availability Prober (`AvailabilityProber`)
//! - per-domain Resource Fetchers (`api::*`) that return tagged outcomes
//!   (`Fetched::Live` / `Fetched::Fallback`) instead of bare data
//!
//! The backend stays the authority; nothing here caches or retries.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod fetched;
pub mod http;
pub mod memory;
pub mod probe;
pub mod transport;

pub use client::RemoteClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use fetched::{FallbackReason, Fetched};
pub use http::HttpTransport;
pub use memory::{InMemoryTransport, Reply};
pub use probe::{AvailabilityProber, ConnectivityState};
pub use transport::{Method, RawResponse, Request, Transport, TransportFailure};
