//! Resource Fetchers, one module per backend resource.
//!
//! Reads return [`Fetched`](crate::Fetched) and never fail; mutations return
//! `Result<_, ClientError>` and never fall back.

pub mod analytics;
pub mod auth;
pub mod inventory;
pub mod orders;
pub mod suppliers;
