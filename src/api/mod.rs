//! Athlete feed integration.
//!
//! This module fetches the payload over HTTP and validates the raw JSON
//! into the domain types before anything else sees it.

mod client;
mod converter;

pub use client::{HttpSource, PayloadSource};
pub use converter::DataConverter;

#[cfg(test)]
pub use client::MockPayloadSource;
