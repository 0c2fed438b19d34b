// src/specs/mod.rs
//! # Endpoint specs
//!
//! One module per API route of the league app. Each spec encodes what the
//! response looks like on the wire (serde model) and how it maps onto the
//! crate's record shapes.
//!
//! Conventions:
//! - Decoding is **pure** (body string in, records out) so it can be
//!   tested offline against captured payloads.
//! - Specs do not filter, format, or export — that lives in `search` and
//!   the front-end.
//! - Unknown wire fields are tolerated; missing required fields are an
//!   error, not a default.

pub mod players;
