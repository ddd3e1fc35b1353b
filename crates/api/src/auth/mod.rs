//! Authentication primitives.
//!
//! - [`session`] -- HMAC-signed admin session cookie: minting, verification,
//!   and the [`session::AdminSession`] extractor.

pub mod session;
