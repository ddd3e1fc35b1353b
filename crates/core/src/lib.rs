//! Domain core for the korin landing CMS.
//!
//! Pure, synchronous building blocks shared by the persistence and API
//! layers: the bilingual content model, the portfolio reconciliation engine,
//! and the validation gates. Nothing here performs I/O.

pub mod contact;
pub mod error;
pub mod landing;
pub mod locale;
pub mod portfolio;
pub mod section;
pub mod slug;
pub mod types;
