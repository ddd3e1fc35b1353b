//! Request handlers.
//!
//! Each submodule covers one surface: public landing reads, admin auth,
//! section saves, works buckets, service ordering, and the contact relay.
//! Handlers delegate domain logic to `korin_core`, persistence to
//! `korin_db`, and map errors via [`crate::error::AppError`].

pub mod admin_auth;
pub mod contact;
pub mod landing;
pub mod sections;
pub mod services;
pub mod works;
