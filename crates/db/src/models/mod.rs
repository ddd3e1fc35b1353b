//! Row model structs.
//!
//! Each submodule contains `FromRow` + `Serialize` structs matching the
//! database rows, plus `From` conversions into the core content types.

pub mod content;
pub mod hero;
pub mod portfolio;
pub mod service;
