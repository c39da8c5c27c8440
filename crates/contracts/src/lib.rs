//! Shared types for the NOBI request form.
//!
//! Everything in this crate is platform independent: the form record and its
//! rules live in `domain`, the host platform's wire shapes live in `shared`.

pub mod domain;
pub mod shared;
