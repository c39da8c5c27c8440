//! Common types shared by the form's pickers

pub mod reference_option;

// Re-exports
pub use reference_option::ReferenceOption;
