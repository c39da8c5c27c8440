//! NOBI request form
//!
//! - state.rs: form state controller (record, lists, flags)
//! - wizard.rs: two-page navigation state machine
//! - api.rs: host platform seam and its Liferay implementation
//! - loader.rs: mount-time loading of lists and prefill
//! - gateway.rs: submission lifecycle
//! - ui: view model and Leptos view

pub mod api;
pub mod gateway;
pub mod loader;
pub mod state;
pub mod ui;
pub mod wizard;
