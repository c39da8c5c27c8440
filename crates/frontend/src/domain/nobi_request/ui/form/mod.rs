//! NOBI Request Form UI Module
//!
//! MVVM split as in the other forms:
//! - view_model.rs: signals and commands wired to the controller
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::NobiForm;
pub use view_model::NobiFormViewModel;
