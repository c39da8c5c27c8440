//! Wire shapes of the host platform's headless REST API
//!
//! Only the fields the form reads are modelled; everything else in the
//! responses is ignored by serde.

mod error_response;
mod list_type;
mod user_account;

pub use error_response::ErrorResponse;
pub use list_type::{ListTypeDefinition, ListTypeEntry};
pub use user_account::UserAccount;
