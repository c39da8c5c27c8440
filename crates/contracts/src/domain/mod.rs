pub mod common;
pub mod nobi_request;
