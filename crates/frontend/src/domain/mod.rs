pub mod nobi_request;
