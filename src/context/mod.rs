//! Request context seam.

pub mod request;

pub use request::{format_server_url, RequestContext, RequestInfo};
