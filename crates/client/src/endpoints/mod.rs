//! REST API endpoint implementations.
//!
//! Each function here issues exactly one HTTP call through
//! [`request::execute_request`]. Looping over pages and chaining calls is
//! the job of [`crate::client::GroupClient`].

mod memberships;
pub mod request;
mod roles;
pub mod url_encoding;

pub use memberships::{membership_path, update_membership_role};
pub use request::{RequestResult, execute_request};
pub use roles::{list_group_roles_page, roles_page_path};
