/// SOAP 1.1 envelope construction and text escaping
pub mod envelope;
/// Tag-based traversal helpers for the portal's shallow XML responses
pub mod xml;

pub use envelope::{envelope, escape_text};
