//! # SU Portal Client
//!
//! Async client for the SU student portal's legacy SOAP/XML web services.
//! The portal exposes four student-facing operations, each a single HTTP
//! POST of a SOAP 1.1 envelope answered with a shallow XML document:
//!
//! - **authenticate**: checks a username/password pair and returns the
//!   service's integer error code (`0` means the credentials are valid)
//! - **sucard**: campus card transaction history, grouped into meal,
//!   transport and print purchases
//! - **course_schedule**: the weekly course schedule, collapsed into a
//!   course-code to course-title mapping
//! - **get_person**: free-text directory search over students and staff
//!
//! The service keeps no session: every call is independent, and
//! authentication is a plain credential check rather than a login.
//!
//! # Example
//! ```ignore
//! use suportal_client::prelude::*;
//!
//! let client = PortalClient::new(Config::new())?;
//!
//! let auth = client.authenticate(Some("student1"), Some("hunter2")).await?;
//! if auth.is_success() {
//!     let schedule = client.course_schedule("student1").await?;
//!     for (code, title) in &schedule.courses {
//!         println!("{code}: {title}");
//!     }
//! }
//! ```

/// Ergonomic facade over the transport and service layers
pub mod client;
/// Client configuration (environment-driven, explicitly passed)
pub mod config;
/// Fixed endpoint paths, service codes and defaults
pub mod constants;
/// Crate-wide error type
pub mod error;
/// Request builders and response record types
pub mod model;
/// Convenience re-exports of the commonly used types and traits
pub mod prelude;
/// Portal operations as a trait plus its transport-generic implementation
pub mod services;
/// SOAP envelope construction and XML traversal
pub mod soap;
/// HTTP transport seam and its reqwest implementation
pub mod transport;
/// Shared helpers (logging setup)
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
