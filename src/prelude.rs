//! # SU Portal Client Prelude
//!
//! Convenient single import for the commonly used types and traits of the
//! library:
//!
//! ```ignore
//! use suportal_client::prelude::*;
//!
//! let client = PortalClient::new(Config::new())?;
//! let result = client.authenticate(Some("student1"), Some("hunter2")).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the portal client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

/// Result alias used across the library
pub use crate::error::PortalResult;

// ============================================================================
// SERVICES
// ============================================================================

/// Portal operations trait
pub use crate::services::PortalService;

/// Portal operations implementation, generic over the transport
pub use crate::services::PortalServiceImpl;

/// High-level client facade
pub use crate::client::PortalClient;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait
pub use crate::transport::PortalHttpClient;

/// reqwest-backed transport implementation
pub use crate::transport::SoapHttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Credential-check result
pub use crate::model::AuthResult;

/// Card transaction history and its records
pub use crate::model::{CardHistory, TransactionRecord};

/// Course schedule mapping
pub use crate::model::CourseSchedule;

/// Directory search match
pub use crate::model::Person;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup helper
pub use crate::utils::setup_logger;
