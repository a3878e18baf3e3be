/// Credential-check result
pub mod auth;
/// Card transaction history records
pub mod card;
/// Directory search records
pub mod person;
/// Request-body builders for the four operations
pub mod requests;
/// Course schedule mapping
pub mod schedule;

pub use auth::AuthResult;
pub use card::{CardHistory, TransactionRecord};
pub use person::Person;
pub use schedule::CourseSchedule;
