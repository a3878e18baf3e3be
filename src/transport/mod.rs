/// HTTP client trait and its reqwest implementation
pub mod http_client;

pub use http_client::{PortalHttpClient, SoapHttpClient};
