//! Ergonomic facade over the portal services
//!
//! `PortalClient` wires a [`Config`] to the reqwest transport and the
//! service implementation, so most callers never touch those layers:
//!
//! ```ignore
//! use suportal_client::prelude::*;
//!
//! let client = PortalClient::new(Config::new())?;
//! let history = client.sucard("student1").await?;
//! ```

use crate::config::Config;
use crate::error::AppError;
use crate::model::{AuthResult, CardHistory, CourseSchedule, Person};
use crate::services::{PortalService, PortalServiceImpl};
use crate::transport::SoapHttpClient;
use std::sync::Arc;

/// Client for the SU portal SOAP services
pub struct PortalClient {
    service: PortalServiceImpl<SoapHttpClient>,
}

impl PortalClient {
    /// Creates a client from a configuration
    ///
    /// The configuration is consumed and shared between the transport and
    /// the service layer; it cannot change afterwards. Construct a second
    /// client for a differently configured connection.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let transport = Arc::new(SoapHttpClient::new(config.clone())?);

        Ok(Self {
            service: PortalServiceImpl::new(config, transport),
        })
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        self.service.get_config()
    }

    /// Checks a username/password pair
    pub async fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthResult, AppError> {
        self.service.authenticate(username, password).await
    }

    /// Gets the campus card transaction history for an account
    pub async fn sucard(&self, username: &str) -> Result<CardHistory, AppError> {
        self.service.sucard(username).await
    }

    /// Gets the weekly course schedule for an account
    pub async fn course_schedule(&self, username: &str) -> Result<CourseSchedule, AppError> {
        self.service.course_schedule(username).await
    }

    /// Searches the directory for people matching a free-text query
    pub async fn get_person(
        &self,
        query: &str,
        person_type: Option<&str>,
        limit: Option<u32>,
        start: Option<u32>,
    ) -> Result<Vec<Person>, AppError> {
        self.service.get_person(query, person_type, limit, start).await
    }
}

impl Default for PortalClient {
    fn default() -> Self {
        Self::new(Config::default()).expect("Failed to create HTTP client")
    }
}
