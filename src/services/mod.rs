use crate::config::Config;
use crate::constants::{AUTH_PATH, CARD_PATH, PEOPLE_PATH, SCHEDULE_PATH};
use crate::error::AppError;
use crate::model::requests;
use crate::model::{AuthResult, CardHistory, CourseSchedule, Person};
use crate::transport::PortalHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Interface for the portal's student-facing operations
///
/// Every operation is one outbound HTTP call with no session or client
/// state, so calls are independent and may run concurrently.
#[async_trait]
pub trait PortalService: Send + Sync {
    /// Checks a username/password pair
    ///
    /// Absent credentials serialize as empty text and the service answers
    /// with its generic failure code. The call establishes no session.
    async fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthResult, AppError>;

    /// Gets the campus card transaction history for an account
    async fn sucard(&self, username: &str) -> Result<CardHistory, AppError>;

    /// Gets the weekly course schedule for an account
    ///
    /// The result maps course designation codes to titles, deduplicated
    /// across weekdays with the first occurrence winning.
    async fn course_schedule(&self, username: &str) -> Result<CourseSchedule, AppError>;

    /// Searches the directory for people matching a free-text query
    ///
    /// `person_type` defaults to `student`; `limit` and `start` page the
    /// results and are omitted from the request when not given. Matches
    /// come back in the order the service lists them.
    async fn get_person(
        &self,
        query: &str,
        person_type: Option<&str>,
        limit: Option<u32>,
        start: Option<u32>,
    ) -> Result<Vec<Person>, AppError>;
}

/// Implementation of the portal service over a [`PortalHttpClient`]
pub struct PortalServiceImpl<T: PortalHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: PortalHttpClient> PortalServiceImpl<T> {
    /// Creates a new instance of the portal service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: PortalHttpClient + 'static> PortalService for PortalServiceImpl<T> {
    async fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthResult, AppError> {
        info!("Checking credentials for {}", username.unwrap_or("<none>"));

        let body = requests::check_login(username, password);
        let xml = self.client.post_xml(AUTH_PATH, body).await?;
        let result = AuthResult::from_xml(&xml)?;

        debug!("Credential check error code: {}", result.error_code);
        Ok(result)
    }

    async fn sucard(&self, username: &str) -> Result<CardHistory, AppError> {
        info!("Fetching card history for {}", username);

        let body = requests::get_credits(username);
        let xml = self.client.post_xml(CARD_PATH, body).await?;
        let history = CardHistory::from_xml(&xml)?;

        debug!(
            "Card history: {} meal, {} transport, {} print records",
            history.meals.len(),
            history.transports.len(),
            history.prints.len()
        );
        Ok(history)
    }

    async fn course_schedule(&self, username: &str) -> Result<CourseSchedule, AppError> {
        info!("Fetching course schedule for {}", username);

        let body = requests::get_course_schedule(username);
        let xml = self.client.post_xml(SCHEDULE_PATH, body).await?;
        let schedule = CourseSchedule::from_xml(&xml)?;

        debug!("Course schedule: {} distinct courses", schedule.len());
        Ok(schedule)
    }

    async fn get_person(
        &self,
        query: &str,
        person_type: Option<&str>,
        limit: Option<u32>,
        start: Option<u32>,
    ) -> Result<Vec<Person>, AppError> {
        info!("Searching directory for {:?}", query);

        let body = requests::people(query, person_type, limit, start);
        let xml = self.client.post_xml(PEOPLE_PATH, body).await?;
        let people = Person::list_from_xml(&xml)?;

        debug!("Directory search: {} matches", people.len());
        Ok(people)
    }
}
