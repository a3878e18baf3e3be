//! Builders for the SOAP request bodies
//!
//! Each builder produces the complete envelope for one operation, with
//! the operation's fixed embedded service code and every caller-supplied
//! value escaped before interpolation.

use crate::constants::{
    AUTH_SERVICE_CODE, CARD_SERVICE_PASSWORD, CARD_SERVICE_USERNAME, PEOPLE_DEFAULT_TYPE,
    PEOPLE_ORG_UNIT, PEOPLE_SERVICE_CODE, SCHEDULE_ORG_ROLE, SCHEDULE_SERVICE_CODE,
    SERVICE_NAMESPACE,
};
use crate::soap::{envelope, escape_text};
use base64::Engine as _;
use base64::prelude::BASE64_STANDARD;

/// `checkLogin` request body
///
/// Absent credentials serialize as empty element text, which the service
/// answers with its generic failure code.
pub fn check_login(username: Option<&str>, password: Option<&str>) -> String {
    let username = escape_text(username.unwrap_or(""));
    let password = escape_text(password.unwrap_or(""));
    envelope(&format!(
        "<checkLogin xmlns=\"{SERVICE_NAMESPACE}\">\
         <username>{username}</username>\
         <password>{password}</password>\
         <servicecode>{AUTH_SERVICE_CODE}</servicecode>\
         </checkLogin>"
    ))
}

/// `getCredits` request body
pub fn get_credits(username: &str) -> String {
    let username = escape_text(username);
    envelope(&format!(
        "<getCredits xmlns=\"{SERVICE_NAMESPACE}\">\
         <username>{username}</username>\
         <serviceusername>{CARD_SERVICE_USERNAME}</serviceusername>\
         <servicepassword>{CARD_SERVICE_PASSWORD}</servicepassword>\
         </getCredits>"
    ))
}

/// `getCourseSchedule` request body
pub fn get_course_schedule(username: &str) -> String {
    let username = escape_text(username);
    envelope(&format!(
        "<getCourseSchedule xmlns=\"{SERVICE_NAMESPACE}\">\
         <username>{username}</username>\
         <servicecode>{SCHEDULE_SERVICE_CODE}</servicecode>\
         <orgrole>{SCHEDULE_ORG_ROLE}</orgrole>\
         </getCourseSchedule>"
    ))
}

/// `people` request body
///
/// The search text travels base64-encoded. `limit` and `start` are
/// omitted entirely when not given; the service then applies its own
/// defaults. The organisational unit is always `staff`; the service
/// only answers the search in that form, whatever person type is
/// requested.
pub fn people(
    query: &str,
    person_type: Option<&str>,
    limit: Option<u32>,
    start: Option<u32>,
) -> String {
    let search = BASE64_STANDARD.encode(query);
    let search = escape_text(&search);
    let person_type = escape_text(person_type.unwrap_or(PEOPLE_DEFAULT_TYPE));

    let mut fields = format!(
        "<searchtext>{search}</searchtext>\
         <type>{person_type}</type>\
         <ou>{PEOPLE_ORG_UNIT}</ou>"
    );
    if let Some(limit) = limit {
        fields.push_str(&format!("<limit>{limit}</limit>"));
    }
    if let Some(start) = start {
        fields.push_str(&format!("<start>{start}</start>"));
    }
    fields.push_str(&format!("<servicecode>{PEOPLE_SERVICE_CODE}</servicecode>"));

    envelope(&format!("<people xmlns=\"{SERVICE_NAMESPACE}\">{fields}</people>"))
}
