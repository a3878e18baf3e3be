use crate::constants::{SCHEDULE_EXCLUDE_MARKERS, WEEKDAY_SECTIONS};
use crate::error::AppError;
use crate::soap::xml::section_texts;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weekly course schedule, collapsed to a code-to-title mapping
///
/// The service lists courses per weekday; a course meeting several times
/// a week appears once here, under the title of its first listing in
/// Monday-to-Friday order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseSchedule {
    /// Course designation code mapped to course title
    pub courses: HashMap<String, String>,
}

impl CourseSchedule {
    /// Parses the `getCourseSchedule` response
    ///
    /// Each weekday section lists entries as flattened display strings:
    /// the course title immediately followed by the designation code,
    /// with no separator. Entries for recitations, discussions and lab
    /// sessions are skipped, as are entries whose extracted code is empty
    /// or starts with a literal `.` (a malformed listing the service
    /// occasionally produces).
    pub fn from_xml(xml: &str) -> Result<Self, AppError> {
        let mut courses = HashMap::new();

        for day in WEEKDAY_SECTIONS {
            for entry in section_texts(xml, day, "course")? {
                if SCHEDULE_EXCLUDE_MARKERS.iter().any(|m| entry.contains(m)) {
                    continue;
                }
                let (title, code) = split_course_entry(&entry);
                if code.is_empty() || code.starts_with('.') {
                    continue;
                }
                courses
                    .entry(code.to_string())
                    .or_insert_with(|| title.to_string());
            }
        }

        Ok(Self { courses })
    }

    /// Whether the schedule has no courses
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of distinct courses
    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

/// Splits a flattened schedule entry into title and designation code
///
/// The code is the maximal trailing run of characters with a code point
/// below 97 (uppercase letters and digits); titles always end with a
/// lowercase-or-higher character, which stops the backward scan. An entry
/// with no such trailing run splits into the whole text and an empty
/// code.
pub fn split_course_entry(entry: &str) -> (&str, &str) {
    let mut boundary = entry.len();
    for (idx, c) in entry.char_indices().rev() {
        if (c as u32) >= 97 {
            break;
        }
        boundary = idx;
    }
    entry.split_at(boundary)
}
