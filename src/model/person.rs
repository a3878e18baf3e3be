use crate::error::AppError;
use crate::soap::xml::all_texts;
use serde::{Deserialize, Serialize};

/// One directory search match
///
/// Only the username is always present; the service omits the other
/// fields freely depending on the matched person's visibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// Portal username, the local part of the matched email address
    pub username: String,
    /// Display name
    pub name: Option<String>,
    /// Birthday, as the service formats it
    pub birthday: Option<String>,
    /// Photo URL
    pub photo: Option<String>,
    /// Degree
    pub degree: Option<String>,
    /// Study program or department
    pub program: Option<String>,
}

impl Person {
    /// Parses the `people` response into an ordered list of matches
    ///
    /// The response carries parallel tag groups. The `email` group is the
    /// id list and fixes order and count; `name`, `birthdayprefix`,
    /// `photo`, `degree` and `program` pair with it by index. A field
    /// group shorter than the id list leaves the trailing fields unset; a
    /// longer one means the response is malformed.
    pub fn list_from_xml(xml: &str) -> Result<Vec<Person>, AppError> {
        let emails = all_texts(xml, "email")?;
        let names = all_texts(xml, "name")?;
        let birthdays = all_texts(xml, "birthdayprefix")?;
        let photos = all_texts(xml, "photo")?;
        let degrees = all_texts(xml, "degree")?;
        let programs = all_texts(xml, "program")?;

        for (tag, group) in [
            ("name", &names),
            ("birthdayprefix", &birthdays),
            ("photo", &photos),
            ("degree", &degrees),
            ("program", &programs),
        ] {
            if group.len() > emails.len() {
                return Err(AppError::MalformedResponse(format!(
                    "{} {tag} entries for {} email entries",
                    group.len(),
                    emails.len()
                )));
            }
        }

        let people = emails
            .iter()
            .enumerate()
            .map(|(i, email)| Person {
                username: email.split('@').next().unwrap_or(email.as_str()).to_string(),
                name: names.get(i).cloned(),
                birthday: birthdays.get(i).cloned(),
                photo: photos.get(i).cloned(),
                degree: degrees.get(i).cloned(),
                program: programs.get(i).cloned(),
            })
            .collect();

        Ok(people)
    }
}
