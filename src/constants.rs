//! Fixed values of the portal contract: endpoint paths, the embedded
//! service credentials each operation sends, and configuration defaults.

/// Default base URL of the portal's versioned SOAP endpoint
pub const DEFAULT_BASE_URL: &str = "https://mysu.sabanciuniv.edu/service/v2";

/// Default public CORS relay host used when `bypass_cors` is enabled
pub const DEFAULT_CORS_RELAY: &str = "https://cors-anywhere.herokuapp.com/";

/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT: u64 = 30;

/// Relative path of the credential-check endpoint
pub const AUTH_PATH: &str = "authentication.php";

/// Relative path of the card transaction history endpoint
pub const CARD_PATH: &str = "sucard.php";

/// Relative path of the course schedule endpoint
pub const SCHEDULE_PATH: &str = "courseschedule.php";

/// Relative path of the directory search endpoint
pub const PEOPLE_PATH: &str = "people_v2.php";

/// Namespace every operation element is declared under
pub const SERVICE_NAMESPACE: &str = "http://tempuri.org/";

/// Service code embedded in `checkLogin` requests
pub const AUTH_SERVICE_CODE: &str = "0627";

/// Service account embedded in `getCredits` requests
pub const CARD_SERVICE_USERNAME: &str = "sucardws";

/// Service account password embedded in `getCredits` requests
pub const CARD_SERVICE_PASSWORD: &str = "w3bk10sk";

/// Service code embedded in `getCourseSchedule` requests
pub const SCHEDULE_SERVICE_CODE: &str = "0212";

/// Organisation role embedded in `getCourseSchedule` requests
pub const SCHEDULE_ORG_ROLE: &str = "student";

/// Service code embedded in `people` requests
pub const PEOPLE_SERVICE_CODE: &str = "0155";

/// Person type used when the caller does not specify one
pub const PEOPLE_DEFAULT_TYPE: &str = "student";

/// Organisational unit embedded in `people` requests
pub const PEOPLE_ORG_UNIT: &str = "staff";

/// Weekday section tags of the course schedule response, in week order
pub const WEEKDAY_SECTIONS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Schedule entries containing any of these markers are not courses
pub const SCHEDULE_EXCLUDE_MARKERS: [&str; 3] = ["Recit", "Discus", "Lab"];
