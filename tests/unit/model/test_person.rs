use suportal_client::error::AppError;
use suportal_client::model::Person;

fn people_response(inner: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body><peopleResponse>{inner}</peopleResponse></soap:Body>\
         </soap:Envelope>"
    )
}

#[test]
fn test_person_list_follows_email_order() {
    let xml = people_response(
        "<email>jdoe@sabanciuniv.edu</email>\
         <email>asmith@sabanciuniv.edu</email>\
         <name>John Doe</name>\
         <name>Alice Smith</name>\
         <birthdayprefix>01-02</birthdayprefix>\
         <birthdayprefix>03-04</birthdayprefix>\
         <photo>https://photos.example/jdoe.jpg</photo>\
         <photo>https://photos.example/asmith.jpg</photo>\
         <degree>BSc</degree>\
         <degree>MSc</degree>\
         <program>Computer Science</program>\
         <program>Economics</program>",
    );
    let people = Person::list_from_xml(&xml).unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].username, "jdoe");
    assert_eq!(people[1].username, "asmith");
    assert_eq!(people[0].name.as_deref(), Some("John Doe"));
    assert_eq!(people[1].program.as_deref(), Some("Economics"));
}

#[test]
fn test_person_missing_fields_stay_unset() {
    let xml = people_response(
        "<email>jdoe@sabanciuniv.edu</email>\
         <email>asmith@sabanciuniv.edu</email>\
         <name>John Doe</name>",
    );
    let people = Person::list_from_xml(&xml).unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name.as_deref(), Some("John Doe"));
    assert!(people[1].name.is_none());
    assert!(people[0].birthday.is_none());
    assert!(people[1].photo.is_none());
}

#[test]
fn test_person_username_is_email_local_part() {
    let xml = people_response("<email>long.name@sabanciuniv.edu</email>");
    let people = Person::list_from_xml(&xml).unwrap();

    assert_eq!(people[0].username, "long.name");
}

#[test]
fn test_person_email_without_at_is_kept_whole() {
    let xml = people_response("<email>justausername</email>");
    let people = Person::list_from_xml(&xml).unwrap();

    assert_eq!(people[0].username, "justausername");
}

#[test]
fn test_person_no_matches_yield_empty_list() {
    let xml = people_response("");
    let people = Person::list_from_xml(&xml).unwrap();

    assert!(people.is_empty());
}

#[test]
fn test_person_surplus_field_group_is_malformed() {
    let xml = people_response(
        "<email>jdoe@sabanciuniv.edu</email>\
         <name>John Doe</name>\
         <name>Ghost Entry</name>",
    );
    let err = Person::list_from_xml(&xml).unwrap_err();

    match err {
        AppError::MalformedResponse(msg) => assert!(msg.contains("name")),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}
