use crate::common;
use mockito::Matcher;
use tokio_test::assert_ok;
use suportal_client::error::AppError;

#[tokio::test]
async fn authenticate_without_credentials_reports_failure_code() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/authentication.php")
        .match_header("content-type", "text/xml; charset=utf-8")
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(common::soap_response(
            "<checkLoginResponse><errorcode>1</errorcode></checkLoginResponse>",
        ))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let result = client.authenticate(None, None).await.unwrap();

    assert_eq!(result.error_code, 1);
    assert!(!result.is_success());
}

#[tokio::test]
async fn authenticate_sends_credentials_and_reads_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authentication.php")
        .match_body(Matcher::Regex("<username>student1</username>".to_string()))
        .with_status(200)
        .with_body(common::soap_response(
            "<checkLoginResponse><errorcode>0</errorcode></checkLoginResponse>",
        ))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let result = client
        .authenticate(Some("student1"), Some("hunter2"))
        .await
        .unwrap();

    assert_eq!(result.error_code, 0);
    assert!(result.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn sucard_always_has_all_three_collections() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sucard.php")
        .with_status(200)
        .with_body(common::soap_response("<getCreditsResponse></getCreditsResponse>"))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let history = assert_ok!(client.sucard("student1").await);

    assert!(history.meals.is_empty());
    assert!(history.transports.is_empty());
    assert!(history.prints.is_empty());
}

#[tokio::test]
async fn sucard_parses_records_in_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sucard.php")
        .with_status(200)
        .with_body(common::soap_response(
            "<getCreditsResponse>\
             <meal>\
             <record><date>03/02/2025</date><product>Lunch</product><amount>45.50</amount><piece>1</piece></record>\
             <record><date>04/02/2025</date><product>Dinner</product><amount>60.00</amount><piece>1</piece></record>\
             </meal>\
             <transport><record><date>05/02/2025</date><product>Shuttle</product><amount>10.00</amount><piece>2</piece></record></transport>\
             <print></print>\
             </getCreditsResponse>",
        ))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let history = client.sucard("student1").await.unwrap();

    assert_eq!(history.meals.len(), 2);
    assert_eq!(history.meals[0].product, "Lunch");
    assert_eq!(history.meals[1].date, "04/02/2025");
    assert_eq!(history.transports[0].piece, "2");
    assert!(history.prints.is_empty());
}

#[tokio::test]
async fn course_schedule_for_unenrolled_user_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/courseschedule.php")
        .with_status(200)
        .with_body(common::soap_response(
            "<getCourseScheduleResponse>\
             <monday></monday><tuesday></tuesday><wednesday></wednesday>\
             <thursday></thursday><friday></friday>\
             </getCourseScheduleResponse>",
        ))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let schedule = client.course_schedule("student1").await.unwrap();

    assert!(schedule.is_empty());
}

#[tokio::test]
async fn course_schedule_deduplicates_and_guards_codes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/courseschedule.php")
        .with_status(200)
        .with_body(common::soap_response(
            "<getCourseScheduleResponse>\
             <monday><course>CalculusMATH101</course><course>Calculus RecitationMATH101R</course></monday>\
             <tuesday><course>Independent Study.</course></tuesday>\
             <wednesday><course>AnalysisMATH101</course></wednesday>\
             <thursday></thursday>\
             <friday><course>Intro to SociologySOC101</course></friday>\
             </getCourseScheduleResponse>",
        ))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let schedule = client.course_schedule("student1").await.unwrap();

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule.courses["MATH101"], "Calculus");
    assert_eq!(schedule.courses["SOC101"], "Intro to Sociology");
    assert!(schedule.courses.keys().all(|code| !code.starts_with('.')));
}

#[tokio::test]
async fn get_person_maps_usernames_and_missing_fields() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/people_v2.php")
        .with_status(200)
        .with_body(common::soap_response(
            "<peopleResponse>\
             <email>jdoe@sabanciuniv.edu</email>\
             <email>asmith@sabanciuniv.edu</email>\
             <name>John Doe</name>\
             <name>Alice Smith</name>\
             <degree>BSc</degree>\
             </peopleResponse>",
        ))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let people = client.get_person("doe", None, None, None).await.unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].username, "jdoe");
    assert_eq!(people[1].username, "asmith");
    assert_eq!(people[0].degree.as_deref(), Some("BSc"));
    assert!(people[1].degree.is_none());
    assert!(people[0].photo.is_none());
}

#[tokio::test]
async fn get_person_encodes_query_and_keeps_staff_unit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/people_v2.php")
        .match_body(Matcher::AllOf(vec![
            // base64 of "lorem"
            Matcher::Regex("<searchtext>bG9yZW0=</searchtext>".to_string()),
            Matcher::Regex("<ou>staff</ou>".to_string()),
            Matcher::Regex("<type>student</type>".to_string()),
        ]))
        .with_status(200)
        .with_body(common::soap_response("<peopleResponse></peopleResponse>"))
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let people = client.get_person("lorem", None, None, None).await.unwrap();

    assert!(people.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_propagates_as_unexpected_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sucard.php")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.sucard("student1").await.unwrap_err();

    match err {
        AppError::Unexpected(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("Expected Unexpected, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_reads_return_identical_results() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/courseschedule.php")
        .with_status(200)
        .with_body(common::soap_response(
            "<getCourseScheduleResponse>\
             <monday><course>CalculusMATH101</course></monday>\
             <tuesday></tuesday><wednesday></wednesday><thursday></thursday><friday></friday>\
             </getCourseScheduleResponse>",
        ))
        .expect(2)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let first = client.course_schedule("student1").await.unwrap();
    let second = client.course_schedule("student1").await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}
