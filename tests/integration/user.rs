use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn creates_a_user_with_no_courses() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::USERS, &json!({ "name": "Alice", "netid": "al1" }))
        .await;

    assert_eq!(res.status, 201);
    assert_eq!(
        res.body,
        json!({ "id": 1, "name": "Alice", "netid": "al1", "courses": [] })
    );
}

#[tokio::test]
async fn missing_name_or_netid_is_rejected() {
    let app = TestApp::spawn().await;

    for body in [json!({ "name": "Alice" }), json!({ "netid": "al1" })] {
        let res = app.post(routes::USERS, &body).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "Missing user name or netid" }));
    }

    let res = app.get(&routes::user(1)).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn netid_is_not_required_to_be_unique() {
    let app = TestApp::spawn().await;

    let first = app.create_user("Alice", "al1").await;
    let second = app.create_user("Alicia", "al1").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::user(3)).await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn lists_teaching_courses_before_enrolled_courses() {
    let app = TestApp::spawn().await;
    let enrolled = app.create_course("CS101", "Intro").await;
    let taught = app.create_course("CS3410", "Systems").await;
    let user = app.create_user("Alice", "al1").await;

    app.add_to_course(enrolled, user, "student").await;
    app.add_to_course(taught, user, "instructor").await;

    let res = app.get(&routes::user(user)).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.body["courses"],
        json!([
            { "id": taught, "code": "CS3410", "name": "Systems" },
            { "id": enrolled, "code": "CS101", "name": "Intro" }
        ])
    );
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = TestApp::spawn().await;

    for body in ["{\"name\": \"Alice\"", r#"[null, "Alice", "al1"]"#, "null"] {
        let res = app.post_raw(routes::USERS, body).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "Malformed request body" }));
    }

    let res = app.get(&routes::user(1)).await;
    assert_eq!(res.status, 404);
}
