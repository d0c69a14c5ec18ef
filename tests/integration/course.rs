use serde_json::json;

use crate::common::{TestApp, routes};

mod course_creation {
    use super::*;

    #[tokio::test]
    async fn returns_the_new_course_with_empty_collections() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::COURSES, &json!({ "code": "CS101", "name": "Intro" }))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(
            res.body,
            json!({
                "id": 1,
                "code": "CS101",
                "name": "Intro",
                "assignments": [],
                "instructors": [],
                "students": []
            })
        );
    }

    #[tokio::test]
    async fn each_course_gets_a_fresh_id() {
        let app = TestApp::spawn().await;

        let first = app.create_course("CS101", "Intro").await;
        let second = app.create_course("CS101", "Intro").await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn missing_code_or_name_is_rejected_and_not_persisted() {
        let app = TestApp::spawn().await;

        for body in [
            json!({ "name": "Intro" }),
            json!({ "code": "CS101" }),
            json!({ "code": "", "name": "Intro" }),
            json!({}),
        ] {
            let res = app.post(routes::COURSES, &body).await;
            assert_eq!(res.status, 400);
            assert_eq!(res.body, json!({ "error": "Missing class name or code" }));
        }

        let res = app.get(routes::COURSES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::COURSES, "{\"code\": ").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "Malformed request body" }));
    }

    #[tokio::test]
    async fn non_object_bodies_are_rejected() {
        let app = TestApp::spawn().await;

        for body in [r#"["CS101", "Intro"]"#, "\"CS101\"", "null"] {
            let res = app.post_raw(routes::COURSES, body).await;
            assert_eq!(res.status, 400);
            assert_eq!(res.body, json!({ "error": "Malformed request body" }));
        }

        let res = app.get(routes::COURSES).await;
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn content_type_is_not_required() {
        let app = TestApp::spawn().await;

        let res = app
            .post_raw(routes::COURSES, r#"{"code": "CS101", "name": "Intro"}"#)
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["code"], "CS101");
    }
}

mod course_retrieval {
    use super::*;

    #[tokio::test]
    async fn lists_every_course_in_full() {
        let app = TestApp::spawn().await;
        let intro = app.create_course("CS101", "Intro").await;
        let systems = app.create_course("CS3410", "Systems").await;

        let res = app.get(routes::COURSES).await;

        assert_eq!(res.status, 200);
        let courses = res.body.as_array().expect("list is an array");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0]["id"], intro);
        assert_eq!(courses[1]["id"], systems);
        assert_eq!(courses[1]["name"], "Systems");
        assert_eq!(courses[1]["students"], json!([]));
    }

    #[tokio::test]
    async fn gets_a_single_course() {
        let app = TestApp::spawn().await;
        let id = app.create_course("CS101", "Intro").await;

        let res = app.get(&routes::course(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["code"], "CS101");
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::course(99)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({ "error": "Course not found" }));
    }

    #[tokio::test]
    async fn non_integer_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/courses/abc/").await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({ "error": "Course not found" }));
    }
}

mod course_deletion {
    use super::*;

    #[tokio::test]
    async fn get_delete_get_round_trip() {
        let app = TestApp::spawn().await;
        let id = app.create_course("CS101", "Intro").await;

        let before = app.get(&routes::course(id)).await;
        assert_eq!(before.status, 200);

        let deleted = app.delete(&routes::course(id)).await;
        assert_eq!(deleted.status, 200);
        assert_eq!(deleted.body, before.body);

        let after = app.get(&routes::course(id)).await;
        assert_eq!(after.status, 404);
    }

    #[tokio::test]
    async fn returns_members_and_assignments_as_they_were() {
        let app = TestApp::spawn().await;
        let course = app.create_course("CS101", "Intro").await;
        let user = app.create_user("Alice", "al1").await;
        app.add_to_course(course, user, "instructor").await;
        app.post(
            &routes::course_assignment(course),
            &json!({ "title": "HW1", "due_date": 1700000000 }),
        )
        .await;

        let res = app.delete(&routes::course(course)).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["instructors"],
            json!([{ "id": user, "name": "Alice", "netid": "al1" }])
        );
        assert_eq!(res.body["assignments"][0]["title"], "HW1");
    }

    #[tokio::test]
    async fn removes_the_course_from_its_members() {
        let app = TestApp::spawn().await;
        let course = app.create_course("CS101", "Intro").await;
        let user = app.create_user("Alice", "al1").await;
        app.add_to_course(course, user, "student").await;

        app.delete(&routes::course(course)).await;

        let res = app.get(&routes::user(user)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["courses"], json!([]));
    }

    #[tokio::test]
    async fn deleting_an_unknown_course_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::course(5)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({ "error": "Course not found" }));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let app = TestApp::spawn().await;
        let first = app.create_course("CS101", "Intro").await;
        app.delete(&routes::course(first)).await;

        let second = app.create_course("CS102", "Data Structures").await;

        assert_ne!(first, second);
    }
}
