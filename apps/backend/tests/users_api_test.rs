mod common;

use actix_web::test;
use serde_json::{json, Value};

#[actix_web::test]
async fn create_then_fetch_user() {
    let app = common::init_app(common::build_test_state().await).await;

    let user = common::create_user(&app, "alice", 30).await;
    assert_eq!(user["name"], "alice");
    assert_eq!(user["age"], 30);
    let user_id = common::id_of(&user);

    let req = test::TestRequest::get()
        .uri(&format!("/user/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], user_id);
    assert_eq!(fetched["name"], "alice");
}

#[actix_web::test]
async fn list_users_returns_everyone() {
    let app = common::init_app(common::build_test_state().await).await;

    common::create_user(&app, "alice", 30).await;
    common::create_user(&app, "bob", 44).await;

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let users: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "alice");
    assert_eq!(users[1]["name"], "bob");
}

#[actix_web::test]
async fn age_21_is_rejected_age_22_accepted() {
    let app = common::init_app(common::build_test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "nom": "too-young", "age": 21 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Wrong age");

    let user = common::create_user(&app, "old-enough", 22).await;
    assert_eq!(user["age"], 22);
}

#[actix_web::test]
async fn duplicate_name_is_rejected() {
    let app = common::init_app(common::build_test_state().await).await;

    common::create_user(&app, "alice", 30).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "nom": "alice", "age": 35 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Name already exists");
}

#[actix_web::test]
async fn name_bounds_are_enforced() {
    let app = common::init_app(common::build_test_state().await).await;

    let empty = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "nom": "", "age": 30 }))
        .to_request();
    assert_eq!(test::call_service(&app, empty).await.status().as_u16(), 400);

    let too_long = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "nom": "x".repeat(256), "age": 30 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, too_long).await.status().as_u16(),
        400
    );

    // 255 characters is exactly the limit
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "nom": "x".repeat(255), "age": 30 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = common::init_app(common::build_test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"nom": "broken"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let app = common::init_app(common::build_test_state().await).await;

    for uri in ["/user/9999", "/user/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404, "{uri}");
        let body = test::read_body(resp).await;
        assert_eq!(body, "Wrong id");
    }
}

#[actix_web::test]
async fn partial_update_changes_only_provided_fields() {
    let app = common::init_app(common::build_test_state().await).await;

    let user = common::create_user(&app, "alice", 30).await;
    let user_id = common::id_of(&user);

    // Name only
    let req = test::TestRequest::patch()
        .uri(&format!("/user/{user_id}"))
        .set_json(json!({ "nom": "alicia" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "alicia");
    assert_eq!(updated["age"], 30);

    // Age only
    let req = test::TestRequest::patch()
        .uri(&format!("/user/{user_id}"))
        .set_json(json!({ "age": 31 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "alicia");
    assert_eq!(updated["age"], 31);
}

#[actix_web::test]
async fn update_applies_creation_rules() {
    let app = common::init_app(common::build_test_state().await).await;

    let user = common::create_user(&app, "alice", 30).await;
    common::create_user(&app, "bob", 44).await;
    let user_id = common::id_of(&user);

    let wrong_age = test::TestRequest::patch()
        .uri(&format!("/user/{user_id}"))
        .set_json(json!({ "age": 21 }))
        .to_request();
    let resp = test::call_service(&app, wrong_age).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(test::read_body(resp).await, "Wrong age");

    let taken_name = test::TestRequest::patch()
        .uri(&format!("/user/{user_id}"))
        .set_json(json!({ "nom": "bob" }))
        .to_request();
    let resp = test::call_service(&app, taken_name).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(test::read_body(resp).await, "Name already exists");

    let unknown = test::TestRequest::patch()
        .uri("/user/9999")
        .set_json(json!({ "age": 25 }))
        .to_request();
    assert_eq!(test::call_service(&app, unknown).await.status().as_u16(), 404);
}

#[actix_web::test]
async fn delete_user_removes_the_row() {
    let app = common::init_app(common::build_test_state().await).await;

    let user = common::create_user(&app, "alice", 30).await;
    let user_id = common::id_of(&user);

    let req = test::TestRequest::delete()
        .uri(&format!("/user/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/user/{user_id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);

    // Deleting again: the row is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/user/{user_id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);
}
