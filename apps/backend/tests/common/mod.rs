#![allow(dead_code)]

//! Shared test plumbing: an app wired like production (minus CORS), on
//! a migrated in-memory database.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;
use serde_json::{json, Value};

pub async fn build_test_state() -> AppState {
    build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("build test state")
}

pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestTrace)
            .configure(routes::configure),
    )
    .await
}

/// POST /users and return the created user body; panics on non-201.
pub async fn create_user<S, B>(app: &S, name: &str, age: i32) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "nom": name, "age": age }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "user creation failed");
    test::read_body_json(resp).await
}

/// POST /games as the given user and return the created game body.
pub async fn create_game<S, B>(app: &S, user_id: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/games")
        .insert_header(("X-User-Id", user_id.to_string()))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "game creation failed");
    test::read_body_json(resp).await
}

/// PATCH /game/{id}/add/{invitee} as the given user; returns the response.
pub async fn invite<S, B>(
    app: &S,
    game_id: i64,
    caller_id: i64,
    invitee_id: i64,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::patch()
        .uri(&format!("/game/{game_id}/add/{invitee_id}"))
        .insert_header(("X-User-Id", caller_id.to_string()))
        .to_request();
    test::call_service(app, req).await
}

/// PATCH /game/{id} with a choice as the given user; returns the response.
pub async fn play<S, B>(app: &S, game_id: i64, caller_id: i64, choice: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::patch()
        .uri(&format!("/game/{game_id}"))
        .insert_header(("X-User-Id", caller_id.to_string()))
        .set_json(json!({ "choice": choice }))
        .to_request();
    test::call_service(app, req).await
}

pub fn id_of(body: &Value) -> i64 {
    body["id"].as_i64().expect("body has a numeric id")
}
