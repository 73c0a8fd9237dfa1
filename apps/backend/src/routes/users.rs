//! User management routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::routes::parse_path_id;
use crate::services::users as users_service;
use crate::state::app_state::AppState;

/// `POST /users` body. The name travels as `nom` on the wire.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "nom")]
    pub name: String,
    pub age: i32,
}

/// `PATCH /user/{id}` body; absent fields are left untouched.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateUserRequest {
    #[serde(rename = "nom")]
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// GET /users
async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = users_service::list_users(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// POST /users
async fn create_user(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let user = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(users_service::create_user(txn, req.name, req.age).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(user))
}

/// GET /user/{id}
async fn get_user(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_path_id(&path).ok_or_else(|| AppError::not_found("Wrong id"))?;
    let user = users_service::get_user(app_state.db(), user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PATCH /user/{id}
async fn update_user(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_path_id(&path).ok_or_else(|| AppError::not_found("Wrong id"))?;
    let req = body.into_inner();
    let user = with_txn(&app_state, |txn| {
        Box::pin(async move {
            Ok(users_service::update_user(txn, user_id, req.name, req.age).await?)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /user/{id}
async fn delete_user(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_path_id(&path).ok_or_else(|| AppError::not_found("Wrong id"))?;
    with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(users_service::delete_user(txn, user_id).await?) })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    );
    cfg.service(
        web::resource("/user/{id}")
            .route(web::get().to(get_user))
            .route(web::patch().to(update_user))
            .route(web::delete().to(delete_user)),
    );
}
