//! Game lifecycle routes.
//!
//! Mutations authenticate the caller through the `X-User-Id` header (the
//! `CurrentUser` extractor), so a bad caller is rejected before any path
//! id is looked at.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::routes::parse_path_id;
use crate::services::games as games_service;
use crate::state::app_state::AppState;

/// `PATCH /game/{id}` body.
#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub choice: String,
}

fn game_path_id(raw: &str) -> Result<i64, AppError> {
    parse_path_id(raw).ok_or_else(|| AppError::not_found("Game not found"))
}

/// GET /games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = games_service::list_games(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// POST /games
async fn create_game(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let creator_id = current_user.id;
    let game = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(games_service::create_game(txn, creator_id).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(game))
}

/// GET /game/{id}
async fn get_game(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let game_id = game_path_id(&path)?;
    let game = games_service::get_game(app_state.db(), game_id).await?;
    Ok(HttpResponse::Ok().json(game))
}

/// PATCH /game/{id}/add/{player_right_id}
async fn invite(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (raw_game_id, raw_invitee_id) = path.into_inner();
    let game_id = game_path_id(&raw_game_id)?;
    let invitee_id =
        parse_path_id(&raw_invitee_id).ok_or_else(|| AppError::not_found("User not found"))?;

    let caller_id = current_user.id;
    let game = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(games_service::invite(txn, game_id, caller_id, invitee_id).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(game))
}

/// PATCH /game/{id}
async fn play(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<PlayRequest>,
) -> Result<HttpResponse, AppError> {
    let game_id = game_path_id(&path)?;
    let caller_id = current_user.id;
    let choice = body.into_inner().choice;

    let game = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(games_service::play(txn, game_id, caller_id, &choice).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(game))
}

/// DELETE /game/{id}
async fn delete_game(
    app_state: web::Data<AppState>,
    current_user: CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let game_id = game_path_id(&path)?;
    let caller_id = current_user.id;

    with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(games_service::delete_game(txn, game_id, caller_id).await?) })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(
        web::resource("/game/{id}/add/{player_right_id}").route(web::patch().to(invite)),
    );
    cfg.service(
        web::resource("/game/{id}")
            .route(web::get().to(get_game))
            .route(web::patch().to(play))
            .route(web::delete().to(delete_game)),
    );
}
