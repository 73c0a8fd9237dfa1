//! Game lifecycle: create, invite, play, delete.
//!
//! The state machine only ever moves forward:
//! pending → ongoing → finished.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::rules;
use crate::entities::games;
use crate::entities::games::{GameState, Move};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games as games_repo;
use crate::repos::games::GameUpdate;
use crate::repos::users as users_repo;

/// Which seat of a game a user occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn side_of(game: &games::Model, user_id: i64) -> Option<Side> {
    if game.player_left == user_id {
        Some(Side::Left)
    } else if game.player_right == Some(user_id) {
        Some(Side::Right)
    } else {
        None
    }
}

async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, DomainError> {
    games_repo::find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))
}

pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, DomainError> {
    games_repo::list_all(conn).await
}

pub async fn get_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, DomainError> {
    require_game(conn, game_id).await
}

/// Open a new game: the caller takes the left seat, state starts pending.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    creator_id: i64,
) -> Result<games::Model, DomainError> {
    let game = games_repo::insert(conn, creator_id).await?;
    info!(game_id = game.id, player_left = creator_id, "game created");
    Ok(game)
}

/// Seat a second player: pending → ongoing.
///
/// The invitee must exist and must be distinct from both the caller and
/// the left player, so a game can never pit a user against themselves.
pub async fn invite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    caller_id: i64,
    invitee_id: i64,
) -> Result<games::Model, DomainError> {
    let game = require_game(conn, game_id).await?;

    if game.state != GameState::Pending {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyStarted,
            "Game already started",
        ));
    }

    let invitee = users_repo::find_by_id(conn, invitee_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))?;

    if invitee.id == caller_id || invitee.id == game.player_left {
        return Err(DomainError::conflict(
            ConflictKind::SelfPlay,
            "You can't play against yourself",
        ));
    }

    let game = games_repo::update(
        conn,
        game,
        GameUpdate {
            state: Some(GameState::Ongoing),
            player_right: Some(invitee.id),
            ..GameUpdate::default()
        },
    )
    .await?;
    info!(
        game_id = game.id,
        player_right = invitee.id,
        "player invited, game ongoing"
    );
    Ok(game)
}

/// Record the caller's move; when both moves are in, resolve the game:
/// ongoing → finished.
///
/// Resubmitting overwrites the previous move (last write wins, which is
/// all the storage layer guarantees under concurrent submissions anyway).
pub async fn play<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    caller_id: i64,
    choice: &str,
) -> Result<games::Model, DomainError> {
    let game = require_game(conn, game_id).await?;

    let side = side_of(&game, caller_id)
        .ok_or_else(|| DomainError::forbidden("You are not a player of this game"))?;

    if game.state != GameState::Ongoing {
        return Err(DomainError::conflict(
            ConflictKind::NotStarted,
            "Game not started",
        ));
    }

    let mv = Move::from_token(choice).ok_or_else(|| DomainError::validation("Invalid choice"))?;

    let (move_left, move_right) = match side {
        Side::Left => (Some(mv), game.move_right),
        Side::Right => (game.move_left, Some(mv)),
    };

    let mut changes = GameUpdate::default();
    match side {
        Side::Left => changes.move_left = Some(mv),
        Side::Right => changes.move_right = Some(mv),
    }
    if let (Some(left), Some(right)) = (move_left, move_right) {
        changes.result = Some(rules::resolve(left, right));
        changes.state = Some(GameState::Finished);
    }

    let game = games_repo::update(conn, game, changes).await?;
    info!(
        game_id = game.id,
        user_id = caller_id,
        finished = game.state == GameState::Finished,
        "move recorded"
    );
    Ok(game)
}

/// Remove a game. Only a participant may do so; nothing else is touched.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    caller_id: i64,
) -> Result<(), DomainError> {
    let game = require_game(conn, game_id).await?;

    if side_of(&game, caller_id).is_none() {
        return Err(DomainError::forbidden("You are not a player of this game"));
    }

    games_repo::delete_by_id(conn, game.id).await?;
    info!(game_id, user_id = caller_id, "game deleted");
    Ok(())
}
