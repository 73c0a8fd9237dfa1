//! Game persistence functions, generic over `ConnectionTrait`.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};
use time::OffsetDateTime;

use crate::entities::games;
use crate::entities::games::{GameResult, GameState, Move};
use crate::errors::domain::DomainError;

/// Partial update applied to a game row; `None` fields stay untouched.
#[derive(Debug, Default)]
pub struct GameUpdate {
    pub state: Option<GameState>,
    pub player_right: Option<i64>,
    pub move_left: Option<Move>,
    pub move_right: Option<Move>,
    pub result: Option<GameResult>,
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, DomainError> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
        .map_err(DomainError::from)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, DomainError> {
    games::Entity::find_by_id(game_id)
        .one(conn)
        .await
        .map_err(DomainError::from)
}

/// Insert a fresh pending game with only the left seat taken.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_left: i64,
) -> Result<games::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    let game = games::ActiveModel {
        id: NotSet,
        state: Set(GameState::Pending),
        player_left: Set(player_left),
        player_right: NotSet,
        move_left: NotSet,
        move_right: NotSet,
        result: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
    };
    game.insert(conn).await.map_err(DomainError::from)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: games::Model,
    changes: GameUpdate,
) -> Result<games::Model, DomainError> {
    let mut game: games::ActiveModel = game.into();
    if let Some(state) = changes.state {
        game.state = Set(state);
    }
    if let Some(player_right) = changes.player_right {
        game.player_right = Set(Some(player_right));
    }
    if let Some(mv) = changes.move_left {
        game.move_left = Set(Some(mv));
    }
    if let Some(mv) = changes.move_right {
        game.move_right = Set(Some(mv));
    }
    if let Some(result) = changes.result {
        game.result = Set(Some(result));
    }
    game.updated_at = Set(OffsetDateTime::now_utc());
    game.update(conn).await.map_err(DomainError::from)
}

/// Delete by id; returns the number of rows removed.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    let res = games::Entity::delete_by_id(game_id)
        .exec(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(res.rows_affected)
}
