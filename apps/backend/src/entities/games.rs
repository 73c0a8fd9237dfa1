use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// State, move and result columns are stored as short strings (not native
// database enums) so the same entity works on Postgres and SQLite.

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    #[sea_orm(string_value = "finished")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[sea_orm(string_value = "rock")]
    Rock,
    #[sea_orm(string_value = "paper")]
    Paper,
    #[sea_orm(string_value = "scissors")]
    Scissors,
}

impl Move {
    /// Parse a client-supplied move token. Anything but the three exact
    /// lowercase tokens is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "camelCase")]
pub enum GameResult {
    #[sea_orm(string_value = "winLeft")]
    WinLeft,
    #[sea_orm(string_value = "winRight")]
    WinRight,
    #[sea_orm(string_value = "draw")]
    Draw,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub state: GameState,
    #[sea_orm(column_name = "player_left")]
    pub player_left: i64,
    #[sea_orm(column_name = "player_right")]
    pub player_right: Option<i64>,
    #[sea_orm(column_name = "move_left")]
    pub move_left: Option<Move>,
    #[sea_orm(column_name = "move_right")]
    pub move_right: Option<Move>,
    pub result: Option<GameResult>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PlayerLeft",
        to = "super::users::Column::Id"
    )]
    PlayerLeftUser,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PlayerRight",
        to = "super::users::Column::Id"
    )]
    PlayerRightUser,
}

impl ActiveModelBehavior for ActiveModel {}
