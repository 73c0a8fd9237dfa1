use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    db_owner: DbOwner,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            db_owner: DbOwner::App,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_owner(mut self, owner: DbOwner) -> Self {
        self.db_owner = owner;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let profile = self
            .db_profile
            .ok_or_else(|| AppError::config("a database profile is required to build AppState"))?;
        let db = bootstrap_db(profile, self.db_owner).await?;
        Ok(AppState::new(db))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
