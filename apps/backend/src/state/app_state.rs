use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The store connection is the only shared state; handlers receive it
/// through `web::Data<AppState>` rather than any global.
#[derive(Debug, Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
