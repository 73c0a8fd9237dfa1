//! User persistence functions, generic over `ConnectionTrait`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::users;
use crate::errors::domain::DomainError;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, DomainError> {
    users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
        .map_err(DomainError::from)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, DomainError> {
    users::Entity::find_by_id(user_id)
        .one(conn)
        .await
        .map_err(DomainError::from)
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<users::Model>, DomainError> {
    users::Entity::find()
        .filter(users::Column::Name.eq(name))
        .one(conn)
        .await
        .map_err(DomainError::from)
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    age: i32,
) -> Result<users::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    let user = users::ActiveModel {
        id: NotSet,
        name: Set(name),
        age: Set(age),
        created_at: Set(now),
        updated_at: Set(now),
    };
    user.insert(conn).await.map_err(DomainError::from)
}

/// Apply a partial update; absent fields are left untouched.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user: users::Model,
    name: Option<String>,
    age: Option<i32>,
) -> Result<users::Model, DomainError> {
    let mut user: users::ActiveModel = user.into();
    if let Some(name) = name {
        user.name = Set(name);
    }
    if let Some(age) = age {
        user.age = Set(age);
    }
    user.updated_at = Set(OffsetDateTime::now_utc());
    user.update(conn).await.map_err(DomainError::from)
}

/// Delete by id; returns the number of rows removed.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, DomainError> {
    let res = users::Entity::delete_by_id(user_id)
        .exec(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(res.rows_affected)
}
