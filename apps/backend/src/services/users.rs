//! User registration, lookup, partial update and deletion.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::users as users_repo;

/// Names are limited to the storage column width.
pub const MAX_NAME_CHARS: usize = 255;

/// Players must be strictly older than this.
pub const MIN_AGE: i32 = 21;

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(DomainError::validation("Invalid form"));
    }
    Ok(())
}

fn validate_age(age: i32) -> Result<(), DomainError> {
    if age <= MIN_AGE {
        return Err(DomainError::validation("Wrong age"));
    }
    Ok(())
}

async fn ensure_name_free<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<(), DomainError> {
    if users_repo::find_by_name(conn, name).await?.is_some() {
        return Err(DomainError::validation("Name already exists"));
    }
    Ok(())
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, DomainError> {
    users_repo::list_all(conn).await
}

pub async fn get_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<users::Model, DomainError> {
    users_repo::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "Wrong id"))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    age: i32,
) -> Result<users::Model, DomainError> {
    validate_name(&name)?;
    validate_age(age)?;
    ensure_name_free(conn, &name).await?;

    let user = users_repo::insert(conn, name, age).await?;
    info!(user_id = user.id, "user created");
    Ok(user)
}

/// Partial update: only provided fields change, each validated with the
/// same rules as creation.
pub async fn update_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    name: Option<String>,
    age: Option<i32>,
) -> Result<users::Model, DomainError> {
    let user = get_user(conn, user_id).await?;

    if let Some(name) = name.as_deref() {
        validate_name(name)?;
        ensure_name_free(conn, name).await?;
    }
    if let Some(age) = age {
        validate_age(age)?;
    }

    let user = users_repo::update(conn, user, name, age).await?;
    info!(user_id = user.id, "user updated");
    Ok(user)
}

/// Hard delete. The row is re-read afterwards; a survivor is reported as
/// a store inconsistency.
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<(), DomainError> {
    let user = get_user(conn, user_id).await?;
    users_repo::delete_by_id(conn, user.id).await?;

    if users_repo::find_by_id(conn, user_id).await?.is_some() {
        return Err(DomainError::infra("user has not been deleted"));
    }
    info!(user_id, "user deleted");
    Ok(())
}
