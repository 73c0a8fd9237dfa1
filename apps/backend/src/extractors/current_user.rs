use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::repos::users;
use crate::state::app_state::AppState;

/// Trusted header carrying the caller's numeric user id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Caller identity resolved from the `X-User-Id` header.
///
/// A missing header, a non-numeric value and an id with no matching user
/// row are all rejected the same way: 401, the caller is unknown.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw = req
                .headers()
                .get(USER_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(AppError::unauthorized_user)?;

            let user_id = parse_user_id(raw).ok_or_else(AppError::unauthorized_user)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let user = users::find_by_id(app_state.db(), user_id)
                .await
                .map_err(AppError::from)?
                .ok_or_else(AppError::unauthorized_user)?;

            debug!(user_id = user.id, "caller resolved");
            Ok(CurrentUser {
                id: user.id,
                name: user.name,
            })
        })
    }
}

/// Digits only: no sign, no whitespace, no decimal point.
fn parse_user_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
