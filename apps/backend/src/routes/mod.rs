use actix_web::web;

pub mod games;
pub mod health;
pub mod users;

/// Configure application routes.
///
/// `main.rs` wires these into the HttpServer behind the middleware
/// stack; tests register the same paths directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    users::configure_routes(cfg);
    games::configure_routes(cfg);
}

/// Parse a path id: decimal digits only. Anything else is treated as a
/// missing resource, not a malformed request.
pub(crate) fn parse_path_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
