//! JSON bodies for responses Rocket produces on its own: unmatched routes,
//! malformed path segments and failed request guards.

use clanmark_types::Message;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

use super::guards::GuardMessage;

#[catch(500)]
fn internal_server() -> Json<Message> {
    Json(Message::new("Server error"))
}

#[catch(default)]
fn default(status: Status, request: &Request<'_>) -> (Status, Json<Message>) {
    let GuardMessage(reason) = request.local_cache(|| GuardMessage(None));
    let message = reason
        .clone()
        .unwrap_or_else(|| status.reason_lossy().to_string());
    (status, Json(Message::new(message)))
}

pub fn catchers() -> Vec<rocket::Catcher> {
    catchers![internal_server, default]
}
