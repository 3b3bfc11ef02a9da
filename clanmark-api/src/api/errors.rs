use clanmark_types::Message;
use rocket::serde::json::Json;

use crate::utils::DatabaseError;

#[derive(Responder, Debug)]
pub enum Error {
    #[response(status = 404)]
    NotFound(Json<Message>),
    #[response(status = 400)]
    BadRequest(Json<Message>),
    #[response(status = 401)]
    Unauthorized(Json<Message>),
    #[response(status = 403)]
    Forbidden(Json<Message>),
    #[response(status = 500)]
    InternalServer(Json<Message>),
}

impl Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(Json(Message::new(message)))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::BadRequest(Json(Message::new(message)))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Error::Unauthorized(Json(Message::new(message)))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Error::Forbidden(Json(Message::new(message)))
    }

    pub fn internal_server() -> Self {
        Error::InternalServer(Json(Message::new("Server error")))
    }
}

impl From<DatabaseError> for Error {
    fn from(e: DatabaseError) -> Self {
        tracing::error!(error = ?e, "unexpected database failure");
        Error::internal_server()
    }
}
