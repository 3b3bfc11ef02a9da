use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::api::configs::Config;
use crate::api::errors::Error;
use crate::db::{AbstractUsers, Database};

/// Reason of the last failed guard, rendered by the catchers.
pub struct GuardMessage(pub Option<String>);

fn reject<T>(request: &Request<'_>, status: Status, message: &str) -> Outcome<T, Error> {
    request.local_cache(|| GuardMessage(Some(message.to_string())));
    let error = match status.code {
        401 => Error::unauthorized(message),
        403 => Error::forbidden(message),
        _ => Error::internal_server(),
    };
    Outcome::Error((status, error))
}

pub struct Auth;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(config) = request.rocket().state::<Config>() else {
            return reject(request, Status::InternalServerError, "Missing Config");
        };

        if let Some(key) = config.api_key.as_ref() {
            match request.headers().get_one("Authorization") {
                Some(token) if token == key.as_str() => {}
                Some(_) => return reject(request, Status::Forbidden, "Invalid API Key"),
                None => return reject(request, Status::Unauthorized, "Missing API Key"),
            }
        }
        Outcome::Success(Auth)
    }
}

/// The signed in user, as identified by the upstream authentication layer.
pub struct CurrentUser {
    pub id: i32,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let (Some(config), Some(db)) = (
            request.rocket().state::<Config>(),
            request.rocket().state::<Database>(),
        ) else {
            return reject(request, Status::InternalServerError, "Missing State");
        };

        let Some(raw) = request.headers().get_one(&config.user_header) else {
            return reject(request, Status::Unauthorized, "Missing user session");
        };
        let Ok(id) = raw.trim().parse::<i32>() else {
            return reject(request, Status::Unauthorized, "Invalid user session");
        };

        match db.user_exists(id).await {
            Ok(true) => Outcome::Success(CurrentUser { id }),
            Ok(false) => reject(request, Status::Unauthorized, "Unknown user"),
            Err(e) => {
                tracing::error!(error = ?e, user_id = id, "failed to resolve session user");
                reject(request, Status::InternalServerError, "Server error")
            }
        }
    }
}
