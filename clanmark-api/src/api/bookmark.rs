use super::errors::Error;
use super::guards;
use crate::db::{AbstractBookmarks, AbstractPosts, Database};

use clanmark_types::{Message, Post};
use rocket::serde::json::Json;
use rocket::State;
use tracing::{debug, info};

/// The path segment could not be parsed as a post id. No such post can exist.
fn parse_post_id(post_id: Result<i32, &str>) -> Result<i32, Error> {
    post_id.map_err(|raw| {
        debug!(raw, "malformed post id");
        Error::not_found("Post not found")
    })
}

/// List bookmarked posts
#[utoipa::path(
    get,
    path = "/api/bookmarks",
    responses(
        (status = 200, description = "Bookmarked posts in the order they were added", body = Vec<Post>),
        (status = 404, description = "No bookmark found for this user", body = Message),
        (status = 500, description = "Server error", body = Message)
    )
)]
#[get("/")]
pub async fn list_bookmarked_posts(
    db: &State<Database>,
    _required: guards::Auth,
    user: guards::CurrentUser,
) -> Result<Json<Vec<Post>>, Error> {
    let posts = db
        .fetch_bookmarked_posts(user.id)
        .await?
        .ok_or_else(|| Error::not_found("No bookmark found for this user"))?;
    debug!(user_id = user.id, count = posts.len(), "bookmarked posts listed");

    Ok(Json(posts))
}

/// Add a post to the bookmark list
#[utoipa::path(
    post,
    path = "/api/bookmarks/{post_id}",
    params(
        ("post_id" = i32, Path, description = "The post id to be bookmarked")
    ),
    responses(
        (status = 200, description = "Post added to bookmark successfully", body = Message),
        (status = 400, description = "Post already bookmarked", body = Message),
        (status = 404, description = "Post not found", body = Message),
        (status = 500, description = "Server error", body = Message)
    )
)]
#[post("/<post_id>")]
pub async fn add_to_bookmark(
    db: &State<Database>,
    _required: guards::Auth,
    user: guards::CurrentUser,
    post_id: Result<i32, &str>,
) -> Result<Json<Message>, Error> {
    let post_id = parse_post_id(post_id)?;
    if !db.post_exists(post_id).await? {
        return Err(Error::not_found("Post not found"));
    }

    if !db.add_bookmarked_post(user.id, post_id).await? {
        return Err(Error::bad_request("Post already bookmarked"));
    }
    info!(user_id = user.id, post_id, "post added to bookmark");

    Ok(Json(Message::new("Post added to bookmark successfully")))
}

/// Remove a post from the bookmark list
#[utoipa::path(
    delete,
    path = "/api/bookmarks/{post_id}",
    params(
        ("post_id" = i32, Path, description = "The post id to be removed")
    ),
    responses(
        (status = 200, description = "Post removed from bookmark successfully", body = Message),
        (status = 404, description = "Post not found, or not in the bookmark list", body = Message),
        (status = 500, description = "Server error", body = Message)
    )
)]
#[delete("/<post_id>")]
pub async fn delete_from_bookmark(
    db: &State<Database>,
    _required: guards::Auth,
    user: guards::CurrentUser,
    post_id: Result<i32, &str>,
) -> Result<Json<Message>, Error> {
    let post_id = parse_post_id(post_id)?;
    if !db.post_exists(post_id).await? {
        return Err(Error::not_found("Post not found"));
    }

    if !db.remove_bookmarked_post(user.id, post_id).await? {
        return Err(Error::not_found("Post not found in bookmark list"));
    }
    info!(user_id = user.id, post_id, "post removed from bookmark");

    Ok(Json(Message::new("Post removed from bookmark successfully")))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_bookmarked_posts, add_to_bookmark, delete_from_bookmark]
}

pub(crate) mod misc {
    use super::*;

    use utoipa::OpenApi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Bookmarks API",
            description = "Per-user bookmark lists of posts",
            version = "1.0"
        ),
        paths(list_bookmarked_posts, add_to_bookmark, delete_from_bookmark),
        components(schemas(
            Message,
            Post,
            clanmark_types::Author,
            clanmark_types::Category,
            clanmark_types::Clan
        ))
    )]
    pub struct ApiDoc;
}
