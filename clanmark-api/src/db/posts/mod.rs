use crate::utils::Result;

mod postgres;
mod reference;

/// Read access to posts owned by the posts service.
#[rocket::async_trait]
pub trait AbstractPosts: Sync + Send {
    /// Whether a post with this id exists.
    async fn post_exists(&self, id: i32) -> Result<bool>;
}
