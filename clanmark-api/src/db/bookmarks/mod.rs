use clanmark_types::bookmark::db::Bookmark;
use clanmark_types::Post;

use crate::utils::Result;

mod postgres;
mod reference;

/// Each user owns at most one bookmark record, created by the first add.
///
/// Mutations are conditional updates performed atomically by the driver, so
/// concurrent adds and removes of the same user can not lose each other.
#[rocket::async_trait]
pub trait AbstractBookmarks: Sync + Send {
    /// Fetch the bookmark record owned by a user.
    async fn fetch_bookmark(&self, owner_id: i32) -> Result<Option<Bookmark>>;

    /// Fetch the bookmarked post ids of a user, in the order they were added.
    async fn fetch_bookmarked_post_ids(&self, owner_id: i32) -> Result<Option<Vec<i32>>>;

    /// Fetch the bookmarked posts of a user with category, clan and author
    /// expanded, in the order they were added.
    ///
    /// Returns `None` when the user has no bookmark record at all.
    async fn fetch_bookmarked_posts(&self, owner_id: i32) -> Result<Option<Vec<Post>>>;

    /// Append a post, creating the record if needed. Returns `false` if the
    /// post was already bookmarked.
    async fn add_bookmarked_post(&self, owner_id: i32, post_id: i32) -> Result<bool>;

    /// Remove a post. Returns `false` if the user has no record or the post
    /// is not in it.
    async fn remove_bookmarked_post(&self, owner_id: i32, post_id: i32) -> Result<bool>;
}
