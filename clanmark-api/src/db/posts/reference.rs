use crate::db::ReferenceDb;
use crate::utils::Result;

use super::AbstractPosts;

#[rocket::async_trait]
impl AbstractPosts for ReferenceDb {
    async fn post_exists(&self, id: i32) -> Result<bool> {
        Ok(self.posts.lock().await.contains_key(&id))
    }
}
