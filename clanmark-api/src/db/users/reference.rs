use crate::db::ReferenceDb;
use crate::utils::Result;

use super::AbstractUsers;

#[rocket::async_trait]
impl AbstractUsers for ReferenceDb {
    async fn user_exists(&self, id: i32) -> Result<bool> {
        Ok(self.users.lock().await.contains_key(&id))
    }
}
