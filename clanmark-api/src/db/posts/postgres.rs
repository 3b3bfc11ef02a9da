use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use clanmark_types::schema::posts;

use crate::db::PostgresDb;
use crate::utils::Result;

use super::AbstractPosts;

#[rocket::async_trait]
impl AbstractPosts for PostgresDb {
    async fn post_exists(&self, id: i32) -> Result<bool> {
        let mut conn = self.conn().await?;
        let exists = diesel::select(diesel::dsl::exists(posts::table.find(id)))
            .get_result(&mut conn)
            .await?;
        Ok(exists)
    }
}
