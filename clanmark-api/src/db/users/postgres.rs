use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use clanmark_types::schema::users;

use crate::db::PostgresDb;
use crate::utils::Result;

use super::AbstractUsers;

#[rocket::async_trait]
impl AbstractUsers for PostgresDb {
    async fn user_exists(&self, id: i32) -> Result<bool> {
        let mut conn = self.conn().await?;
        let exists = diesel::select(diesel::dsl::exists(users::table.find(id)))
            .get_result(&mut conn)
            .await?;
        Ok(exists)
    }
}
