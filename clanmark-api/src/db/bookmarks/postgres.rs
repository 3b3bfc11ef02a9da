use diesel::prelude::*;
use diesel::{dsl::now, upsert::excluded};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use clanmark_types::bookmark::db::{Bookmark, NewBookmark, NewBookmarkedPost};
use clanmark_types::post::db::Post as PostRow;
use clanmark_types::schema::{bookmarked_posts, bookmarks, categories, clans, posts, users};
use clanmark_types::{Author, Category, Clan, Post};

use crate::db::PostgresDb;
use crate::utils::{DatabaseError, Result};

use super::AbstractBookmarks;

#[rocket::async_trait]
impl AbstractBookmarks for PostgresDb {
    async fn fetch_bookmark(&self, owner_id: i32) -> Result<Option<Bookmark>> {
        let mut conn = self.conn().await?;
        let bookmark = bookmarks::table
            .filter(bookmarks::owner_id.eq(owner_id))
            .select(Bookmark::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(bookmark)
    }

    async fn fetch_bookmarked_post_ids(&self, owner_id: i32) -> Result<Option<Vec<i32>>> {
        let Some(bookmark) = self.fetch_bookmark(owner_id).await? else {
            return Ok(None);
        };

        let mut conn = self.conn().await?;
        let ids = bookmarked_posts::table
            .filter(bookmarked_posts::bookmark_id.eq(bookmark.id))
            .order_by(bookmarked_posts::id.asc())
            .select(bookmarked_posts::post_id)
            .load::<i32>(&mut conn)
            .await?;
        Ok(Some(ids))
    }

    async fn fetch_bookmarked_posts(&self, owner_id: i32) -> Result<Option<Vec<Post>>> {
        let Some(bookmark) = self.fetch_bookmark(owner_id).await? else {
            return Ok(None);
        };

        let mut conn = self.conn().await?;
        let rows = bookmarked_posts::table
            .inner_join(
                posts::table
                    .inner_join(users::table)
                    .left_join(categories::table)
                    .left_join(clans::table),
            )
            .filter(bookmarked_posts::bookmark_id.eq(bookmark.id))
            .order_by(bookmarked_posts::id.asc())
            .select((
                PostRow::as_select(),
                Author::as_select(),
                Option::<Category>::as_select(),
                Option::<Clan>::as_select(),
            ))
            .load::<(PostRow, Author, Option<Category>, Option<Clan>)>(&mut conn)
            .await?;

        Ok(Some(
            rows.into_iter()
                .map(|(post, author, category, clan)| post.expand(author, category, clan))
                .collect(),
        ))
    }

    async fn add_bookmarked_post(&self, owner_id: i32, post_id: i32) -> Result<bool> {
        let mut conn = self.conn().await?;
        conn.transaction::<_, DatabaseError, _>(|conn| {
            async move {
                // no-op update so the id of an existing record is returned as well
                let bookmark_id: i32 = diesel::insert_into(bookmarks::table)
                    .values(&NewBookmark { owner_id })
                    .on_conflict(bookmarks::owner_id)
                    .do_update()
                    .set(bookmarks::owner_id.eq(excluded(bookmarks::owner_id)))
                    .returning(bookmarks::id)
                    .get_result(conn)
                    .await?;

                let inserted = diesel::insert_into(bookmarked_posts::table)
                    .values(&NewBookmarkedPost {
                        bookmark_id,
                        post_id,
                    })
                    .on_conflict((bookmarked_posts::bookmark_id, bookmarked_posts::post_id))
                    .do_nothing()
                    .execute(conn)
                    .await?;
                if inserted == 0 {
                    return Ok(false);
                }

                diesel::update(bookmarks::table.find(bookmark_id))
                    .set(bookmarks::updated_at.eq(now))
                    .execute(conn)
                    .await?;
                Ok(true)
            }
            .scope_boxed()
        })
        .await
    }

    async fn remove_bookmarked_post(&self, owner_id: i32, post_id: i32) -> Result<bool> {
        let mut conn = self.conn().await?;
        conn.transaction::<_, DatabaseError, _>(|conn| {
            async move {
                let owned = bookmarks::table
                    .filter(bookmarks::owner_id.eq(owner_id))
                    .select(bookmarks::id);

                let removed = diesel::delete(
                    bookmarked_posts::table
                        .filter(bookmarked_posts::post_id.eq(post_id))
                        .filter(bookmarked_posts::bookmark_id.eq_any(owned)),
                )
                .execute(conn)
                .await?;
                if removed == 0 {
                    return Ok(false);
                }

                diesel::update(bookmarks::table.filter(bookmarks::owner_id.eq(owner_id)))
                    .set(bookmarks::updated_at.eq(now))
                    .execute(conn)
                    .await?;
                Ok(true)
            }
            .scope_boxed()
        })
        .await
    }
}
