//! Random rows for the reference database, and for PostgreSQL in [`postgres`].

use clanmark_types::bookmark::db::Bookmark;
use clanmark_types::post::db::Post;
use clanmark_types::user::db::User;
use clanmark_types::{Category, Clan};

use crate::db::{BookmarkList, ReferenceDb};

pub fn rand_str(length: usize) -> String {
    use rand::distr::Alphanumeric;
    use rand::Rng;

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn rand_id() -> i32 {
    use rand::Rng;

    rand::rng().random_range(1..i32::MAX)
}

fn now() -> time::OffsetDateTime {
    time::OffsetDateTime::now_utc()
}

pub async fn create_rand_user(db: &ReferenceDb) -> User {
    let username = rand_str(10);
    let user = User {
        id: rand_id(),
        full_name: format!("{} {}", rand_str(6), rand_str(8)),
        email: format!("{}@example.com", username),
        username,
        password_hash: rand_str(32),
        gender: Some("undisclosed".to_string()),
        avatar: Some(format!("https://cdn.example.com/{}.png", rand_str(8))),
        created_at: now(),
        updated_at: now(),
    };
    db.users.lock().await.insert(user.id, user.clone());
    user
}

pub async fn create_rand_category(db: &ReferenceDb) -> Category {
    let category = Category {
        id: rand_id(),
        name: rand_str(8),
        description: None,
        created_at: now(),
        updated_at: now(),
    };
    db.categories
        .lock()
        .await
        .insert(category.id, category.clone());
    category
}

pub async fn create_rand_clan(db: &ReferenceDb) -> Clan {
    let clan = Clan {
        id: rand_id(),
        name: rand_str(8),
        description: Some(rand_str(24)),
        created_at: now(),
        updated_at: now(),
    };
    db.clans.lock().await.insert(clan.id, clan.clone());
    clan
}

/// A post by a fresh author, filed under a fresh category and clan.
pub async fn create_rand_post(db: &ReferenceDb) -> Post {
    let author = create_rand_user(db).await;
    let category = create_rand_category(db).await;
    let clan = create_rand_clan(db).await;
    let post = Post {
        id: rand_id(),
        title: rand_str(12),
        content: rand_str(64),
        category_id: Some(category.id),
        clan_id: Some(clan.id),
        author_id: author.id,
        created_at: now(),
        updated_at: now(),
    };
    db.posts.lock().await.insert(post.id, post.clone());
    post
}

/// A record with no posts, as left behind after removing the last one.
pub async fn create_empty_bookmark(db: &ReferenceDb, owner_id: i32) -> Bookmark {
    let bookmark = Bookmark {
        id: rand_id(),
        owner_id,
        created_at: now(),
        updated_at: now(),
    };
    db.bookmarks.lock().await.insert(
        owner_id,
        BookmarkList {
            bookmark: bookmark.clone(),
            post_ids: vec![],
        },
    );
    bookmark
}

/// Rows inserted into the PostgreSQL database named by `databases.main.url`.
pub mod postgres {
    use diesel::prelude::*;
    use diesel_async::RunQueryDsl;
    use tokio::sync::OnceCell;

    use clanmark_types::post::db::Post;
    use clanmark_types::schema::{categories, clans, posts, users};
    use clanmark_types::user::db::User;
    use clanmark_types::{Category, Clan};

    use super::rand_str;
    use crate::api::configs;
    use crate::db::PostgresDb;

    static MIGRATED: OnceCell<()> = OnceCell::const_new();

    /// Connect the configured database, migrating it once per test run.
    ///
    /// Returns `None` when no url is configured, e.g.
    /// `CM_DATABASES='{main={url="postgres://localhost/clanmark"}}'`.
    pub async fn connect() -> Option<PostgresDb> {
        let config = configs::get_database_config(&configs::config_provider())
            .expect("valid database config");
        let Some(url) = config.url else {
            tracing::warn!("databases.main.url is not set, skipping postgres test");
            return None;
        };

        let migrate = &url;
        MIGRATED
            .get_or_init(|| async move {
                PostgresDb::run_migrations(migrate)
                    .await
                    .expect("migrations applied");
            })
            .await;
        Some(PostgresDb::new(&url, 4).expect("valid pool"))
    }

    pub async fn create_rand_user(db: &PostgresDb) -> User {
        let mut conn = db.conn().await.expect("connection");
        let username = rand_str(10);
        diesel::insert_into(users::table)
            .values((
                users::full_name.eq(format!("{} {}", rand_str(6), rand_str(8))),
                users::email.eq(format!("{}@example.com", username)),
                users::username.eq(username),
                users::password_hash.eq(rand_str(32)),
                users::gender.eq(Some("undisclosed")),
                users::avatar.eq(Some(format!("https://cdn.example.com/{}.png", rand_str(8)))),
            ))
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .expect("user inserted")
    }

    pub async fn create_rand_category(db: &PostgresDb) -> Category {
        let mut conn = db.conn().await.expect("connection");
        diesel::insert_into(categories::table)
            .values(categories::name.eq(rand_str(12)))
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .expect("category inserted")
    }

    pub async fn create_rand_clan(db: &PostgresDb) -> Clan {
        let mut conn = db.conn().await.expect("connection");
        diesel::insert_into(clans::table)
            .values((
                clans::name.eq(rand_str(12)),
                clans::description.eq(Some(rand_str(24))),
            ))
            .returning(Clan::as_returning())
            .get_result(&mut conn)
            .await
            .expect("clan inserted")
    }

    /// A post by a fresh author with the given category and clan.
    pub async fn create_post(
        db: &PostgresDb,
        category_id: Option<i32>,
        clan_id: Option<i32>,
    ) -> Post {
        let author = create_rand_user(db).await;
        let mut conn = db.conn().await.expect("connection");
        diesel::insert_into(posts::table)
            .values((
                posts::title.eq(rand_str(12)),
                posts::content.eq(rand_str(64)),
                posts::category_id.eq(category_id),
                posts::clan_id.eq(clan_id),
                posts::author_id.eq(author.id),
            ))
            .returning(Post::as_returning())
            .get_result(&mut conn)
            .await
            .expect("post inserted")
    }

    /// A post by a fresh author, filed under a fresh category and clan.
    pub async fn create_rand_post(db: &PostgresDb) -> Post {
        let category = create_rand_category(db).await;
        let clan = create_rand_clan(db).await;
        create_post(db, Some(category.id), Some(clan.id)).await
    }

    pub async fn delete_post(db: &PostgresDb, id: i32) {
        let mut conn = db.conn().await.expect("connection");
        let deleted = diesel::delete(posts::table.find(id))
            .execute(&mut conn)
            .await
            .expect("post deleted");
        assert_eq!(deleted, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_str() {
        let s1 = rand_str(10);
        assert_eq!(s1.len(), 10);
        let s2 = rand_str(10);
        assert_eq!(s2.len(), 10);
        assert_ne!(s1, s2)
    }
}
