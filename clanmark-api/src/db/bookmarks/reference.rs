use std::collections::hash_map::Entry;

use itertools::Itertools;

use clanmark_types::bookmark::db::Bookmark;
use clanmark_types::{Author, Post};

use crate::db::{BookmarkList, ReferenceDb};
use crate::utils::Result;

use super::AbstractBookmarks;

#[rocket::async_trait]
impl AbstractBookmarks for ReferenceDb {
    async fn fetch_bookmark(&self, owner_id: i32) -> Result<Option<Bookmark>> {
        let bookmarks = self.bookmarks.lock().await;
        Ok(bookmarks.get(&owner_id).map(|list| list.bookmark.clone()))
    }

    async fn fetch_bookmarked_post_ids(&self, owner_id: i32) -> Result<Option<Vec<i32>>> {
        let bookmarks = self.bookmarks.lock().await;
        Ok(bookmarks.get(&owner_id).map(|list| list.post_ids.clone()))
    }

    async fn fetch_bookmarked_posts(&self, owner_id: i32) -> Result<Option<Vec<Post>>> {
        let Some(post_ids) = self.fetch_bookmarked_post_ids(owner_id).await? else {
            return Ok(None);
        };

        let posts = self.posts.lock().await;
        let users = self.users.lock().await;
        let categories = self.categories.lock().await;
        let clans = self.clans.lock().await;

        // posts or authors removed behind our back are left out
        let expanded = post_ids
            .iter()
            .filter_map(|id| posts.get(id))
            .filter_map(|post| {
                let author = users.get(&post.author_id).map(Author::from)?;
                let category = post
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                let clan = post.clan_id.and_then(|id| clans.get(&id).cloned());
                Some(post.clone().expand(author, category, clan))
            })
            .collect_vec();

        Ok(Some(expanded))
    }

    async fn add_bookmarked_post(&self, owner_id: i32, post_id: i32) -> Result<bool> {
        let mut bookmarks = self.bookmarks.lock().await;
        let next_id = bookmarks.len() as i32 + 1;
        let now = time::OffsetDateTime::now_utc();

        match bookmarks.entry(owner_id) {
            Entry::Occupied(mut entry) => {
                let list = entry.get_mut();
                if list.post_ids.contains(&post_id) {
                    return Ok(false);
                }
                list.post_ids.push(post_id);
                list.bookmark.updated_at = now;
            }
            Entry::Vacant(entry) => {
                entry.insert(BookmarkList {
                    bookmark: Bookmark {
                        id: next_id,
                        owner_id,
                        created_at: now,
                        updated_at: now,
                    },
                    post_ids: vec![post_id],
                });
            }
        }

        Ok(true)
    }

    async fn remove_bookmarked_post(&self, owner_id: i32, post_id: i32) -> Result<bool> {
        let mut bookmarks = self.bookmarks.lock().await;
        let Some(list) = bookmarks.get_mut(&owner_id) else {
            return Ok(false);
        };

        let before = list.post_ids.len();
        list.post_ids.retain(|id| *id != post_id);
        if list.post_ids.len() == before {
            return Ok(false);
        }

        list.bookmark.updated_at = time::OffsetDateTime::now_utc();
        Ok(true)
    }
}
