use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use clanmark_types::bookmark::db::Bookmark;
use clanmark_types::post::db::Post;
use clanmark_types::user::db::User;
use clanmark_types::{Category, Clan};

/// A bookmark record together with its posts in insertion order.
#[derive(Debug, Clone)]
pub struct BookmarkList {
    pub bookmark: Bookmark,
    pub post_ids: Vec<i32>,
}

/// In-memory implementation, used when no database url is configured and in tests.
#[derive(Default, Clone)]
pub struct ReferenceDb {
    pub users: Arc<Mutex<HashMap<i32, User>>>,
    pub categories: Arc<Mutex<HashMap<i32, Category>>>,
    pub clans: Arc<Mutex<HashMap<i32, Clan>>>,
    pub posts: Arc<Mutex<HashMap<i32, Post>>>,
    /// Keyed by owner id.
    pub bookmarks: Arc<Mutex<HashMap<i32, BookmarkList>>>,
}
