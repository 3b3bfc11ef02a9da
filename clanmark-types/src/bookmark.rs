use serde::{Deserialize, Serialize};

// API Response Types

/// Body of every acknowledgement and error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Database Model Types
pub mod db {
    use serde::{Deserialize, Serialize};

    /// The bookmark record of a single user. Its posts live in `bookmarked_posts`.
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
    #[cfg_attr(
        feature = "diesel",
        derive(diesel::Queryable, diesel::Selectable, diesel::Identifiable),
        diesel(table_name = crate::bookmarks),
        diesel(check_for_backend(diesel::pg::Pg))
    )]
    pub struct Bookmark {
        pub id: i32,
        pub owner_id: i32,
        #[serde(with = "time::serde::rfc3339")]
        pub created_at: time::OffsetDateTime,
        #[serde(with = "time::serde::rfc3339")]
        pub updated_at: time::OffsetDateTime,
    }

    #[derive(Debug, Clone)]
    #[cfg_attr(
        feature = "diesel",
        derive(diesel::Insertable),
        diesel(table_name = crate::bookmarks)
    )]
    pub struct NewBookmark {
        pub owner_id: i32,
    }

    #[derive(Debug, Clone)]
    #[cfg_attr(
        feature = "diesel",
        derive(diesel::Insertable),
        diesel(table_name = crate::bookmarked_posts)
    )]
    pub struct NewBookmarkedPost {
        pub bookmark_id: i32,
        pub post_id: i32,
    }
}
