use serde::{Deserialize, Serialize};

use crate::{Author, Category, Clan};

// API Response Types

/// A post with its category, clan and author expanded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: Option<Category>,
    pub clan: Option<Clan>,
    pub author: Author,
    #[cfg_attr(feature = "utoipa", schema(format = DateTime, value_type=String))]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: time::OffsetDateTime,
    #[cfg_attr(feature = "utoipa", schema(format = DateTime, value_type=String))]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: time::OffsetDateTime,
}

// Database Model Types
pub mod db {
    use serde::{Deserialize, Serialize};

    use crate::{Author, Category, Clan};

    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
    #[cfg_attr(
        feature = "diesel",
        derive(diesel::Queryable, diesel::Selectable, diesel::Identifiable),
        diesel(table_name = crate::posts),
        diesel(check_for_backend(diesel::pg::Pg))
    )]
    pub struct Post {
        pub id: i32,
        pub title: String,
        pub content: String,
        pub category_id: Option<i32>,
        pub clan_id: Option<i32>,
        pub author_id: i32,
        #[serde(with = "time::serde::rfc3339")]
        pub created_at: time::OffsetDateTime,
        #[serde(with = "time::serde::rfc3339")]
        pub updated_at: time::OffsetDateTime,
    }

    impl Post {
        pub fn expand(
            self,
            author: Author,
            category: Option<Category>,
            clan: Option<Clan>,
        ) -> super::Post {
            super::Post {
                id: self.id,
                title: self.title,
                content: self.content,
                category,
                clan,
                author,
                created_at: self.created_at,
                updated_at: self.updated_at,
            }
        }
    }
}
