use serde::{Deserialize, Serialize};

/// Public projection of a user, embedded as the author of a post.
///
/// Only the columns listed here are ever selected from `users`, so credentials,
/// demographics and bookkeeping timestamps can not leak through serialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(
    feature = "diesel",
    derive(diesel::Queryable, diesel::Selectable),
    diesel(table_name = crate::users),
    diesel(check_for_backend(diesel::pg::Pg))
)]
pub struct Author {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub avatar: Option<String>,
}

// Database Model Types
pub mod db {
    use serde::{Deserialize, Serialize};

    /// Full user row. Owned by the accounts subsystem and never returned as is.
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
    #[cfg_attr(
        feature = "diesel",
        derive(diesel::Queryable, diesel::Selectable, diesel::Identifiable),
        diesel(table_name = crate::users),
        diesel(check_for_backend(diesel::pg::Pg))
    )]
    pub struct User {
        pub id: i32,
        pub username: String,
        pub full_name: String,
        pub email: String,
        pub password_hash: String,
        pub gender: Option<String>,
        pub avatar: Option<String>,
        #[serde(with = "time::serde::rfc3339")]
        pub created_at: time::OffsetDateTime,
        #[serde(with = "time::serde::rfc3339")]
        pub updated_at: time::OffsetDateTime,
    }

    impl From<&User> for super::Author {
        fn from(user: &User) -> Self {
            Self {
                id: user.id,
                username: user.username.clone(),
                full_name: user.full_name.clone(),
                avatar: user.avatar.clone(),
            }
        }
    }
}
