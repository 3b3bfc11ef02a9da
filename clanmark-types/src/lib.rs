pub mod bookmark;
pub mod category;
pub mod clan;
pub mod post;
pub mod user;

#[cfg(feature = "diesel")]
pub mod schema;

#[cfg(feature = "diesel")]
pub use schema::*;

// Re-export for convenience
pub use bookmark::Message;
pub use category::Category;
pub use clan::Clan;
pub use post::Post;
pub use user::Author;

#[cfg(test)]
mod tests {
    use super::*;

    fn rand_user() -> user::db::User {
        let now = time::OffsetDateTime::now_utc();
        user::db::User {
            id: 7,
            username: "rustacean".to_string(),
            full_name: "Ferris Crab".to_string(),
            email: "ferris@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            gender: Some("crab".to_string()),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn author_projection_hides_private_fields() {
        let author = Author::from(&rand_user());
        let value = serde_json::to_value(&author).unwrap();
        let keys = value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();

        assert_eq!(keys.len(), 4);
        for hidden in ["password_hash", "gender", "email", "created_at", "updated_at"] {
            assert!(!keys.iter().any(|k| k == hidden), "{} leaked", hidden);
        }
        assert_eq!(value["username"], "rustacean");
    }

    #[test]
    fn expand_post_keeps_associations() {
        let now = time::OffsetDateTime::now_utc();
        let row = post::db::Post {
            id: 1,
            title: "Clan meetup".to_string(),
            content: "Saturday".to_string(),
            category_id: None,
            clan_id: Some(3),
            author_id: 7,
            created_at: now,
            updated_at: now,
        };
        let clan = Clan {
            id: 3,
            name: "Rustaceans".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };

        let post = row.expand(Author::from(&rand_user()), None, Some(clan.clone()));
        assert_eq!(post.id, 1);
        assert_eq!(post.clan, Some(clan));
        assert!(post.category.is_none());
        assert_eq!(post.author.id, 7);

        let value = serde_json::to_value(&post).unwrap();
        assert!(value["category"].is_null());
        assert_eq!(value["clan"]["name"], "Rustaceans");
    }
}
