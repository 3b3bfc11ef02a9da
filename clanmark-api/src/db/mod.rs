// Drivers
mod drivers;
pub use drivers::*;

// Operations
pub mod bookmarks;
pub mod posts;
pub mod users;

pub use bookmarks::AbstractBookmarks;
pub use posts::AbstractPosts;
pub use users::AbstractUsers;

pub trait AbstractDatabase:
    Sync + Send + bookmarks::AbstractBookmarks + posts::AbstractPosts + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}
impl AbstractDatabase for PostgresDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(reference) => reference,
            Database::Postgres(postgres) => postgres,
        }
    }
}
