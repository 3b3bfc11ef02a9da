use crate::utils::Result;

mod postgres;
mod reference;

#[rocket::async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Whether a user with this id exists.
    async fn user_exists(&self, id: i32) -> Result<bool>;
}
