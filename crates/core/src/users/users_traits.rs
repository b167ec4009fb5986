use crate::errors::Result;
use crate::users::users_model::{Actor, NewUser, NewUserRecord, User, UserCredentials};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn get_user(&self, user_id: i32) -> Result<Option<User>>;
    async fn insert_user(&self, record: NewUserRecord) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a user. `requester` is the authenticated caller, if any.
    async fn register(&self, requester: Option<&Actor>, new_user: NewUser) -> Result<User>;
    /// Checks an email/password pair and returns the matching user.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User>;
    fn get_user(&self, user_id: i32) -> Result<User>;
}
