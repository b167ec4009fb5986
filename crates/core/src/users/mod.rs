//! Users module - accounts, roles, and password hashing.

mod password;
mod users_model;
mod users_service;
mod users_traits;

pub use password::{hash_password, verify_password};
pub use users_model::{Actor, NewUser, NewUserRecord, User, UserCredentials, UserRole};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
