use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{Error, Result, ValidationError};
use crate::users::password::{hash_password, verify_password};
use crate::users::users_model::{Actor, NewUser, NewUserRecord, User, UserRole};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

pub struct UserService<T: UserRepositoryTrait> {
    user_repo: Arc<T>,
}

impl<T: UserRepositoryTrait> UserService<T> {
    pub fn new(user_repo: Arc<T>) -> Self {
        UserService { user_repo }
    }
}

fn validate_new_user(requester: Option<&Actor>, new_user: &NewUser) -> Result<(UserRole, String)> {
    if new_user.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".into()).into());
    }
    let email = new_user.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(Error::invalid("a valid email address is required"));
    }
    if new_user.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::invalid(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let role = match new_user.role.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<UserRole>()?,
        _ => UserRole::Public,
    };

    // Self-service registration only creates citizen accounts.
    let requester_is_central = requester.is_some_and(|a| a.role == UserRole::Central);
    if role != UserRole::Public && !requester_is_central {
        return Err(Error::Forbidden(format!(
            "only central users may register '{role}' accounts"
        )));
    }
    if role == UserRole::StateUser && new_user.state_id.is_none() {
        return Err(ValidationError::MissingField("state_id".into()).into());
    }
    Ok((role, email))
}

#[async_trait]
impl<T: UserRepositoryTrait + Send + Sync> UserServiceTrait for UserService<T> {
    async fn register(&self, requester: Option<&Actor>, new_user: NewUser) -> Result<User> {
        let (role, email) = validate_new_user(requester, &new_user)?;
        let record = NewUserRecord {
            name: new_user.name.trim().to_string(),
            email,
            password_hash: hash_password(&new_user.password)?,
            role,
            state_id: new_user.state_id,
        };
        let user = self.user_repo.insert_user(record).await?;
        info!("Registered user {} with role {}", user.id, user.role);
        Ok(user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        let Some(credentials) = self.user_repo.find_credentials_by_email(&email)? else {
            return Err(Error::InvalidCredentials);
        };
        if !verify_password(password, &credentials.password_hash)? {
            warn!("Failed login attempt for user {}", credentials.user.id);
            return Err(Error::InvalidCredentials);
        }
        Ok(credentials.user)
    }

    fn get_user(&self, user_id: i32) -> Result<User> {
        self.user_repo
            .get_user(user_id)?
            .ok_or_else(|| Error::not_found("User", user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::users_model::UserCredentials;
    use chrono::NaiveDate;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockUserRepository {
        users: RwLock<Vec<UserCredentials>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
            Ok(self
                .users
                .read()
                .unwrap()
                .iter()
                .find(|c| c.user.email == email)
                .cloned())
        }

        fn get_user(&self, user_id: i32) -> Result<Option<User>> {
            Ok(self
                .users
                .read()
                .unwrap()
                .iter()
                .find(|c| c.user.id == user_id)
                .map(|c| c.user.clone()))
        }

        async fn insert_user(&self, record: NewUserRecord) -> Result<User> {
            let mut users = self.users.write().unwrap();
            if users.iter().any(|c| c.user.email == record.email) {
                return Err(crate::errors::DatabaseError::UniqueViolation(
                    "users.email".to_string(),
                )
                .into());
            }
            let user = User {
                id: users.len() as i32 + 1,
                name: record.name,
                email: record.email,
                role: record.role,
                state_id: record.state_id,
                created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            };
            users.push(UserCredentials {
                user: user.clone(),
                password_hash: record.password_hash,
            });
            Ok(user)
        }
    }

    fn new_user(email: &str, role: Option<&str>) -> NewUser {
        NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            role: role.map(str::to_string),
            state_id: Some(1),
        }
    }

    fn central() -> Actor {
        Actor {
            user_id: 1,
            email: "admin@pmajay.gov.in".to_string(),
            role: UserRole::Central,
            state_id: None,
        }
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let user = svc
            .register(None, new_user("Citizen@Example.com", None))
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Public);
        assert_eq!(user.email, "citizen@example.com");

        let authed = svc
            .authenticate("citizen@example.com ", "secret123")
            .await
            .unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        svc.register(None, new_user("a@b.in", None)).await.unwrap();

        let wrong = svc.authenticate("a@b.in", "nope-nope").await.unwrap_err();
        let unknown = svc.authenticate("x@b.in", "secret123").await.unwrap_err();
        assert!(matches!(wrong, Error::InvalidCredentials));
        assert!(matches!(unknown, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn privileged_roles_need_a_central_requester() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let err = svc
            .register(None, new_user("officer@mh.gov.in", Some("state_user")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let officer = svc
            .register(
                Some(&central()),
                new_user("officer@mh.gov.in", Some("state_user")),
            )
            .await
            .unwrap();
        assert_eq!(officer.role, UserRole::StateUser);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let mut input = new_user("a@b.in", None);
        input.password = "123".to_string();
        let err = svc.register(None, input).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn state_officer_scope() {
        let officer = Actor {
            user_id: 2,
            email: "officer@mh.gov.in".to_string(),
            role: UserRole::StateUser,
            state_id: Some(1),
        };
        assert!(officer.can_access_state(1));
        assert!(!officer.can_access_state(2));
        assert!(central().can_access_state(2));
    }
}
