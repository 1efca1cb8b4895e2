use std::sync::Arc;

use auth::PasswordHasher;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Domain service for user registration and lookup.
///
/// Orchestrates the registration flow: the command arrives with validated
/// credentials, the password is hashed here, the store assigns id and
/// defaults, and the freshly created record is read back so callers see the
/// server-assigned fields.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    password_hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Register a new user.
    ///
    /// The plaintext password never leaves this function: it is hashed
    /// before the record is handed to the store.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHash` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    pub async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let new_user = NewUser {
            email: command.email,
            password_hash,
            full_name: command.full_name,
            phone: command.phone,
        };

        let id = self.repository.create(new_user).await?;

        // Round-trip confirms the store-assigned id, role and timestamps
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::DatabaseError(format!("user {} missing after insert", id)))
    }

    /// Retrieve a user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.0))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::FullName;
    use crate::domain::user::models::Role;

    mock! {
        pub TestUserRepository {}

        #[async_trait::async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<UserId, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
        }
    }

    fn stored_user(id: UserId, new_user: &NewUser) -> User {
        User {
            id,
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            full_name: new_user.full_name.clone(),
            phone: new_user.phone.clone(),
            role: Role::User,
            created_at: Utc::now(),
            last_modified_at: Utc::now(),
        }
    }

    fn register_command() -> RegisterUserCommand {
        RegisterUserCommand::new(
            EmailAddress::new("jane@example.com".to_string()).unwrap(),
            FullName::new("Jane Doe").unwrap(),
            "secret123".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "jane@example.com"
                    && user.full_name.first() == "Jane"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|_| Ok(UserId(1)));

        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(1))
            .times(1)
            .returning(|id| {
                let new_user = NewUser {
                    email: EmailAddress::new("jane@example.com".to_string()).unwrap(),
                    password_hash: "$argon2id$stored".to_string(),
                    full_name: FullName::new("Jane Doe").unwrap(),
                    phone: None,
                };
                Ok(Some(stored_user(id, &new_user)))
            });

        let service = UserService::new(Arc::new(repository));

        let user = service.register(register_command()).await.unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email.as_str(), "jane@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });
        repository.expect_find_by_id().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service.register(register_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_round_trip_missing() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Ok(UserId(1)));
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.register(register_command()).await;
        assert!(matches!(result.unwrap_err(), UserError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(42))
            .times(1)
            .returning(|id| {
                let new_user = NewUser {
                    email: EmailAddress::new("jane@example.com".to_string()).unwrap(),
                    password_hash: "$argon2id$stored".to_string(),
                    full_name: FullName::new("Jane Doe").unwrap(),
                    phone: Some("+359876543".to_string()),
                };
                Ok(Some(stored_user(id, &new_user)))
            });

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user(UserId(42)).await.unwrap();
        assert_eq!(user.id, UserId(42));
        assert_eq!(user.phone.as_deref(), Some("+359876543"));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(UserId(7)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(7)));
    }
}
