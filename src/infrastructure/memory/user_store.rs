//! In-process user store.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug)]
struct UserTable {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// User store held in process memory.
///
/// Uniqueness of username and email is checked under the write lock.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut table = self.table.write().await;

        if let Some(taken) = table
            .users
            .values()
            .find(|u| u.username == new_user.username || u.email == new_user.email)
        {
            let field = if taken.username == new_user.username {
                "username"
            } else {
                "email"
            };
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "field": field }),
            ));
        }

        let id = table.next_id;
        table.next_id += 1;

        let user = User {
            id,
            username: new_user.username,
            email: new_user.email,
            hashed_password: new_user.hashed_password,
            created_at: Utc::now(),
        };
        table.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.table.read().await.users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            hashed_password: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("carlos", "carlos@kaivora.org")).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(
            repo.find_by_username("carlos").await.unwrap().unwrap().id,
            user.id
        );
        assert_eq!(
            repo.find_by_email("carlos@kaivora.org").await.unwrap().unwrap().id,
            user.id
        );
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("carlos", "a@kaivora.org")).await.unwrap();

        let err = repo.create(new_user("carlos", "b@kaivora.org")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a", "same@kaivora.org")).await.unwrap();

        let err = repo.create(new_user("b", "same@kaivora.org")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
