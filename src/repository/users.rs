//! Users repository

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Role, User},
};

#[derive(Clone, Default)]
pub struct UsersRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user. The email check and id assignment happen under one
    /// write lock, so concurrent registrations cannot collide.
    pub async fn create(&self, username: &str, email: &str, password_hash: String) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let user = User {
            id: users.len() as i32 + 1,
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::User,
        };
        users.push(user.clone());

        Ok(user)
    }

    /// Get user by exact email
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.email == email).cloned()
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
