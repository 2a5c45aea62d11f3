use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::models::{NewUser, User};

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no user with id {0}")]
    NotFound(u64),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn get(&self, id: u64) -> Result<User, StoreError>;
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;
    async fn update(&self, id: u64, new: NewUser) -> Result<User, StoreError>;
    async fn delete(&self, id: u64) -> Result<(), StoreError>;
}

pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Builds the pool handle without touching the network; `ping` is what
    /// first establishes a connection.
    pub fn connect_lazy(url: &str) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy(url)?;
        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for MySqlStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email FROM users ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn get(&self, id: u64) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("SELECT id, first_name, last_name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let result = sqlx::query("INSERT INTO users (first_name, last_name, email) VALUES (?, ?, ?)")
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_id(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        })
    }

    async fn update(&self, id: u64, new: NewUser) -> Result<User, StoreError> {
        // No existence check: an absent id updates zero rows and still
        // echoes the payload under the path id.
        sqlx::query("UPDATE users SET first_name = ?, last_name = ?, email = ? WHERE id = ?")
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        })
    }

    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
