use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::api_key::ApiKey;

/// Repository for issued API keys.
pub struct ApiKeyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores `key` for `user_id`.
    ///
    /// # Returns
    /// - `Ok(ApiKey)` - The stored key
    /// - `Err(DbErr)` - Database error, including a unique violation on `key`
    pub async fn create(&self, user_id: i32, key: String) -> Result<ApiKey, DbErr> {
        let entity = entity::api_key::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ApiKey::from_entity(entity))
    }
}
