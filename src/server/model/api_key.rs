use chrono::{DateTime, Utc};

use crate::model::user::ApiKeyDto;

/// API key issued to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiKey {
    pub id: i32,
    pub key: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn from_entity(entity: entity::api_key::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ApiKeyDto {
        ApiKeyDto {
            id: self.id,
            key: self.key,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}
