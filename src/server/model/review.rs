use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{error::AppError, util::validation::Validator},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            book_id: entity.book_id,
            user_id: entity.user_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            book_id: self.book_id,
            user_id: self.user_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Validated review. The book comes from the path and the author from the session.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    /// 1 to 5.
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    pub fn try_from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let rating = v.required("rating", dto.rating);
        if let Some(rating) = rating {
            v.check((1..=5).contains(&rating), "rating must be between 1 and 5");
        }
        let comment = v.required_text("comment", dto.comment);

        v.finish()?;

        match (rating, comment) {
            (Some(rating), Some(comment)) => Ok(Self { rating, comment }),
            _ => Err(AppError::InternalError(
                "Review validation passed with missing fields".to_string(),
            )),
        }
    }
}
