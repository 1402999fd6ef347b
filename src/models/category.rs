use serde::{Deserialize, Serialize};
use sqlx::types::chrono::NaiveDateTime;

/// Categories carry no numeric fields, so the row serializes as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryCreated {
    pub message: String,
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    #[test]
    fn category_serializes_with_iso_timestamps() {
        let category = Category {
            id: 1,
            name: "Dairy".into(),
            description: "Milk products".into(),
            image_url: "x".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
            updated_at: None,
        };

        assert_eq!(
            serde_json::to_value(category).unwrap(),
            json!({
                "id": 1,
                "name": "Dairy",
                "description": "Milk products",
                "image_url": "x",
                "created_at": "2024-01-15T09:05:00",
                "updated_at": null,
            })
        );
    }

    #[test]
    fn request_requires_image_url() {
        let err = serde_json::from_value::<CategoryRequest>(json!({
            "name": "Dairy",
            "description": "Milk products",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("image_url"));
    }
}
