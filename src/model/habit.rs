use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateHabitDto {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateHabitDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HabitDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Whether the habit is checked on the requested date.
    pub checked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HabitListDto {
    pub date: NaiveDate,
    pub habits: Vec<HabitDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HabitCheckDto {
    pub id: i32,
    pub habit_id: i32,
    pub check_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
