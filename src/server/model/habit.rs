//! Habit and habit check domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::habit::{CreateHabitDto, HabitCheckDto, HabitDto, UpdateHabitDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: i32,
    pub member_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn from_entity(entity: entity::habit::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self, checked: bool) -> HabitDto {
        HabitDto {
            id: self.id,
            title: self.title,
            description: self.description,
            checked,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A habit together with whether it is checked on a particular date.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitStatus {
    pub habit: Habit,
    pub checked: bool,
}

impl HabitStatus {
    pub fn into_dto(self) -> HabitDto {
        self.habit.into_dto(self.checked)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HabitCheck {
    pub id: i32,
    pub habit_id: i32,
    pub check_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl HabitCheck {
    pub fn from_entity(entity: entity::habit_check::Model) -> Self {
        Self {
            id: entity.id,
            habit_id: entity.habit_id,
            check_date: entity.check_date,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> HabitCheckDto {
        HabitCheckDto {
            id: self.id,
            habit_id: self.habit_id,
            check_date: self.check_date,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHabitParams {
    pub member_id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl CreateHabitParams {
    pub fn from_dto(member_id: i32, dto: CreateHabitDto) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            title: validate_title(&dto.title)?,
            description: dto.description,
        })
    }
}

/// Partial habit update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateHabitParams {
    pub member_id: i32,
    pub habit_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateHabitParams {
    pub fn from_dto(member_id: i32, habit_id: i32, dto: UpdateHabitDto) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            habit_id,
            title: dto.title.as_deref().map(validate_title).transpose()?,
            description: dto.description,
        })
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("Habit title must not be blank".to_string()));
    }

    Ok(title.to_string())
}
