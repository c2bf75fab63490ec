use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum HabitError {
    /// Habit does not exist or belongs to another member.
    #[error("Habit {0} not found")]
    NotFound(i32),

    #[error("Habit {habit_id} is already checked on {date}")]
    AlreadyChecked { habit_id: i32, date: NaiveDate },

    #[error("Habit {habit_id} is not checked on {date}")]
    NotChecked { habit_id: i32, date: NaiveDate },
}

impl IntoResponse for HabitError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::NotChecked { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyChecked { .. } => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}
