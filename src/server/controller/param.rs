use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::post::{Category, SearchType},
    server::util::date::today_at_offset,
};

fn default_entries() -> u64 {
    crate::server::model::post::DEFAULT_PAGE_SIZE
}

/// `?date=YYYY-MM-DD`; absent means today in the configured offset.
#[derive(Deserialize)]
pub struct DateParam {
    pub date: Option<NaiveDate>,
}

impl DateParam {
    /// Requested date, or today at `utc_offset_hours` when absent.
    pub fn or_today(&self, utc_offset_hours: i32) -> NaiveDate {
        self.date
            .unwrap_or_else(|| today_at_offset(utc_offset_hours))
    }
}

#[derive(Deserialize)]
pub struct PostListParam {
    pub category: Option<Category>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

#[derive(Deserialize)]
pub struct PostSearchParam {
    pub category: Option<Category>,
    pub search_type: Option<SearchType>,
    pub keyword: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}
