use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Calendar date at the given offset from UTC.
///
/// Offsets outside a single day are clamped; `Config` already rejects them.
pub fn today_at_offset(utc_offset_hours: i32) -> NaiveDate {
    let seconds = utc_offset_hours.clamp(-23, 23) * 3600;
    let offset = FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix());

    Utc::now().with_timezone(&offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differs_from_utc_by_at_most_one_day() {
        let utc = Utc::now().date_naive();

        for offset in [-23, -9, 0, 9, 23] {
            let today = today_at_offset(offset);
            assert!((today - utc).num_days().abs() <= 1);
        }
    }
}
