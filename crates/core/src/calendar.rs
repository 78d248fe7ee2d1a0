//! The 7-day calendar board.
//!
//! The board is a fixed window of seven consecutive days starting "today".
//! Approved items without a date collect in the unscheduled list; items
//! whose `scheduled_date` matches a day key land in that day's column,
//! ordered by time of day.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::content::{ContentItem, ContentStatus};

/// Number of days on the board.
pub const BOARD_DAYS: usize = 7;

/// Time of day assigned when an item is dropped onto a day without ever
/// having been given a time.
pub const DEFAULT_SCHEDULE_TIME: &str = "10:00";

/// One column of the board.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    /// Day key, `YYYY-MM-DD`. Items are bucketed against this.
    pub date: String,
    /// Short German weekday label (Mo, Di, ...).
    pub weekday: &'static str,
    /// Day of month, for the column header.
    pub day_number: u32,
    /// Items scheduled (or already published) on this day, ordered by
    /// `scheduled_time` ascending; items without a time sort first.
    pub items: Vec<ContentItem>,
}

/// The assembled board: seven day columns plus the unscheduled pool.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarBoard {
    pub days: Vec<CalendarDay>,
    /// Approved items with no `scheduled_date`.
    pub unscheduled: Vec<ContentItem>,
}

/// Render a date as a day key (`YYYY-MM-DD`).
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Mo",
        chrono::Weekday::Tue => "Di",
        chrono::Weekday::Wed => "Mi",
        chrono::Weekday::Thu => "Do",
        chrono::Weekday::Fri => "Fr",
        chrono::Weekday::Sat => "Sa",
        chrono::Weekday::Sun => "So",
    }
}

/// Build the board for the window starting at `today`.
///
/// Bucketing is exclusive: an item appears in at most one day column (its
/// `scheduled_date`), and in the unscheduled pool only when it is Approved
/// with no date. Drafts appear nowhere.
pub fn build_board(items: &[ContentItem], today: NaiveDate) -> CalendarBoard {
    let days = (0..BOARD_DAYS as i64)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let key = day_key(date);

            let mut bucket: Vec<ContentItem> = items
                .iter()
                .filter(|i| i.scheduled_date.as_deref() == Some(key.as_str()))
                .cloned()
                .collect();
            // Missing times sort first via the empty-string sentinel.
            bucket.sort_by(|a, b| {
                a.scheduled_time
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.scheduled_time.as_deref().unwrap_or(""))
            });

            CalendarDay {
                date: key,
                weekday: weekday_label(date),
                day_number: date.day(),
                items: bucket,
            }
        })
        .collect();

    let unscheduled = items
        .iter()
        .filter(|i| i.status == ContentStatus::Approved && i.scheduled_date.is_none())
        .cloned()
        .collect();

    CalendarBoard { days, unscheduled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle;
    use crate::platform::Platform;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn approved(platform: Platform) -> ContentItem {
        let mut item = ContentItem::draft(platform, "Launch", "Text");
        lifecycle::approve(&mut item).unwrap();
        item
    }

    fn scheduled(platform: Platform, date: &str, time: Option<&str>) -> ContentItem {
        let mut item = approved(platform);
        lifecycle::schedule(&mut item, date, time).unwrap();
        item
    }

    #[test]
    fn board_spans_seven_consecutive_days() {
        let board = build_board(&[], today());
        assert_eq!(board.days.len(), 7);
        assert_eq!(board.days[0].date, "2024-06-01");
        assert_eq!(board.days[6].date, "2024-06-07");
    }

    #[test]
    fn weekday_labels_are_german_short_names() {
        // 2024-06-01 is a Saturday.
        let board = build_board(&[], today());
        assert_eq!(board.days[0].weekday, "Sa");
        assert_eq!(board.days[1].weekday, "So");
        assert_eq!(board.days[2].weekday, "Mo");
    }

    #[test]
    fn scheduled_item_lands_only_in_its_day() {
        let items = vec![scheduled(Platform::Facebook, "2024-06-03", None)];
        let board = build_board(&items, today());

        for day in &board.days {
            let expected = if day.date == "2024-06-03" { 1 } else { 0 };
            assert_eq!(day.items.len(), expected, "day {}", day.date);
        }
        assert!(board.unscheduled.is_empty());
    }

    #[test]
    fn approved_without_date_is_unscheduled_only() {
        let items = vec![approved(Platform::Linkedin)];
        let board = build_board(&items, today());

        assert_eq!(board.unscheduled.len(), 1);
        assert!(board.days.iter().all(|d| d.items.is_empty()));
    }

    #[test]
    fn draft_appears_nowhere() {
        let items = vec![ContentItem::draft(Platform::BlogPost, "Launch", "Text")];
        let board = build_board(&items, today());

        assert!(board.unscheduled.is_empty());
        assert!(board.days.iter().all(|d| d.items.is_empty()));
    }

    #[test]
    fn day_bucket_sorts_by_time_with_missing_times_first() {
        let items = vec![
            scheduled(Platform::Facebook, "2024-06-02", Some("14:00")),
            scheduled(Platform::Linkedin, "2024-06-02", None),
            scheduled(Platform::BlogPost, "2024-06-02", Some("09:15")),
        ];
        let board = build_board(&items, today());
        let day = &board.days[1];

        let order: Vec<Platform> = day.items.iter().map(|i| i.platform).collect();
        assert_eq!(
            order,
            vec![Platform::Linkedin, Platform::BlogPost, Platform::Facebook]
        );
    }

    #[test]
    fn published_item_keeps_its_calendar_slot() {
        let mut item = scheduled(Platform::Facebook, "2024-06-02", Some("10:00"));
        lifecycle::mark_published(&mut item).unwrap();
        let board = build_board(&[item], today());

        assert_eq!(board.days[1].items.len(), 1);
        assert!(board.unscheduled.is_empty());
    }

    #[test]
    fn date_outside_window_is_not_bucketed() {
        let items = vec![scheduled(Platform::Facebook, "2024-07-15", None)];
        let board = build_board(&items, today());
        assert!(board.days.iter().all(|d| d.items.is_empty()));
    }
}
