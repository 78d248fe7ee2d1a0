//! Content lifecycle state machine.
//!
//! Draft -> Approved -> Scheduled -> Published, with unscheduling as the
//! only backward move (Scheduled -> Approved). The original flow encoded
//! these rules as ad hoc field checks; here they are a single validated
//! transition table plus one function per operation.

use crate::content::{ContentItem, ContentStatus};
use crate::error::CoreError;

/// Returns the distinct target states reachable from `from`.
///
/// Published is terminal. Self-transitions (re-scheduling an already
/// scheduled item, unscheduling an item that is already Approved) are
/// always allowed by the operation functions and are not listed here.
pub fn valid_transitions(from: ContentStatus) -> &'static [ContentStatus] {
    match from {
        ContentStatus::Draft => &[ContentStatus::Approved],
        ContentStatus::Approved => &[ContentStatus::Scheduled],
        ContentStatus::Scheduled => &[ContentStatus::Approved, ContentStatus::Published],
        ContentStatus::Published => &[],
    }
}

/// Check whether a strict (state-changing) transition is valid.
pub fn can_transition(from: ContentStatus, to: ContentStatus) -> bool {
    valid_transitions(from).contains(&to)
}

/// Approve a draft. Only valid from `Draft`.
pub fn approve(item: &mut ContentItem) -> Result<(), CoreError> {
    if item.status != ContentStatus::Draft {
        return Err(CoreError::InvalidTransition {
            from: item.status,
            to: ContentStatus::Approved,
        });
    }
    item.status = ContentStatus::Approved;
    Ok(())
}

/// Schedule or unschedule an item.
///
/// A non-empty `date` moves the item to `Scheduled` with that calendar day;
/// the time is updated only when `time` is passed. An empty `date`
/// unschedules: the item reverts to `Approved` (never `Draft`), the date is
/// cleared and the time is left untouched unless explicitly passed.
///
/// Scheduling a `Draft` directly is rejected; `Published` items cannot be
/// rescheduled or unscheduled at all.
pub fn schedule(
    item: &mut ContentItem,
    date: &str,
    time: Option<&str>,
) -> Result<(), CoreError> {
    if item.status == ContentStatus::Published {
        return Err(CoreError::InvalidTransition {
            from: item.status,
            to: if date.is_empty() {
                ContentStatus::Approved
            } else {
                ContentStatus::Scheduled
            },
        });
    }

    if date.is_empty() {
        item.status = ContentStatus::Approved;
        item.scheduled_date = None;
    } else {
        if item.status == ContentStatus::Draft {
            return Err(CoreError::InvalidTransition {
                from: item.status,
                to: ContentStatus::Scheduled,
            });
        }
        item.status = ContentStatus::Scheduled;
        item.scheduled_date = Some(date.to_string());
    }

    if let Some(t) = time {
        item.scheduled_time = Some(t.to_string());
    }

    Ok(())
}

/// Mark a scheduled item as published. Only valid from `Scheduled`.
///
/// The scheduled date and time stay in place so the item keeps its spot on
/// the calendar after publishing.
pub fn mark_published(item: &mut ContentItem) -> Result<(), CoreError> {
    if item.status != ContentStatus::Scheduled {
        return Err(CoreError::InvalidTransition {
            from: item.status,
            to: ContentStatus::Published,
        });
    }
    item.status = ContentStatus::Published;
    Ok(())
}

/// The local bulk publish variant: flip every `Scheduled` item in the batch
/// to `Published` without any I/O. Returns the number of items flipped.
pub fn publish_all_local(items: &mut [ContentItem]) -> usize {
    let mut count = 0;
    for item in items.iter_mut() {
        if item.status == ContentStatus::Scheduled {
            item.status = ContentStatus::Published;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    fn draft() -> ContentItem {
        ContentItem::draft(Platform::Facebook, "Launch", "Text")
    }

    fn approved() -> ContentItem {
        let mut item = draft();
        approve(&mut item).unwrap();
        item
    }

    fn scheduled(date: &str, time: Option<&str>) -> ContentItem {
        let mut item = approved();
        schedule(&mut item, date, time).unwrap();
        item
    }

    // -----------------------------------------------------------------------
    // Transition table
    // -----------------------------------------------------------------------

    #[test]
    fn draft_reaches_only_approved() {
        assert_eq!(
            valid_transitions(ContentStatus::Draft),
            &[ContentStatus::Approved]
        );
    }

    #[test]
    fn approved_reaches_only_scheduled() {
        assert_eq!(
            valid_transitions(ContentStatus::Approved),
            &[ContentStatus::Scheduled]
        );
    }

    #[test]
    fn scheduled_reaches_approved_and_published() {
        assert!(can_transition(ContentStatus::Scheduled, ContentStatus::Approved));
        assert!(can_transition(ContentStatus::Scheduled, ContentStatus::Published));
    }

    #[test]
    fn published_is_terminal() {
        assert!(valid_transitions(ContentStatus::Published).is_empty());
    }

    #[test]
    fn draft_cannot_jump_to_scheduled() {
        assert!(!can_transition(ContentStatus::Draft, ContentStatus::Scheduled));
    }

    // -----------------------------------------------------------------------
    // approve
    // -----------------------------------------------------------------------

    #[test]
    fn approve_moves_draft_to_approved() {
        let mut item = draft();
        approve(&mut item).unwrap();
        assert_eq!(item.status, ContentStatus::Approved);
    }

    #[test]
    fn approve_rejects_non_draft() {
        let mut item = approved();
        let err = approve(&mut item).unwrap_err();
        assert!(err.to_string().contains("Invalid transition"));
    }

    // -----------------------------------------------------------------------
    // schedule
    // -----------------------------------------------------------------------

    #[test]
    fn schedule_sets_date_and_time() {
        let item = scheduled("2024-06-01", Some("14:00"));
        assert_eq!(item.status, ContentStatus::Scheduled);
        assert_eq!(item.scheduled_date.as_deref(), Some("2024-06-01"));
        assert_eq!(item.scheduled_time.as_deref(), Some("14:00"));
    }

    #[test]
    fn schedule_without_time_keeps_existing_time() {
        let mut item = scheduled("2024-06-01", Some("14:00"));
        schedule(&mut item, "2024-06-02", None).unwrap();
        assert_eq!(item.scheduled_date.as_deref(), Some("2024-06-02"));
        assert_eq!(item.scheduled_time.as_deref(), Some("14:00"));
    }

    #[test]
    fn schedule_rejects_draft() {
        let mut item = draft();
        let err = schedule(&mut item, "2024-06-01", None).unwrap_err();
        assert!(err.to_string().contains("Draft"));
        assert_eq!(item.status, ContentStatus::Draft);
        assert!(item.scheduled_date.is_none());
    }

    #[test]
    fn schedule_rejects_published() {
        let mut item = scheduled("2024-06-01", None);
        mark_published(&mut item).unwrap();
        assert!(schedule(&mut item, "2024-06-02", None).is_err());
        assert!(schedule(&mut item, "", None).is_err());
    }

    #[test]
    fn reschedule_moves_to_new_day() {
        let mut item = scheduled("2024-06-01", None);
        schedule(&mut item, "2024-06-03", None).unwrap();
        assert_eq!(item.status, ContentStatus::Scheduled);
        assert_eq!(item.scheduled_date.as_deref(), Some("2024-06-03"));
    }

    // -----------------------------------------------------------------------
    // unschedule (empty date)
    // -----------------------------------------------------------------------

    #[test]
    fn unschedule_reverts_to_approved_and_clears_date() {
        let mut item = scheduled("2024-06-01", Some("14:00"));
        schedule(&mut item, "", None).unwrap();
        assert_eq!(item.status, ContentStatus::Approved);
        assert!(item.scheduled_date.is_none());
        // Time survives so rescheduling keeps the chosen slot.
        assert_eq!(item.scheduled_time.as_deref(), Some("14:00"));
    }

    #[test]
    fn unschedule_never_reverts_to_draft() {
        let mut item = draft();
        schedule(&mut item, "", None).unwrap();
        assert_eq!(item.status, ContentStatus::Approved);
        assert!(item.scheduled_date.is_none());
    }

    #[test]
    fn unschedule_is_idempotent_on_approved() {
        let mut item = approved();
        schedule(&mut item, "", None).unwrap();
        assert_eq!(item.status, ContentStatus::Approved);
    }

    #[test]
    fn unschedule_with_explicit_time_overwrites_it() {
        let mut item = scheduled("2024-06-01", Some("14:00"));
        schedule(&mut item, "", Some("09:30")).unwrap();
        assert_eq!(item.scheduled_time.as_deref(), Some("09:30"));
    }

    // -----------------------------------------------------------------------
    // publish
    // -----------------------------------------------------------------------

    #[test]
    fn mark_published_requires_scheduled() {
        let mut item = approved();
        assert!(mark_published(&mut item).is_err());
        schedule(&mut item, "2024-06-01", None).unwrap();
        mark_published(&mut item).unwrap();
        assert_eq!(item.status, ContentStatus::Published);
    }

    #[test]
    fn mark_published_keeps_calendar_slot() {
        let mut item = scheduled("2024-06-01", Some("14:00"));
        mark_published(&mut item).unwrap();
        assert_eq!(item.scheduled_date.as_deref(), Some("2024-06-01"));
        assert_eq!(item.scheduled_time.as_deref(), Some("14:00"));
    }

    #[test]
    fn publish_all_local_flips_only_scheduled() {
        let mut batch = vec![
            draft(),
            approved(),
            scheduled("2024-06-01", None),
            scheduled("2024-06-02", None),
        ];
        let flipped = publish_all_local(&mut batch);
        assert_eq!(flipped, 2);
        assert_eq!(batch[0].status, ContentStatus::Draft);
        assert_eq!(batch[1].status, ContentStatus::Approved);
        assert_eq!(batch[2].status, ContentStatus::Published);
        assert_eq!(batch[3].status, ContentStatus::Published);
    }

    #[test]
    fn failed_publish_leaves_item_retryable() {
        // The dispatcher only calls mark_published after a confirmed
        // delivery; an item that never gets the call stays Scheduled.
        let item = scheduled("2024-06-01", None);
        assert_eq!(item.status, ContentStatus::Scheduled);
        assert!(can_transition(item.status, ContentStatus::Published));
    }
}
