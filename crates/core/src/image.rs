//! Image candidate handling, cross-item transfer, and the global clipboard.
//!
//! Visuals move between items as an explicit [`ImageTransfer`] payload
//! (the drag source produces one, the drop target consumes it) rather than
//! through any UI event system. The clipboard is a single process-wide
//! slot scoped to the session; it is never persisted.

use serde::{Deserialize, Serialize};

use crate::content::ContentItem;
use crate::error::CoreError;

/// Prefix an inline image reference must carry to be accepted from an
/// untrusted transfer payload.
const DATA_IMAGE_PREFIX: &str = "data:image";

/// Returns true when `reference` is an inline data-URI image.
pub fn is_data_uri(reference: &str) -> bool {
    reference.starts_with(DATA_IMAGE_PREFIX)
}

// ---------------------------------------------------------------------------
// Candidate operations
// ---------------------------------------------------------------------------

/// Make an existing candidate the active image without altering the list.
pub fn select_candidate(item: &mut ContentItem, reference: &str) -> Result<(), CoreError> {
    if !item.image_candidates.iter().any(|c| c == reference) {
        return Err(CoreError::Validation(format!(
            "Image is not a candidate of {}",
            item.platform
        )));
    }
    item.image_url = Some(reference.to_string());
    Ok(())
}

/// Store a freshly generated candidate set: the first candidate becomes
/// active, the full list replaces any previous candidates.
pub fn store_generated(item: &mut ContentItem, candidates: Vec<String>) -> Result<(), CoreError> {
    let first = candidates
        .first()
        .cloned()
        .ok_or_else(|| CoreError::Validation("Image generation returned no candidates".into()))?;
    item.image_url = Some(first);
    item.image_candidates = candidates;
    Ok(())
}

/// Replace the item's visuals with a manually uploaded image.
///
/// Uploads arrive encoded as a data URI; the upload becomes both the active
/// image and the only candidate.
pub fn replace_with_upload(item: &mut ContentItem, data_uri: &str) -> Result<(), CoreError> {
    if !is_data_uri(data_uri) {
        return Err(CoreError::Validation(
            "Uploaded image must be a data:image URI".to_string(),
        ));
    }
    item.image_url = Some(data_uri.to_string());
    item.image_candidates = vec![data_uri.to_string()];
    Ok(())
}

/// Remove the active image. The candidate list is cleared along with it;
/// there is no single-candidate removal.
pub fn clear_image(item: &mut ContentItem) {
    item.image_url = None;
    item.image_candidates.clear();
}

// ---------------------------------------------------------------------------
// Transfer payload (drag source -> drop target)
// ---------------------------------------------------------------------------

/// A value object carrying one image reference between items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTransfer {
    pub image_url: String,
}

impl ImageTransfer {
    /// Produce a transfer payload from an item's active image, if any.
    pub fn from_item(item: &ContentItem) -> Option<ImageTransfer> {
        item.image_url.as_ref().map(|url| ImageTransfer {
            image_url: url.clone(),
        })
    }
}

/// Consume a transfer payload: the reference is prepended to the target's
/// candidate list and made active. Only inline data-URI images are
/// accepted from a transfer.
pub fn accept_transfer(item: &mut ContentItem, transfer: &ImageTransfer) -> Result<(), CoreError> {
    if !is_data_uri(&transfer.image_url) {
        return Err(CoreError::Validation(
            "Transfer payload must carry a data:image URI".to_string(),
        ));
    }
    prepend_active(item, transfer.image_url.clone());
    Ok(())
}

// ---------------------------------------------------------------------------
// Global clipboard
// ---------------------------------------------------------------------------

/// The single shared image slot. Copying overwrites it; pasting reads it
/// without consuming, so one copy can seed several items.
#[derive(Debug, Default, Clone)]
pub struct ImageClipboard {
    slot: Option<String>,
}

impl ImageClipboard {
    /// Store a reference in the slot, replacing any previous one.
    pub fn copy(&mut self, reference: impl Into<String>) {
        self.slot = Some(reference.into());
    }

    /// The current slot content.
    pub fn current(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

/// Paste the clipboard into an item: prepend and activate, like a drop.
pub fn paste_from_clipboard(
    item: &mut ContentItem,
    clipboard: &ImageClipboard,
) -> Result<(), CoreError> {
    let reference = clipboard
        .current()
        .ok_or_else(|| CoreError::Validation("Image clipboard is empty".to_string()))?;
    prepend_active(item, reference.to_string());
    Ok(())
}

fn prepend_active(item: &mut ContentItem, reference: String) {
    item.image_candidates.insert(0, reference.clone());
    item.image_url = Some(reference);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    const PNG: &str = "data:image/png;base64,AAAA";
    const PNG_B: &str = "data:image/png;base64,BBBB";

    fn item() -> ContentItem {
        ContentItem::draft(Platform::InstagramFeed, "Launch", "Caption")
    }

    // -- generated candidates --

    #[test]
    fn store_generated_activates_first_candidate() {
        let mut it = item();
        store_generated(&mut it, vec![PNG.into(), PNG_B.into()]).unwrap();
        assert_eq!(it.image_url.as_deref(), Some(PNG));
        assert_eq!(it.image_candidates.len(), 2);
    }

    #[test]
    fn store_generated_rejects_empty_result() {
        let mut it = item();
        assert!(store_generated(&mut it, Vec::new()).is_err());
        assert!(it.image_url.is_none());
    }

    #[test]
    fn select_candidate_keeps_list_intact() {
        let mut it = item();
        store_generated(&mut it, vec![PNG.into(), PNG_B.into()]).unwrap();
        select_candidate(&mut it, PNG_B).unwrap();
        assert_eq!(it.image_url.as_deref(), Some(PNG_B));
        assert_eq!(it.image_candidates.len(), 2);
    }

    #[test]
    fn select_candidate_rejects_unknown_reference() {
        let mut it = item();
        store_generated(&mut it, vec![PNG.into()]).unwrap();
        assert!(select_candidate(&mut it, "data:image/png;base64,ZZZZ").is_err());
    }

    // -- upload --

    #[test]
    fn upload_replaces_all_candidates() {
        let mut it = item();
        store_generated(&mut it, vec![PNG.into(), PNG_B.into()]).unwrap();
        replace_with_upload(&mut it, "data:image/jpeg;base64,CCCC").unwrap();
        assert_eq!(it.image_candidates, vec!["data:image/jpeg;base64,CCCC"]);
        assert_eq!(it.image_url.as_deref(), Some("data:image/jpeg;base64,CCCC"));
    }

    #[test]
    fn upload_rejects_non_data_uri() {
        let mut it = item();
        assert!(replace_with_upload(&mut it, "https://example.com/a.png").is_err());
    }

    // -- clear --

    #[test]
    fn clear_image_drops_url_and_candidates() {
        let mut it = item();
        store_generated(&mut it, vec![PNG.into(), PNG_B.into()]).unwrap();
        clear_image(&mut it);
        assert!(it.image_url.is_none());
        assert!(it.image_candidates.is_empty());
    }

    // -- transfer --

    #[test]
    fn transfer_moves_image_between_items() {
        let mut source = item();
        store_generated(&mut source, vec![PNG.into()]).unwrap();

        let mut target = ContentItem::draft(Platform::Facebook, "Launch", "Text");
        store_generated(&mut target, vec![PNG_B.into()]).unwrap();

        let payload = ImageTransfer::from_item(&source).unwrap();
        accept_transfer(&mut target, &payload).unwrap();

        assert_eq!(target.image_url.as_deref(), Some(PNG));
        assert_eq!(target.image_candidates, vec![PNG, PNG_B]);
        // Source keeps its image; a transfer copies, it does not move.
        assert_eq!(source.image_url.as_deref(), Some(PNG));
    }

    #[test]
    fn transfer_from_item_without_image_is_none() {
        assert!(ImageTransfer::from_item(&item()).is_none());
    }

    #[test]
    fn transfer_rejects_plain_urls() {
        let mut target = item();
        let payload = ImageTransfer {
            image_url: "https://example.com/a.png".to_string(),
        };
        assert!(accept_transfer(&mut target, &payload).is_err());
    }

    // -- clipboard --

    #[test]
    fn paste_prepends_and_activates() {
        let mut clipboard = ImageClipboard::default();
        clipboard.copy(PNG);

        let mut it = item();
        store_generated(&mut it, vec![PNG_B.into()]).unwrap();
        paste_from_clipboard(&mut it, &clipboard).unwrap();

        assert_eq!(it.image_url.as_deref(), Some(PNG));
        assert_eq!(it.image_candidates, vec![PNG, PNG_B]);
    }

    #[test]
    fn paste_does_not_consume_the_slot() {
        let mut clipboard = ImageClipboard::default();
        clipboard.copy(PNG);

        let mut first = item();
        let mut second = ContentItem::draft(Platform::Linkedin, "Launch", "Text");
        paste_from_clipboard(&mut first, &clipboard).unwrap();
        paste_from_clipboard(&mut second, &clipboard).unwrap();

        assert_eq!(second.image_url.as_deref(), Some(PNG));
    }

    #[test]
    fn paste_with_empty_clipboard_is_an_error() {
        let mut it = item();
        assert!(paste_from_clipboard(&mut it, &ImageClipboard::default()).is_err());
    }
}
