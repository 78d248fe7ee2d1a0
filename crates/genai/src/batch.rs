//! Deterministic mapping of a generation response into a content batch.

use multiplier_core::briefing::BriefingData;
use multiplier_core::content::ContentItem;
use multiplier_core::platform::Platform;

use crate::schema::GenerationResponse;

/// Build the seven Draft content items for one briefing.
///
/// The mapping is fixed: exactly one item per platform, in batch order,
/// all starting as Draft. The caller replaces any previous batch with the
/// result (all-or-nothing: a failed generation never commits a partial
/// batch).
pub fn build_content_batch(
    briefing: &BriefingData,
    response: GenerationResponse,
) -> Vec<ContentItem> {
    let topic = briefing.topic.as_str();

    let blog_title = if response.blog_post.title.is_empty() {
        topic.to_string()
    } else {
        response.blog_post.title
    };

    vec![
        ContentItem::draft(Platform::InstagramFeed, topic, response.instagram_feed.caption)
            .with_visual_prompt(response.instagram_feed.visual_idea)
            .with_hashtags(response.instagram_feed.hashtags),
        ContentItem::draft(Platform::Linkedin, topic, response.linkedin.text)
            .with_visual_prompt(format!(
                "Folien-Struktur: {}",
                response.linkedin.slide_structure.join(" | ")
            )),
        ContentItem::draft(Platform::Facebook, topic, response.facebook.text)
            .with_visual_prompt(response.facebook.visual_idea),
        ContentItem::draft(Platform::BlogPost, blog_title, response.blog_post.body_html)
            .with_visual_prompt(response.blog_post.meta_description),
        ContentItem::draft(
            Platform::InstagramStory,
            topic,
            response.instagram_story.sequences.join("\n\n---\n\n"),
        ),
        ContentItem::draft(
            Platform::ReelsShorts,
            topic,
            response
                .reels_shorts
                .script_table
                .iter()
                .map(|row| format!("[BILD]: {}\n[TON]: {}", row.visual, row.audio))
                .collect::<Vec<_>>()
                .join("\n\n"),
        ),
        ContentItem::draft(
            Platform::YoutubeVideo,
            topic,
            format!(
                "TITEL:\n{}\n\nGLIEDERUNG:\n{}",
                response.youtube_video.title_ideas.join("\n"),
                response.youtube_video.outline.join("\n")
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::fixtures::sample_response;
    use multiplier_core::content::ContentStatus;
    use multiplier_core::platform::ALL_PLATFORMS;

    fn briefing() -> BriefingData {
        BriefingData {
            topic: "Launch".to_string(),
            url: None,
            tone: vec!["Witzig".to_string()],
            target_audience: "Gen Z".to_string(),
        }
    }

    #[test]
    fn batch_covers_all_seven_platforms_once() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert_eq!(batch.len(), 7);
        for (item, expected) in batch.iter().zip(ALL_PLATFORMS) {
            assert_eq!(item.platform, expected);
        }
    }

    #[test]
    fn every_item_starts_as_draft() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert!(batch.iter().all(|i| i.status == ContentStatus::Draft));
        assert!(batch.iter().all(|i| i.scheduled_date.is_none()));
    }

    #[test]
    fn feed_item_carries_hashtags_others_do_not() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert!(batch[0].hashtags.is_some());
        assert!(batch[1..].iter().all(|i| i.hashtags.is_none()));
    }

    #[test]
    fn linkedin_visual_prompt_renders_slide_structure() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert_eq!(
            batch[1].visual_prompt.as_deref(),
            Some("Folien-Struktur: Hook | Story | CTA")
        );
    }

    #[test]
    fn blog_uses_generated_title_with_topic_fallback() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert_eq!(batch[3].title, "Der Launch");

        let mut response = sample_response();
        response.blog_post.title.clear();
        let batch = build_content_batch(&briefing(), response);
        assert_eq!(batch[3].title, "Launch");
    }

    #[test]
    fn story_sequences_join_with_separator() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert_eq!(batch[4].content, "Teaser\n\n---\n\nUmfrage");
    }

    #[test]
    fn reels_rows_render_visual_and_audio_lines() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert_eq!(batch[5].content, "[BILD]: Schneller Schnitt\n[TON]: Voiceover");
    }

    #[test]
    fn youtube_content_lists_titles_then_outline() {
        let batch = build_content_batch(&briefing(), sample_response());
        assert_eq!(
            batch[6].content,
            "TITEL:\nTitel 1\nTitel 2\n\nGLIEDERUNG:\nIntro 00:00\nHauptteil 01:30"
        );
    }
}
