//! The seven fixed publishing platforms.

use serde::{Deserialize, Serialize};

/// One of the seven channels a briefing is multiplied into.
///
/// The set is fixed: every generation batch contains exactly one content
/// item per platform, and the wire format (API paths, webhook payloads,
/// collaborator responses) uses the snake_case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    InstagramFeed,
    Linkedin,
    Facebook,
    BlogPost,
    InstagramStory,
    ReelsShorts,
    YoutubeVideo,
}

/// All platforms in batch order. Webhook dispatch follows this order.
pub const ALL_PLATFORMS: [Platform; 7] = [
    Platform::InstagramFeed,
    Platform::Linkedin,
    Platform::Facebook,
    Platform::BlogPost,
    Platform::InstagramStory,
    Platform::ReelsShorts,
    Platform::YoutubeVideo,
];

impl Platform {
    /// The snake_case wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::InstagramFeed => "instagram_feed",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::BlogPost => "blog_post",
            Platform::InstagramStory => "instagram_story",
            Platform::ReelsShorts => "reels_shorts",
            Platform::YoutubeVideo => "youtube_video",
        }
    }

    /// Parse a wire name back into a platform.
    pub fn parse(s: &str) -> Option<Platform> {
        ALL_PLATFORMS.iter().copied().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_distinct_platforms() {
        let mut names: Vec<&str> = ALL_PLATFORMS.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn parse_roundtrips_every_platform() {
        for p in ALL_PLATFORMS {
            assert_eq!(Platform::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Platform::parse("tiktok"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Platform::InstagramFeed).unwrap();
        assert_eq!(json, "\"instagram_feed\"");
        let back: Platform = serde_json::from_str("\"reels_shorts\"").unwrap();
        assert_eq!(back, Platform::ReelsShorts);
    }
}
