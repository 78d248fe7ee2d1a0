//! The contracted response shape of the text collaborator.
//!
//! One sub-object per platform; any missing or misshapen field is a
//! contract violation and surfaces as a generation failure.

use serde::{Deserialize, Serialize};

/// The full seven-platform generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub instagram_feed: FeedContent,
    pub linkedin: LinkedinContent,
    pub facebook: FacebookContent,
    pub blog_post: BlogContent,
    pub instagram_story: StoryContent,
    pub reels_shorts: ReelsContent,
    pub youtube_video: YoutubeContent,
}

/// Instagram feed: caption, image idea, hashtag list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedContent {
    pub caption: String,
    pub visual_idea: String,
    pub hashtags: Vec<String>,
}

/// LinkedIn: post text plus the slide-carousel structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedinContent {
    pub text: String,
    pub slide_structure: Vec<String>,
}

/// Facebook: conversational text plus an image idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookContent {
    pub text: String,
    pub visual_idea: String,
}

/// Blog: title, meta description, HTML body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogContent {
    pub title: String,
    pub meta_description: String,
    pub body_html: String,
}

/// Story: ordered sequence scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContent {
    pub sequences: Vec<String>,
}

/// Reels/Shorts: visual/audio script rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelsContent {
    pub script_table: Vec<ScriptRow>,
}

/// One row of the short-video script: what is seen, what is heard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptRow {
    pub visual: String,
    pub audio: String,
}

/// YouTube: title ideas plus the video outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeContent {
    pub title_ideas: Vec<String>,
    pub outline: Vec<String>,
}
