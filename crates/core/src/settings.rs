//! The four user-editable settings documents and their defaults.
//!
//! Personas, prompt instructions, the author profile, and the automation
//! target are all owned by top-level application state and mirrored to
//! persistent storage on every mutation (see the store crate).

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

// ---------------------------------------------------------------------------
// Persona
// ---------------------------------------------------------------------------

/// A named, reusable description of a target audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique id, minted from the creation timestamp.
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Mint a persona id from a millisecond unix timestamp.
pub fn mint_persona_id(unix_millis: i64) -> String {
    unix_millis.to_string()
}

/// The personas shipped before the user creates any.
pub fn default_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "1".to_string(),
            name: "Unternehmer & CEOs".to_string(),
            description: "Inhaber von KMUs und Startups, 30-50 Jahre alt, fokusiert auf \
                          Wachstum, Effizienz und Skalierung. Wenig Zeit, schätzen direkte \
                          Ansprache."
                .to_string(),
        },
        Persona {
            id: "2".to_string(),
            name: "Marketing Manager".to_string(),
            description: "Marketing-Profis in Agenturen oder Unternehmen. Kennen \
                          Fachbegriffe, suchen nach konkreten Hacks und Trends. 25-40 Jahre."
                .to_string(),
        },
        Persona {
            id: "3".to_string(),
            name: "Gen Z Konsumenten".to_string(),
            description: "Digital Natives, 18-25 Jahre. Schätzen Authentizität, Humor und \
                          schnelle Schnitte. Allergisch gegen \"Corporate Speak\"."
                .to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// PromptConfig
// ---------------------------------------------------------------------------

/// The global generation instruction plus one instruction per platform.
///
/// Flat by design: the store merges loaded documents over
/// [`PromptConfig::default`] so newly introduced fields pick up their
/// default text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub global: String,
    pub instagram_feed: String,
    pub linkedin: String,
    pub facebook: String,
    pub blog_post: String,
    pub instagram_story: String,
    pub reels_shorts: String,
    pub youtube_video: String,
}

impl PromptConfig {
    /// The instruction string for one platform.
    pub fn instruction_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::InstagramFeed => &self.instagram_feed,
            Platform::Linkedin => &self.linkedin,
            Platform::Facebook => &self.facebook,
            Platform::BlogPost => &self.blog_post,
            Platform::InstagramStory => &self.instagram_story,
            Platform::ReelsShorts => &self.reels_shorts,
            Platform::YoutubeVideo => &self.youtube_video,
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            global: "Du bist ein Weltklasse Social Media Stratege. Erstelle Inhalte, die \
                     hohe Interaktionsraten erzielen."
                .to_string(),
            instagram_feed: "Erstelle eine fesselnde Caption mit Emojis. Die Bild-Idee soll \
                             ästhetisch und 'instagrammable' sein."
                .to_string(),
            linkedin: "Schreibe einen seriösen, aber nahbaren Business-Text. Nutze \
                       Storytelling-Elemente. Strukturiere den Slide-Carousel-Inhalt logisch."
                .to_string(),
            facebook: "Der Text soll Konversationen anregen (Fragen stellen). Die Tonalität \
                       ist locker und gemeinschaftsorientiert."
                .to_string(),
            blog_post: "Schreibe SEO-optimiert. Nutze H1, H2, H3 Tags im HTML. Der Inhalt \
                        soll Mehrwert bieten und gut strukturiert sein."
                .to_string(),
            instagram_story: "Erstelle ein Skript für 3-5 Story-Sequenzen. Fokus auf \
                              Engagement (Umfragen, Sticker)."
                .to_string(),
            reels_shorts: "Erstelle ein visuelles Skript (Tabelle). Spalte 1: Was man sieht \
                           (schnelle Schnitte). Spalte 2: Audio/Voiceover."
                .to_string(),
            youtube_video: "Erstelle 5 klickstarke Titel-Ideen und eine detaillierte \
                            Gliederung des Videos mit Zeitstempeln."
                .to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

/// Free-text fields describing the content author; woven into the
/// generation prompt as context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub offer: String,
    #[serde(default)]
    pub usp: String,
    #[serde(default)]
    pub writing_style: String,
}

// ---------------------------------------------------------------------------
// AutomationConfig
// ---------------------------------------------------------------------------

/// The external automation target that receives publish requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationConfig {
    /// Webhook endpoint URL. Publishing is blocked while this is empty.
    #[serde(default)]
    pub webhook_url: String,
    /// Optional shared secret, sent as the `x-auth-token` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}
