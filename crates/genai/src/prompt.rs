//! Assembly of the modular generation prompt.

use multiplier_core::briefing::BriefingData;
use multiplier_core::platform::ALL_PLATFORMS;
use multiplier_core::settings::{PromptConfig, UserProfile};

/// System instruction sent with every text-generation request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a world-class social media manager engine. Always return valid JSON matching the schema.";

/// Build the modular prompt: global instruction, briefing fields, author
/// profile context, and the numbered per-platform instructions.
pub fn build_generation_prompt(
    briefing: &BriefingData,
    prompts: &PromptConfig,
    profile: &UserProfile,
) -> String {
    let mut out = String::new();

    out.push_str(&prompts.global);
    out.push_str("\n\nINPUT DATA:\n");
    out.push_str(&format!("- Topic: {}\n", briefing.topic));
    out.push_str(&format!(
        "- Context URL: {}\n",
        briefing.url.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!("- Tone of Voice: {}\n", briefing.tone.join(", ")));
    out.push_str(&format!(
        "- Target Audience Description: {}\n",
        briefing.target_audience
    ));

    let profile_lines = profile_context(profile);
    if !profile_lines.is_empty() {
        out.push_str("\nAUTHOR PROFILE:\n");
        out.push_str(&profile_lines);
    }

    out.push_str("\nPLATFORM SPECIFIC INSTRUCTIONS:\n");
    for (index, platform) in ALL_PLATFORMS.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}: {}\n",
            index + 1,
            platform.as_str(),
            prompts.instruction_for(*platform)
        ));
    }

    out.push_str("\nGenerate all assets in the requested JSON structure.");
    out
}

/// Render the non-empty author-profile fields as context lines.
fn profile_context(profile: &UserProfile) -> String {
    let fields = [
        ("Name", &profile.name),
        ("Business", &profile.business),
        ("Offer", &profile.offer),
        ("USP", &profile.usp),
        ("Writing style", &profile.writing_style),
    ];

    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("- {label}: {value}\n"))
        .collect()
}
