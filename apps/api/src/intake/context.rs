//! Context Builder — composes the intake answers into the block embedded in every prompt.
//!
//! A non-blank raw brief leads; structured fields follow as supplementary signal.
//! Blank fields always render as a placeholder so prompts keep the same shape
//! regardless of how much was filled in.

use std::fmt::Write as _;

use super::{non_blank, or_na, IntakeAnswers, NO_REFERENCES};

const BRIEF_DIVIDER: &str = "------------------------------";
const UPLOADS_HEADING: &str =
    "Uploaded reference files (filenames only, designer will open locally):";

/// Builds the context text for prompt interpolation. Never fails.
pub fn build_context_text(answers: &IntakeAnswers) -> String {
    match non_blank(&answers.raw_brief) {
        Some(brief) => brief_led_context(brief, answers),
        None => structured_context(answers),
    }
}

fn brief_led_context(brief: &str, a: &IntakeAnswers) -> String {
    format!(
        "RAW CLIENT BRIEF (user-typed):\n\
         \n\
         {brief}\n\
         \n\
         {BRIEF_DIVIDER}\n\
         Structured intake fields (if any were filled):\n\
         Client / Brand: {}\n\
         Industry / niche: {}\n\
         Target audience: {}\n\
         Main goals: {}\n\
         Brand vibe: {}\n\
         Voice & tone: {}\n\
         Preferred colors: {}\n\
         Visual keywords / mood: {}\n\
         Main platforms: {}\n",
        or_na(&a.client_name),
        or_na(&a.industry),
        or_na(&a.target_audience),
        or_na(&a.goals),
        or_na(&a.brand_vibe),
        or_na(&a.voice_tone),
        or_na(&a.colors),
        or_na(&a.visual_keywords),
        or_na(&a.platforms),
    )
}

fn structured_context(a: &IntakeAnswers) -> String {
    let mut context = format!(
        "Client / Brand:\n\
         - Name: {}\n\
         - Industry / niche: {}\n\
         \n\
         Audience & Goals:\n\
         - Target audience: {}\n\
         - Main business / brand goals: {}\n\
         \n\
         Brand Vibe & Personality:\n\
         - Current / desired vibe: {}\n\
         - Voice & tone notes: {}\n\
         \n\
         Visual Direction:\n\
         - Preferred colors or themes: {}\n\
         - Visual keywords / mood: {}\n\
         \n\
         Platforms:\n\
         - Main platforms: {}\n\
         \n\
         References:\n\
         - Reference links (Insta, Pinterest, sites):\n\
         {}\n",
        or_na(&a.client_name),
        or_na(&a.industry),
        or_na(&a.target_audience),
        or_na(&a.goals),
        or_na(&a.brand_vibe),
        or_na(&a.voice_tone),
        or_na(&a.colors),
        or_na(&a.visual_keywords),
        or_na(&a.platforms),
        non_blank(&a.reference_links).unwrap_or(NO_REFERENCES),
    );

    let uploads: Vec<&str> = a
        .uploaded_files
        .iter()
        .filter_map(|name| non_blank(name))
        .collect();
    if !uploads.is_empty() {
        context.push('\n');
        context.push_str(UPLOADS_HEADING);
        context.push('\n');
        for name in uploads {
            // Writing to a String cannot fail.
            let _ = writeln!(context, "- {name}");
        }
    }

    context.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_answers() -> IntakeAnswers {
        IntakeAnswers {
            raw_brief: String::new(),
            client_name: "GlowNest Cosmetics".into(),
            industry: "Skincare".into(),
            target_audience: "Women 25-40 with sensitive skin".into(),
            goals: "Launch a new serum line".into(),
            brand_vibe: "Soft, luxe, calm".into(),
            voice_tone: "Warm and honest".into(),
            colors: "Blush pink, cream".into(),
            visual_keywords: "soft glow, dewy".into(),
            platforms: "Instagram, TikTok".into(),
            reference_links: "https://pinterest.com/glownest".into(),
            uploaded_files: vec!["logo_v1.png".into(), "brief.pdf".into()],
        }
    }

    #[test]
    fn test_raw_brief_leads_the_context() {
        let answers = IntakeAnswers {
            raw_brief: "I'm launching a new art merch brand called SpotaSwag.".into(),
            industry: "Merch".into(),
            ..Default::default()
        };
        let context = build_context_text(&answers);
        assert!(context.starts_with("RAW CLIENT BRIEF (user-typed):\n\nI'm launching a new art merch brand called SpotaSwag.\n"));
        assert!(context.contains("Industry / niche: Merch"));
        assert!(context.contains("Client / Brand: N/A"));
    }

    #[test]
    fn test_raw_brief_present_regardless_of_structured_fields() {
        let mut answers = full_answers();
        answers.raw_brief = "Brief text wins.".into();
        let context = build_context_text(&answers);
        assert!(context.contains("\n\nBrief text wins.\n"));
        assert!(context.contains("Client / Brand: GlowNest Cosmetics"));
        assert!(!context.contains("References:"));
    }

    #[test]
    fn test_whitespace_brief_falls_back_to_structured() {
        let answers = IntakeAnswers {
            raw_brief: "   \n\t".into(),
            ..full_answers()
        };
        let context = build_context_text(&answers);
        assert!(context.starts_with("Client / Brand:\n- Name: GlowNest Cosmetics"));
    }

    #[test]
    fn test_blank_structured_fields_render_placeholders() {
        let context = build_context_text(&IntakeAnswers::default());
        for label in [
            "- Name: N/A",
            "- Industry / niche: N/A",
            "- Target audience: N/A",
            "- Main business / brand goals: N/A",
            "- Current / desired vibe: N/A",
            "- Voice & tone notes: N/A",
            "- Preferred colors or themes: N/A",
            "- Visual keywords / mood: N/A",
            "- Main platforms: N/A",
        ] {
            assert!(context.contains(label), "missing line {label:?} in:\n{context}");
        }
        assert!(context.ends_with("None provided."));
        assert!(!context.contains(UPLOADS_HEADING));
    }

    #[test]
    fn test_uploaded_files_listed_under_heading() {
        let context = build_context_text(&full_answers());
        assert!(context.contains(&format!("{UPLOADS_HEADING}\n- logo_v1.png\n- brief.pdf")));
        assert!(context.contains("https://pinterest.com/glownest"));
    }

    #[test]
    fn test_all_headings_present_in_order() {
        let context = build_context_text(&full_answers());
        let positions: Vec<usize> = [
            "Client / Brand:",
            "Audience & Goals:",
            "Brand Vibe & Personality:",
            "Visual Direction:",
            "Platforms:",
            "References:",
        ]
        .iter()
        .map(|h| context.find(h).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
