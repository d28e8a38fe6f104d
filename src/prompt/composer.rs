//! Final prompt composition.
//!
//! Concatenates, in fixed order: quality phrase, mode prefix, style
//! fragment, lighting fragment, raw user text. The order is preserved for
//! providers with positional prompt weighting. User text is passed through
//! untouched; content moderation is the upstream provider's problem.
use crate::prompt::presets::{lighting_fragment, style_fragment, QUALITY_PHRASE};
use crate::providers::Mode;

const LINEART_PREFIX: &str = "monochrome lineart, sketch, black and white";
const COLORIZE_PREFIX: &str = "vibrant colors, coloring book style, no outlines";

/// Fragment used in place of a colorful style when the mode asks for
/// monochrome output.
const LINEART_STYLE: &str = "clean line art";

const COLOR_TERMS: &[&str] = &["color", "vibrant", "neon", "golden", "warm", "glow"];

pub fn compose(mode: Mode, style_key: Option<&str>, lighting_key: Option<&str>, user_text: &str) -> String {
    let mut style = style_fragment(style_key);
    let prefix = match mode {
        Mode::Lineart => {
            // A colorful style fragment would fight the monochrome prefix.
            if COLOR_TERMS.iter().any(|t| style.contains(t)) {
                style = LINEART_STYLE;
            }
            LINEART_PREFIX
        }
        Mode::Colorize => COLORIZE_PREFIX,
        Mode::Txt2Img | Mode::Redraw => "",
    };
    let lighting = lighting_fragment(lighting_key);

    [QUALITY_PHRASE, prefix, style, lighting, user_text]
        .iter()
        .filter(|piece| !piece.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack.find(needle).unwrap_or_else(|| panic!("'{needle}' not in '{haystack}'"))
    }

    #[test]
    fn pieces_appear_in_fixed_order() {
        let p = compose(Mode::Txt2Img, Some("cyberpunk"), Some("none"), "a fox");
        let quality = position(&p, QUALITY_PHRASE);
        let style = position(&p, "cyberpunk");
        let user = position(&p, "a fox");
        assert!(quality < style && style < user, "{p}");
    }

    #[test]
    fn unknown_style_key_never_fails() {
        let p = compose(Mode::Txt2Img, Some("not-a-style"), None, "a fox");
        assert!(p.contains("anime style"));
        assert!(p.ends_with("a fox"));
    }

    #[test]
    fn lineart_overrides_colorful_styles() {
        let p = compose(Mode::Lineart, Some("cyberpunk"), None, "a fox");
        assert!(p.contains(LINEART_PREFIX));
        assert!(!p.contains("neon glow"));
        assert!(p.contains(LINEART_STYLE));
    }

    #[test]
    fn lineart_keeps_neutral_styles() {
        let p = compose(Mode::Lineart, Some("chibi"), None, "a fox");
        assert!(p.contains("chibi"));
    }

    #[test]
    fn colorize_prepends_vibrant_vocabulary() {
        let p = compose(Mode::Colorize, None, None, "a fox");
        assert!(position(&p, COLORIZE_PREFIX) < position(&p, "anime style"));
    }

    #[test]
    fn lighting_fragment_sits_between_style_and_user_text() {
        let p = compose(Mode::Txt2Img, Some("watercolor"), Some("dramatic"), "a fox");
        let style = position(&p, "watercolor");
        let lighting = position(&p, "chiaroscuro");
        let user = position(&p, "a fox");
        assert!(style < lighting && lighting < user, "{p}");
    }
}
