//! Static style and lighting preset tables.
//!
//! Immutable, process-wide; keys are what the front-end sends in the
//! `style`/`lighting` fields. Unknown style keys fall back to the default
//! entry so composition never fails; unknown or absent lighting keys map to
//! an empty fragment.

pub const QUALITY_PHRASE: &str = "masterpiece, best quality";

pub const DEFAULT_STYLE: &str = "anime";

pub const STYLES: &[(&str, &str)] = &[
    ("anime", "anime style"),
    ("cyberpunk", "cyberpunk, neon glow, futuristic cityscape"),
    ("watercolor", "watercolor painting, soft color washes"),
    ("chibi", "chibi, cute, exaggerated proportions"),
    ("ghibli", "ghibli-inspired, lush painterly backgrounds"),
    ("retro", "retro 90s anime cel shading"),
];

pub const LIGHTINGS: &[(&str, &str)] = &[
    ("golden_hour", "golden hour lighting, warm glow"),
    ("neon", "neon lighting, vivid rim light"),
    ("soft", "soft diffused lighting"),
    ("dramatic", "dramatic chiaroscuro lighting"),
    ("backlit", "backlit, strong silhouette"),
];

/// Resolve a style key to its prompt fragment, falling back to the default
/// style for unknown or absent keys.
pub fn style_fragment(key: Option<&str>) -> &'static str {
    let key = key.unwrap_or(DEFAULT_STYLE);
    STYLES
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| STYLES.iter().find(|(k, _)| *k == DEFAULT_STYLE))
        .map(|(_, frag)| *frag)
        .unwrap_or("")
}

/// Resolve a lighting key; absent, empty, `none`, and unknown keys all yield
/// an empty fragment.
pub fn lighting_fragment(key: Option<&str>) -> &'static str {
    match key {
        None | Some("") | Some("none") => "",
        Some(key) => LIGHTINGS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, frag)| *frag)
            .unwrap_or(""),
    }
}
