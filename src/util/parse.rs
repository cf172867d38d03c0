use serde::{de, Deserialize, Deserializer};
use serenity::all::ReactionType;

/// Parses a `#RRGGBB` (or bare `RRGGBB`) hex colour.
///
/// # Returns
/// - `Some(u32)` - The 24-bit RGB value
/// - `None` - Not exactly six hex digits
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}

/// Serde adapter for hex colour strings in the settings file.
pub fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hex_color(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid hex colour '{}', expected #RRGGBB", raw)))
}

/// Serde adapter for reaction emoji, either unicode (`"👍"`) or custom (`"<:up:1234>"`).
pub fn deserialize_reaction<'de, D>(deserializer: D) -> Result<ReactionType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    ReactionType::try_from(raw.as_str())
        .map_err(|_| de::Error::custom(format!("invalid reaction emoji '{}'", raw)))
}

/// Lowercases the label and collapses each whitespace run into `_`.
pub fn custom_id_for_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Truncates to at most `max` characters without splitting a code point.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Accepts only absolute http(s) URLs, which is all Discord renders in embeds.
pub fn is_embed_url(value: &str) -> bool {
    let value = value.trim();
    (value.starts_with("https://") || value.starts_with("http://")) && !value.contains(' ')
}
