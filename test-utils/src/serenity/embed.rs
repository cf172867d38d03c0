//! Test factory for creating Serenity Embed objects.

use serenity::all::Embed;

/// Creates a test Serenity Embed as Discord would return it for a posted message.
///
/// # Arguments
/// - `title` - Embed title
/// - `color` - Embed color as a 24-bit RGB integer
/// - `fields` - `(name, value, inline)` tuples in display order
///
/// # Panics
/// - If the JSON cannot be deserialized into an Embed (indicates invalid test data)
pub fn create_test_embed(title: &str, color: u32, fields: &[(&str, &str, bool)]) -> Embed {
    let fields: Vec<serde_json::Value> = fields
        .iter()
        .map(|(name, value, inline)| {
            serde_json::json!({ "name": name, "value": value, "inline": inline })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "rich",
        "title": title,
        "color": color,
        "description": "Original description",
        "author": { "name": "reporter", "icon_url": "https://cdn.discordapp.com/embed/avatars/0.png" },
        "timestamp": "2025-03-01T12:00:00.000000+00:00",
        "fields": fields,
    }))
    .expect("Failed to create test embed - invalid JSON structure")
}
