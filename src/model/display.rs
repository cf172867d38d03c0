//! Platform-neutral embed model.
//!
//! Services build `DisplayUnit`s and the bot layer converts them to Serenity's
//! `CreateEmbed` when sending. Keeping the unit a plain value makes formatting
//! comparable in tests and lets review flows rebuild an embed read back from Discord.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Embed, Timestamp};

/// Discord's embed limits, counted in characters.
pub const MAX_TITLE_CHARS: usize = 256;
pub const MAX_AUTHOR_NAME_CHARS: usize = 256;
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;
pub const MAX_FOOTER_CHARS: usize = 2048;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayUnit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub author: Option<DisplayAuthor>,
    pub footer: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub fields: Vec<DisplayField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl DisplayUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn author(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author = Some(DisplayAuthor {
            name: name.into(),
            icon_url,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(DisplayField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Reads an embed as received from Discord back into a unit.
    ///
    /// Only the parts the bot itself produces are kept; provider and video data are
    /// dropped.
    pub fn from_embed(embed: &Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            color: embed.colour.map(|c| c.0),
            author: embed.author.as_ref().map(|a| DisplayAuthor {
                name: a.name.clone(),
                icon_url: a.icon_url.clone(),
            }),
            footer: embed.footer.as_ref().map(|f| f.text.clone()),
            image: embed.image.as_ref().map(|i| i.url.clone()),
            thumbnail: embed.thumbnail.as_ref().map(|t| t.url.clone()),
            timestamp: embed
                .timestamp
                .and_then(|ts| DateTime::from_timestamp(ts.unix_timestamp(), 0)),
            fields: embed
                .fields
                .iter()
                .map(|f| DisplayField {
                    name: f.name.clone(),
                    value: f.value.clone(),
                    inline: f.inline,
                })
                .collect(),
        }
    }

    /// Builds the Serenity embed for sending.
    pub fn to_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new();

        if let Some(title) = &self.title {
            embed = embed.title(title);
        }
        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(color) = self.color {
            embed = embed.colour(color);
        }
        if let Some(author) = &self.author {
            let mut create_author = CreateEmbedAuthor::new(&author.name);
            if let Some(icon_url) = &author.icon_url {
                create_author = create_author.icon_url(icon_url);
            }
            embed = embed.author(create_author);
        }
        if let Some(footer) = &self.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        if let Some(image) = &self.image {
            embed = embed.image(image);
        }
        if let Some(thumbnail) = &self.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }
        // chrono timestamps are always inside Discord's representable range
        if let Some(ts) = self
            .timestamp
            .and_then(|at| Timestamp::from_unix_timestamp(at.timestamp()).ok())
        {
            embed = embed.timestamp(ts);
        }
        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        embed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_embed;

    /// Tests reading a received embed back into a unit.
    ///
    /// Expected: title, colour, author, timestamp and fields preserved in order
    #[test]
    fn reads_received_embed() {
        let embed = create_test_embed(
            "💡 Dark mode",
            0x9600ff,
            &[("Votes", "12", true), ("Status", "Open", false)],
        );

        let unit = DisplayUnit::from_embed(&embed);

        assert_eq!(unit.title.as_deref(), Some("💡 Dark mode"));
        assert_eq!(unit.color, Some(0x9600ff));
        assert_eq!(unit.description.as_deref(), Some("Original description"));
        assert_eq!(unit.author.as_ref().map(|a| a.name.as_str()), Some("reporter"));
        assert_eq!(unit.timestamp.map(|t| t.timestamp()), Some(1740830400));
        assert_eq!(unit.fields.len(), 2);
        assert_eq!(unit.fields[0].name, "Votes");
        assert!(unit.fields[0].inline);
        assert_eq!(unit.fields[1].value, "Open");
    }
}
