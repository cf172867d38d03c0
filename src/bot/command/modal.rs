//! Modal construction and collection shared by the interactive commands.

use std::{collections::HashMap, time::Duration};

use serenity::all::{
    ActionRowComponent, Context, CreateActionRow, CreateInputText, CreateModal, InputTextStyle,
    ModalInteraction, ModalInteractionCollector, UserId,
};

use crate::model::display::{
    MAX_AUTHOR_NAME_CHARS, MAX_FIELD_VALUE_CHARS, MAX_FOOTER_CHARS, MAX_TITLE_CHARS,
};

/// Input caps matching the embed part each input ends up in.
pub const FIELD_VALUE_INPUT_LEN: u16 = MAX_FIELD_VALUE_CHARS as u16;
pub const TITLE_INPUT_LEN: u16 = MAX_TITLE_CHARS as u16;
pub const AUTHOR_INPUT_LEN: u16 = MAX_AUTHOR_NAME_CHARS as u16;
pub const FOOTER_INPUT_LEN: u16 = MAX_FOOTER_CHARS as u16;

/// How long the first modal of a flow stays open.
pub const SUBMISSION_TIMEOUT: Duration = Duration::from_secs(10 * 60);
/// How long a follow-up modal or select menu waits.
pub const FOLLOW_UP_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// One text input row of a modal.
pub struct TextField<'a> {
    pub custom_id: &'a str,
    pub label: &'a str,
    pub placeholder: Option<&'a str>,
    pub style: InputTextStyle,
    pub required: bool,
    pub max_length: Option<u16>,
}

impl<'a> TextField<'a> {
    pub fn short(custom_id: &'a str, label: &'a str) -> Self {
        Self {
            custom_id,
            label,
            placeholder: None,
            style: InputTextStyle::Short,
            required: true,
            max_length: None,
        }
    }

    pub fn paragraph(custom_id: &'a str, label: &'a str) -> Self {
        Self {
            style: InputTextStyle::Paragraph,
            ..Self::short(custom_id, label)
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn max_length(mut self, max_length: u16) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Builds a modal with one row per field.
pub fn build(custom_id: &str, title: &str, fields: &[TextField<'_>]) -> CreateModal {
    let rows = fields
        .iter()
        .map(|field| {
            let mut input = CreateInputText::new(field.style, field.label, field.custom_id)
                .required(field.required);
            if let Some(placeholder) = field.placeholder {
                input = input.placeholder(placeholder);
            }
            if let Some(max_length) = field.max_length {
                input = input.max_length(max_length);
            }
            CreateActionRow::InputText(input)
        })
        .collect();

    CreateModal::new(custom_id, title).components(rows)
}

/// Waits for `user_id` to submit the modal with `custom_id`.
///
/// # Returns
/// - `Some(ModalInteraction)` - The submission
/// - `None` - Nothing arrived within `timeout`
pub async fn await_submission(
    ctx: &Context,
    user_id: UserId,
    custom_id: &str,
    timeout: Duration,
) -> Option<ModalInteraction> {
    let custom_id = custom_id.to_string();

    ModalInteractionCollector::new(&ctx.shard)
        .author_id(user_id)
        .filter(move |modal| modal.data.custom_id == custom_id)
        .timeout(timeout)
        .next()
        .await
}

/// Submitted text keyed by input custom id; blank inputs are left out.
pub fn submitted_values(modal: &ModalInteraction) -> HashMap<String, String> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => input
                .value
                .as_ref()
                .filter(|value| !value.trim().is_empty())
                .map(|value| (input.custom_id.clone(), value.clone())),
            _ => None,
        })
        .collect()
}
