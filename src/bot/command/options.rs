//! Typed access to slash command options.

use serenity::all::{CommandInteraction, ResolvedOption, ResolvedValue, User};

use crate::error::command::CommandError;

/// Options of the invoked command, or of its subcommand when one was used.
pub struct CommandOptions<'a> {
    pub subcommand: Option<&'a str>,
    options: Vec<ResolvedOption<'a>>,
}

impl<'a> CommandOptions<'a> {
    pub fn resolve(command: &'a CommandInteraction) -> Self {
        let mut options = command.data.options();

        if let [ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(_),
            ..
        }] = options.as_slice()
        {
            let name = *name;
            if let Some(ResolvedOption {
                value: ResolvedValue::SubCommand(inner),
                ..
            }) = options.pop()
            {
                return Self {
                    subcommand: Some(name),
                    options: inner,
                };
            }
        }

        Self {
            subcommand: None,
            options,
        }
    }

    fn value(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn user(&self, name: &str) -> Result<&'a User, CommandError> {
        match self.value(name) {
            Some(ResolvedValue::User(user, _)) => Ok(*user),
            _ => Err(missing(name)),
        }
    }

    pub fn string(&self, name: &str) -> Result<&'a str, CommandError> {
        match self.value(name) {
            Some(ResolvedValue::String(value)) => Ok(*value),
            _ => Err(missing(name)),
        }
    }

    pub fn optional_integer(&self, name: &str) -> Option<i64> {
        match self.value(name) {
            Some(ResolvedValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Discord enforces required options, so this only fires when definitions drift.
fn missing(name: &str) -> CommandError {
    CommandError::precondition(format!("Error: Missing option `{}`.", name))
}
