//! Parsing of bot commands typed into a chat.

use chrono::{NaiveDateTime, NaiveTime};

use crate::server::{
    model::reminder::Recurrence,
    util::parse::{parse_date, parse_time_of_day},
};

pub const REMIND_USAGE: &str = "/remind <when> <text>";
pub const DAILY_USAGE: &str = "/daily <HH:MM> <text>";
pub const WEEKLY_USAGE: &str = "/weekly <when> <text>";
pub const DELETE_USAGE: &str = "/delete <id>";

/// When a reminder should first fire, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    /// `HH:MM`: the next time the clock shows this time.
    TimeOfDay(NaiveTime),
    /// `YYYY-MM-DD HH:MM` or `DD.MM.YYYY HH:MM`.
    At(NaiveDateTime),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    List,
    Remind {
        when: When,
        text: String,
        recurrence: Recurrence,
    },
    Delete {
        id: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Message does not start with `/`.
    NotACommand,
    /// Command name the bot does not know, without the leading slash.
    Unknown(String),
    /// Known command with malformed arguments; carries the usage line.
    Usage(&'static str),
}

impl Command {
    /// Parses a chat message into a command.
    ///
    /// Command names are case-insensitive and may carry a `@botname` suffix, which
    /// Telegram appends to commands picked from the menu in group chats.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        let Some(rest) = input.strip_prefix('/') else {
            return Err(ParseError::NotACommand);
        };

        let (name, args) = split_token(rest);
        let name = name
            .split_once('@')
            .map_or(name, |(name, _)| name)
            .to_lowercase();

        match name.as_str() {
            "start" => Ok(Self::Start),
            "help" => Ok(Self::Help),
            "list" => Ok(Self::List),
            "remind" => {
                parse_reminder(args, Recurrence::Once).ok_or(ParseError::Usage(REMIND_USAGE))
            }
            "daily" => parse_reminder(args, Recurrence::Daily)
                .filter(|command| {
                    matches!(
                        command,
                        Self::Remind {
                            when: When::TimeOfDay(_),
                            ..
                        }
                    )
                })
                .ok_or(ParseError::Usage(DAILY_USAGE)),
            "weekly" => {
                parse_reminder(args, Recurrence::Weekly).ok_or(ParseError::Usage(WEEKLY_USAGE))
            }
            "delete" => args
                .parse::<i32>()
                .map(|id| Self::Delete { id })
                .map_err(|_| ParseError::Usage(DELETE_USAGE)),
            _ => Err(ParseError::Unknown(name)),
        }
    }

    /// Whether the chat must have sent `/start` before using this command.
    pub fn requires_registration(&self) -> bool {
        !matches!(self, Self::Start | Self::Help)
    }
}

fn parse_reminder(args: &str, recurrence: Recurrence) -> Option<Command> {
    let (when, text) = split_when(args)?;
    if text.is_empty() {
        return None;
    }

    Some(Command::Remind {
        when,
        text: text.to_string(),
        recurrence,
    })
}

/// Splits the leading `<when>` off the arguments, returning it with the remaining text.
fn split_when(args: &str) -> Option<(When, &str)> {
    let (first, rest) = split_token(args);

    if let Some(date) = parse_date(first) {
        let (second, rest) = split_token(rest);
        let time = parse_time_of_day(second)?;
        return Some((When::At(date.and_time(time)), rest));
    }

    parse_time_of_day(first).map(|time| (When::TimeOfDay(time), rest))
}

fn split_token(value: &str) -> (&str, &str) {
    match value.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (value, ""),
    }
}
