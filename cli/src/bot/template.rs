//! # Reply Templates
//!
//! File: cli/src/bot/template.rs
//!
//! Replies are stored as templates and rendered at the moment they are
//! chosen. Two placeholders are recognised:
//!
//! - `{name}`: the bot's display name
//! - `{now:FMT}`: the current local time, formatted with the chrono strftime string `FMT`
//!
//! Anything else in braces is copied through untouched.
//!
use crate::core::error::ChatError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Values substituted into a template when a reply is rendered.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub bot_name: &'a str,
    pub now: DateTime<Local>,
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Name,
    Now(&'a str),
}

/// Splits a template into literal runs and placeholders.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(inner) = self.rest.strip_prefix('{') {
            if let Some(end) = inner.find('}') {
                let token = &inner[..end];
                let placeholder = if token == "name" {
                    Some(Segment::Name)
                } else {
                    token.strip_prefix("now:").map(Segment::Now)
                };
                if let Some(segment) = placeholder {
                    self.rest = &inner[end + 1..];
                    return Some(segment);
                }
            }
            // Not a placeholder: the brace is ordinary text.
            let (literal, rest) = self.rest.split_at(1);
            self.rest = rest;
            return Some(Segment::Literal(literal));
        }

        let end = self.rest.find('{').unwrap_or(self.rest.len());
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Literal(literal))
    }
}

fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

/// Renders `template` against `ctx`.
///
/// Never fails: a `{now:...}` whose format chrono rejects is left as written.
/// Tables built through `PatternTable::new` have already been checked with
/// [`validate`], so that only happens for templates rendered ad hoc.
pub fn render(template: &str, ctx: &ReplyContext<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Name => out.push_str(ctx.bot_name),
            Segment::Now(format) => {
                let mark = out.len();
                if write!(out, "{}", ctx.now.format(format)).is_err() {
                    out.truncate(mark);
                    out.push_str("{now:");
                    out.push_str(format);
                    out.push('}');
                }
            }
        }
    }
    out
}

/// Checks every `{now:...}` placeholder in `template` for a valid strftime format.
pub fn validate(template: &str) -> Result<(), ChatError> {
    for segment in segments(template) {
        if let Segment::Now(format) = segment {
            if StrftimeItems::new(format).any(|item| item == Item::Error) {
                return Err(ChatError::InvalidTimeFormat {
                    format: format.to_string(),
                });
            }
        }
    }
    Ok(())
}
