//! vCard document parser.
//!
//! Logical lines drive an explicit state machine: [`State::Idle`] waits for
//! `BEGIN:VCARD`, [`State::InComponent`] collects properties until the
//! matching `END`, where the required properties are checked.

use vcardkit_core::constants::{COMPONENT_VCARD, SUPPORTED_VERSION};

use super::error::{ParseError, ParseResult};
use super::lexer::{LogicalLine, parse_content_line, split_lines};
use crate::rfc::vcard::core::{VCard, VCardProperty, names};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Unfolds the input, tokenizes every logical line and assembles one
/// [`VCard`] per `BEGIN:VCARD`/`END:VCARD` block.
///
/// ## Errors
/// Returns the first error encountered: a malformed content line, a
/// BEGIN/END grammar violation, a missing VERSION or FN, a VERSION other
/// than 4.0, or input without any vCard.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let lines = split_lines(input);
    tracing::trace!(count = lines.len(), "Split lines");

    let cards = assemble(&lines).inspect_err(|err| {
        tracing::warn!(error = %err, "Rejected vCard input");
    })?;

    tracing::debug!(count = cards.len(), "Parsed vCards");
    Ok(cards)
}

/// Parses a document and returns its first vCard.
///
/// ## Errors
/// Same as [`parse`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    parse(input)?
        .into_iter()
        .next()
        .ok_or_else(ParseError::empty_input)
}

fn assemble(lines: &[LogicalLine]) -> ParseResult<Vec<VCard>> {
    let mut cards = Vec::new();
    let mut state = State::Idle;

    for line in lines {
        state = match state.step(line)? {
            Step::Next(next) => next,
            Step::Complete(card) => {
                cards.push(card);
                State::Idle
            }
        };
    }

    if let State::InComponent(builder) = state {
        return Err(ParseError::structural(
            builder.begin_line,
            format!("Unexpected end of input: missing END:{}", builder.kind),
        ));
    }

    if cards.is_empty() {
        return Err(ParseError::empty_input());
    }

    Ok(cards)
}

/// Assembler state between logical lines.
enum State {
    /// Outside any component.
    Idle,
    /// Inside a `BEGIN:VCARD` block.
    InComponent(ComponentBuilder),
}

/// Outcome of feeding one line to the assembler.
enum Step {
    Next(State),
    Complete(VCard),
}

/// A component under construction.
struct ComponentBuilder {
    kind: String,
    begin_line: usize,
    version_line: Option<usize>,
    card: VCard,
}

impl State {
    fn step(self, line: &LogicalLine) -> ParseResult<Step> {
        match self {
            Self::Idle => {
                let kind = match parse_content_line(&line.text, line.number) {
                    Ok(prop) if is_begin_vcard(&prop) => prop.value.trim().to_ascii_uppercase(),
                    _ => {
                        return Err(ParseError::structural(
                            line.number,
                            format!("Expected BEGIN:VCARD but got: {}", line.text),
                        ));
                    }
                };
                Ok(Step::Next(Self::InComponent(ComponentBuilder {
                    kind,
                    begin_line: line.number,
                    version_line: None,
                    card: VCard::new(),
                })))
            }
            Self::InComponent(mut builder) => {
                let prop = parse_content_line(&line.text, line.number)?;

                if prop.name == names::BEGIN {
                    return Err(ParseError::structural(
                        line.number,
                        format!("Nested BEGIN is not supported: {}", line.text),
                    ));
                }

                if prop.name == names::END {
                    if !prop.value.trim().eq_ignore_ascii_case(&builder.kind) {
                        return Err(ParseError::structural(
                            line.number,
                            format!(
                                "Mismatched END tag: expected END:{} but got: {}",
                                builder.kind, line.text
                            ),
                        ));
                    }
                    return builder.finish(line.number).map(Step::Complete);
                }

                if prop.name == names::VERSION && builder.version_line.is_none() {
                    builder.version_line = Some(line.number);
                }
                builder.card.add_property(prop);
                Ok(Step::Next(Self::InComponent(builder)))
            }
        }
    }
}

impl ComponentBuilder {
    /// Checks the required properties and releases the component.
    fn finish(self, end_line: usize) -> ParseResult<VCard> {
        let Some(version) = self.card.version() else {
            return Err(ParseError::missing_property(end_line, names::VERSION));
        };

        if version != SUPPORTED_VERSION {
            return Err(ParseError::unsupported_version(
                self.version_line.unwrap_or(end_line),
                version,
            ));
        }

        let has_fn = self
            .card
            .get_properties(names::FN)
            .iter()
            .any(|p| !p.value.trim().is_empty());
        if !has_fn {
            return Err(ParseError::missing_property(end_line, names::FN));
        }

        tracing::trace!(
            begin_line = self.begin_line,
            properties = self.card.len(),
            "Assembled vCard"
        );
        Ok(self.card)
    }
}

fn is_begin_vcard(prop: &VCardProperty) -> bool {
    prop.name == names::BEGIN && prop.value.trim().eq_ignore_ascii_case(COMPONENT_VCARD)
}
