//! INI text reader
//!
//! A single-pass, character-by-character scanner that turns INI text into a
//! flat map from `section.key` to value. Reading never fails: lines that do
//! not form a property are dropped, and a section header left open at the end
//! of its line still becomes the current section.

use log::{debug, trace};

use crate::utils::ini::{qualified_key, Properties};

/// Scanner states. Every line starts in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unknown,
    ReadingSectionName,
    ReadingKeyName,
    ReadingKeyValue,
    ReadingComment,
}

/// Only ASCII space and tab count as whitespace.
fn is_space(character: char) -> bool {
    character == ' ' || character == '\t'
}

struct Reader {
    result: Properties,
    state: State,
    current_section: String,
    section_name: String,
    key_name: String,
    key_value: String,
    value_has_only_spaces: bool,
}

impl Reader {
    fn new() -> Self {
        Reader {
            result: Properties::new(),
            state: State::Unknown,
            current_section: String::new(),
            section_name: String::new(),
            key_name: String::new(),
            key_value: String::new(),
            value_has_only_spaces: true,
        }
    }

    fn feed(&mut self, character: char) {
        match character {
            '\r' => return,
            '\n' => {
                self.handle_line_end();
                return;
            }
            _ => {}
        }

        match self.state {
            State::Unknown => {
                if is_space(character) {
                    return;
                }

                match character {
                    ';' => self.state = State::ReadingComment,
                    '[' => {
                        self.state = State::ReadingSectionName;
                        self.section_name.clear();
                    }
                    _ => {
                        self.state = State::ReadingKeyName;
                        self.key_name.clear();
                        self.key_name.push(character);
                    }
                }
            }
            State::ReadingSectionName => {
                if character == ']' {
                    self.current_section = std::mem::take(&mut self.section_name);
                    // Anything after the closing bracket is dropped up to the line end.
                    self.state = State::ReadingComment;
                } else {
                    self.section_name.push(character);
                }
            }
            State::ReadingKeyName => {
                if character == '=' {
                    self.state = State::ReadingKeyValue;
                    self.key_value.clear();
                    self.value_has_only_spaces = true;
                } else {
                    self.key_name.push(character);
                }
            }
            State::ReadingKeyValue => {
                if !is_space(character) {
                    self.value_has_only_spaces = false;
                }
                self.key_value.push(character);
            }
            State::ReadingComment => {}
        }
    }

    /// Flushes whatever the current line was building, then resets to `Unknown`.
    fn handle_line_end(&mut self) {
        match self.state {
            State::ReadingKeyValue => {
                let key = qualified_key(&self.current_section, &self.key_name);
                let value = if self.value_has_only_spaces {
                    String::new()
                } else {
                    std::mem::take(&mut self.key_value)
                };
                self.result.insert(key, value);
            }
            State::ReadingKeyName => {
                trace!("Ignoring line without '=': {:?}", self.key_name);
            }
            State::ReadingSectionName => {
                debug!(
                    "Section header without closing ']', using {:?}",
                    self.section_name
                );
                self.current_section = std::mem::take(&mut self.section_name);
            }
            State::Unknown | State::ReadingComment => {}
        }

        self.state = State::Unknown;
    }

    fn finish(mut self) -> Properties {
        // The last line may have no terminator.
        self.handle_line_end();
        debug!("Read {} properties", self.result.len());
        self.result
    }
}

/// Read INI content from any sequence of characters.
///
/// Keys are qualified with the most recent section header (`section.key`), or
/// left bare before the first header. A later duplicate overwrites an earlier one.
pub fn read<I>(characters: I) -> Properties
where
    I: IntoIterator<Item = char>,
{
    let mut reader = Reader::new();
    for character in characters {
        reader.feed(character);
    }
    reader.finish()
}

/// Parse INI text into a map of qualified keys to values.
///
/// # Examples
///
/// ```
/// let properties = rapid_ini::parse("[Database]\nHost=localhost\n");
/// assert_eq!(properties["Database.Host"], "localhost");
/// ```
pub fn parse(content: &str) -> Properties {
    read(content.chars())
}
