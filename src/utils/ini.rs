use std::collections::BTreeMap;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{IniError, Result};
use crate::utils::file::parse_file;
use crate::utils::ini_reader::parse;

/// Map of qualified keys (`section.key`) to values, as produced by the reader.
pub type Properties = BTreeMap<String, String>;

/// Join a section and a key the way the reader does.
///
/// An empty section leaves the key bare.
pub fn qualified_key(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", section, key)
    }
}

/// Lookup container over the reader's output.
///
/// The container is not synchronized; share it behind a lock if several
/// threads need to modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IniContainer {
    properties: Properties,
}

impl IniContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse an INI file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from(parse_file(path)?))
    }

    /// Replace every property with the given ones
    pub fn import_properties(&mut self, properties: Properties) {
        self.properties = properties;
    }

    /// Set a property, creating it if it does not exist
    pub fn set_property(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    /// Check if a property with the qualified key exists
    pub fn key_exists(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get the value of a property by its qualified key
    pub fn get_value(&self, key: &str) -> Result<&str> {
        self.properties
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| IniError::KeyNotFound(key.to_string()))
    }

    /// Get the value of `key` in `section`
    ///
    /// An empty section looks up the bare key.
    pub fn get_section_value(&self, section: &str, key: &str) -> Result<&str> {
        if section.is_empty() {
            return self.get_value(key);
        }

        self.get_value(&qualified_key(section, key))
    }

    /// Get the value of a property, or `fallback` if it does not exist
    pub fn get_value_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.properties
            .get(key)
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    /// Get the value of `key` in `section`, or `fallback` if it does not exist
    pub fn get_section_value_or<'a>(
        &'a self,
        section: &str,
        key: &str,
        fallback: &'a str,
    ) -> &'a str {
        if section.is_empty() {
            return self.get_value_or(key, fallback);
        }

        self.get_value_or(&qualified_key(section, key), fallback)
    }

    /// Borrow every property
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Take the properties out of the container
    pub fn into_properties(self) -> Properties {
        self.properties
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the container has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the properties as INI text.
    ///
    /// Sectionless keys come first, followed by one `[section]` block per
    /// section. Reading the output back yields the same properties, except that
    /// whitespace-only values come back empty. Fails when a key or value cannot
    /// be expressed in a line the reader would accept.
    pub fn to_ini_string(&self) -> Result<String> {
        let mut bare: Vec<(&str, &str)> = Vec::new();
        let mut sections: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();

        for (qualified, value) in &self.properties {
            if value.contains(['\n', '\r']) {
                return Err(IniError::Unrepresentable(qualified.clone()));
            }

            if let Some((section, key)) = split_qualified_key(qualified) {
                sections.entry(section).or_default().push((key, value.as_str()));
            } else if is_plain_key(qualified) {
                bare.push((qualified.as_str(), value.as_str()));
            } else {
                return Err(IniError::Unrepresentable(qualified.clone()));
            }
        }

        let mut output = String::new();
        for (key, value) in bare {
            push_property(&mut output, key, value);
        }

        for (section, items) in sections {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push('[');
            output.push_str(section);
            output.push_str("]\n");
            for (key, value) in items {
                push_property(&mut output, key, value);
            }
        }

        Ok(output)
    }

    /// Write the properties to a file as INI text
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_ini_string()?;
        std::fs::write(path.as_ref(), content)?;
        debug!("Wrote {} properties to {}", self.len(), path.as_ref().display());
        Ok(())
    }
}

fn push_property(output: &mut String, key: &str, value: &str) {
    output.push_str(key);
    output.push('=');
    output.push_str(value);
    output.push('\n');
}

/// A key the reader returns unchanged when it starts a line.
///
/// The first character is taken as-is, so only a leading `=` is allowed.
fn is_plain_key(key: &str) -> bool {
    match key.chars().next() {
        None | Some(' ' | '\t' | ';' | '[') => false,
        Some(first) => !key[first.len_utf8()..].contains(['=', '\n', '\r']),
    }
}

fn is_section_name(name: &str) -> bool {
    !name.is_empty() && !name.contains([']', '\n', '\r'])
}

/// Split at the first `.` that leaves a usable section and key.
fn split_qualified_key(qualified: &str) -> Option<(&str, &str)> {
    qualified
        .match_indices('.')
        .map(|(index, _)| (&qualified[..index], &qualified[index + 1..]))
        .find(|(section, key)| is_section_name(section) && is_plain_key(key))
}

impl From<Properties> for IniContainer {
    fn from(properties: Properties) -> Self {
        IniContainer { properties }
    }
}

impl From<&Properties> for IniContainer {
    fn from(properties: &Properties) -> Self {
        IniContainer {
            properties: properties.clone(),
        }
    }
}

impl FromStr for IniContainer {
    type Err = Infallible;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(parse(content)))
    }
}
