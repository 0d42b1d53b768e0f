//! # Domain Types
//!
//! Value objects exchanged with clients. Every constructor runs the rules from
//! [`super::validation`], and JSON deserialization goes through the same
//! constructors, so an instance in hand is always well-formed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{
    alphabetic_id_pattern, check_item_id, check_number, check_text, check_version,
    numeric_id_pattern, ValidationError, ValidationResult,
};

/// Four ASCII letters or digits identifying an item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        check_item_id(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when all four characters are digits (numeric item format)
    pub fn is_numeric(&self) -> bool {
        numeric_id_pattern().is_match(&self.0)
    }

    /// True when all four characters are letters (text item format)
    pub fn is_alphabetic(&self) -> bool {
        alphabetic_id_pattern().is_match(&self.0)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ValidationError;

    fn try_from(raw: String) -> ValidationResult<Self> {
        Self::parse(raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Item holding a number in `1..=10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NumericItemFields")]
pub struct NumericItem {
    item_id: ItemId,
    number: i64,
}

#[derive(Deserialize)]
struct NumericItemFields {
    item_id: String,
    number: i64,
}

impl NumericItem {
    pub fn new(item_id: impl Into<String>, number: i64) -> ValidationResult<Self> {
        let item_id = ItemId::parse(item_id)?;
        let number = check_number(number)?;
        Ok(Self { item_id, number })
    }

    /// Build from an already parsed id
    pub fn with_id(item_id: ItemId, number: i64) -> ValidationResult<Self> {
        let number = check_number(number)?;
        Ok(Self { item_id, number })
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn number(&self) -> i64 {
        self.number
    }
}

impl TryFrom<NumericItemFields> for NumericItem {
    type Error = ValidationError;

    fn try_from(fields: NumericItemFields) -> ValidationResult<Self> {
        Self::new(fields.item_id, fields.number)
    }
}

/// Item holding a text of 1 to 10 chars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TextItemFields")]
pub struct TextItem {
    item_id: ItemId,
    text: String,
}

#[derive(Deserialize)]
struct TextItemFields {
    item_id: String,
    text: String,
}

impl TextItem {
    pub fn new(item_id: impl Into<String>, text: impl Into<String>) -> ValidationResult<Self> {
        let item_id = ItemId::parse(item_id)?;
        Self::with_id(item_id, text)
    }

    /// Build from an already parsed id
    pub fn with_id(item_id: ItemId, text: impl Into<String>) -> ValidationResult<Self> {
        let text = text.into();
        check_text(&text)?;
        Ok(Self { item_id, text })
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TryFrom<TextItemFields> for TextItem {
    type Error = ValidationError;

    fn try_from(fields: TextItemFields) -> ValidationResult<Self> {
        Self::new(fields.item_id, fields.text)
    }
}

/// Number of items per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub count_numeric: i64,
    pub count_text: i64,
}

impl Count {
    pub fn new(count_numeric: i64, count_text: i64) -> Self {
        Self {
            count_numeric,
            count_text,
        }
    }
}

/// Server version in `MAJOR.MINOR.PATCH` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VersionFields")]
pub struct Version {
    version: String,
}

#[derive(Deserialize)]
struct VersionFields {
    version: String,
}

impl Version {
    pub fn new(version: impl Into<String>) -> ValidationResult<Self> {
        let version = version.into();
        check_version(&version)?;
        Ok(Self { version })
    }

    /// Version of this build
    pub fn current() -> ValidationResult<Self> {
        Self::new(env!("CARGO_PKG_VERSION"))
    }

    pub fn as_str(&self) -> &str {
        &self.version
    }

    /// Leading component of the version
    pub fn major(&self) -> &str {
        self.version.split('.').next().unwrap_or("0")
    }
}

impl TryFrom<VersionFields> for Version {
    type Error = ValidationError;

    fn try_from(fields: VersionFields) -> ValidationResult<Self> {
        Self::new(fields.version)
    }
}

/// Health report, always `OK` while the process answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    health: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { health: "OK" }
    }

    pub fn status(&self) -> &str {
        self.health
    }
}
