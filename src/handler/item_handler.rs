//! # Item Handler
//!
//! Stateless operation set behind the item endpoints. There is no backing
//! store: inserts and deletes retain nothing, and lookups answer with fixed
//! placeholder values once the identifier has the right shape.

use crate::dto::validation::{alphabetic_id_pattern, item_id_pattern, numeric_id_pattern};
use crate::dto::{Count, ItemId, NumericItem, TextItem};
use crate::observability::{Event, Logger};

use super::errors::{ItemError, ItemResult};

/// Number returned for every numeric item lookup
pub const PLACEHOLDER_NUMBER: i64 = 5;
/// Text returned for every text item lookup
pub const PLACEHOLDER_TEXT: &str = "hogehoge";
/// Reported number of numeric items
pub const PLACEHOLDER_COUNT_NUMERIC: i64 = 123;
/// Reported number of text items
pub const PLACEHOLDER_COUNT_TEXT: i64 = 456;

/// Handles item requests
#[derive(Debug, Clone)]
pub struct ItemHandler {
    logger: Logger,
}

impl ItemHandler {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Insert a numeric item
    ///
    /// Raises `Found` when the id is not four digits.
    pub fn insert_number(&self, item: &NumericItem) -> ItemResult<()> {
        let item_id = item.item_id();
        self.logger
            .log_event(Event::InsertNumber, &[("item_id", item_id.as_str())]);

        if !item_id.is_numeric() {
            return Err(ItemError::found(item_id.as_str()));
        }
        Ok(())
    }

    /// Insert a text item
    ///
    /// Raises `Found` when the id is not four letters.
    pub fn insert_text(&self, item: &TextItem) -> ItemResult<()> {
        let item_id = item.item_id();
        self.logger
            .log_event(Event::InsertText, &[("item_id", item_id.as_str())]);

        if !item_id.is_alphabetic() {
            return Err(ItemError::found(item_id.as_str()));
        }
        Ok(())
    }

    /// Delete an item
    ///
    /// Raises `NotFound` when the id is not four letters or digits.
    pub fn delete(&self, item_id: &str) -> ItemResult<()> {
        self.logger.log_event(Event::Delete, &[("item_id", item_id)]);

        if !item_id_pattern().is_match(item_id) {
            return Err(ItemError::not_found(item_id));
        }
        Ok(())
    }

    /// Look up a numeric item
    ///
    /// Raises `NotFound` when the id is not four digits.
    pub fn refer_number(&self, item_id: &str) -> ItemResult<NumericItem> {
        self.logger
            .log_event(Event::ReferNumber, &[("item_id", item_id)]);

        if !numeric_id_pattern().is_match(item_id) {
            return Err(ItemError::not_found(item_id));
        }
        ItemId::parse(item_id)
            .and_then(|id| NumericItem::with_id(id, PLACEHOLDER_NUMBER))
            .map_err(|_| ItemError::not_found(item_id))
    }

    /// Look up a text item
    ///
    /// Raises `NotFound` when the id is not four letters.
    pub fn refer_text(&self, item_id: &str) -> ItemResult<TextItem> {
        self.logger.log_event(Event::ReferText, &[("item_id", item_id)]);

        if !alphabetic_id_pattern().is_match(item_id) {
            return Err(ItemError::not_found(item_id));
        }
        ItemId::parse(item_id)
            .and_then(|id| TextItem::with_id(id, PLACEHOLDER_TEXT))
            .map_err(|_| ItemError::not_found(item_id))
    }

    /// Number of stored items per kind
    pub fn count(&self) -> Count {
        self.logger.log_event(Event::Count, &[]);
        Count::new(PLACEHOLDER_COUNT_NUMERIC, PLACEHOLDER_COUNT_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{check_number, check_text};
    use crate::observability::{MemorySink, Severity};
    use std::sync::Arc;

    fn create_test_handler() -> (Arc<MemorySink>, ItemHandler) {
        let sink = Arc::new(MemorySink::new());
        let handler = ItemHandler::new(Logger::new(sink.clone(), Severity::Trace));
        (sink, handler)
    }

    #[test]
    fn test_placeholders_are_valid_values() {
        assert!(check_number(PLACEHOLDER_NUMBER).is_ok());
        assert!(check_text(PLACEHOLDER_TEXT).is_ok());
    }

    #[test]
    fn test_insert_number_requires_digit_id() {
        let (_, handler) = create_test_handler();
        assert_eq!(
            handler.insert_number(&NumericItem::new("1234", 5).unwrap()),
            Ok(())
        );
        // Inverted placeholder rule: a non-digit id is reported as already present
        assert_eq!(
            handler.insert_number(&NumericItem::new("abcd", 5).unwrap()),
            Err(ItemError::found("abcd"))
        );
        assert_eq!(
            handler.insert_number(&NumericItem::new("12a4", 5).unwrap()),
            Err(ItemError::found("12a4"))
        );
    }

    #[test]
    fn test_insert_text_requires_letter_id() {
        let (_, handler) = create_test_handler();
        assert_eq!(
            handler.insert_text(&TextItem::new("abCD", "x").unwrap()),
            Ok(())
        );
        assert_eq!(
            handler.insert_text(&TextItem::new("1234", "x").unwrap()),
            Err(ItemError::found("1234"))
        );
    }

    #[test]
    fn test_delete_checks_shape_only() {
        let (_, handler) = create_test_handler();
        assert_eq!(handler.delete("ab12"), Ok(()));
        assert_eq!(handler.delete("ab1!"), Err(ItemError::not_found("ab1!")));
        assert_eq!(handler.delete("abc"), Err(ItemError::not_found("abc")));
    }

    #[test]
    fn test_refer_returns_placeholders() {
        let (_, handler) = create_test_handler();
        let numeric = handler.refer_number("1234").unwrap();
        assert_eq!(numeric.item_id().as_str(), "1234");
        assert_eq!(numeric.number(), PLACEHOLDER_NUMBER);

        let text = handler.refer_text("abcd").unwrap();
        assert_eq!(text.item_id().as_str(), "abcd");
        assert_eq!(text.text(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_refer_rejects_wrong_kind() {
        let (_, handler) = create_test_handler();
        assert_eq!(
            handler.refer_number("abcd"),
            Err(ItemError::not_found("abcd"))
        );
        assert_eq!(
            handler.refer_text("1234"),
            Err(ItemError::not_found("1234"))
        );
        assert_eq!(
            handler.refer_number("12345"),
            Err(ItemError::not_found("12345"))
        );
    }

    #[test]
    fn test_every_operation_logs_once() {
        let (sink, handler) = create_test_handler();
        let _ = handler.insert_number(&NumericItem::new("abcd", 1).unwrap());
        let _ = handler.insert_text(&TextItem::new("abcd", "t").unwrap());
        let _ = handler.delete("ab1!");
        let _ = handler.refer_number("1234");
        let _ = handler.refer_text("zzzz");
        let _ = handler.count();

        let lines = sink.lines();
        let events: Vec<serde_json::Value> = lines
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "ITEM_INSERT_NUMBER",
                "ITEM_INSERT_TEXT",
                "ITEM_DELETE",
                "ITEM_REFER_NUMBER",
                "ITEM_REFER_TEXT",
                "ITEM_COUNT",
            ]
        );
        assert_eq!(events[2]["item_id"], "ab1!");
        assert!(events[5].get("item_id").is_none());
    }
}
