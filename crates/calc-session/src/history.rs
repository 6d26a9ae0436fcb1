//! Run-length history of successful calculations.

use std::num::NonZeroUsize;

use serde::Serialize;

/// One history entry.
///
/// Consecutive identical calculations collapse into a single record whose
/// `repeat_count` says how many times it was submitted in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    input_expression: String,
    result_text: String,
    repeat_count: u32,
}

impl CalculationRecord {
    fn new(input_expression: &str, result_text: &str) -> Self {
        Self {
            input_expression: input_expression.to_string(),
            result_text: result_text.to_string(),
            repeat_count: 1,
        }
    }

    /// The raw input as the user typed it.
    pub fn input_expression(&self) -> &str {
        &self.input_expression
    }

    /// The formatted result.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Number of consecutive identical submissions, always ≥ 1.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    fn matches(&self, input_expression: &str, result_text: &str) -> bool {
        self.input_expression == input_expression && self.result_text == result_text
    }
}

/// Ordered history, most recent first.
///
/// No two adjacent records share both input and result.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: Vec<CalculationRecord>,
    limit: Option<NonZeroUsize>,
}

impl HistoryLog {
    /// Create an empty, unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log that keeps at most `limit` records.
    ///
    /// A limit of zero is raised to one: the newest record is always kept.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.map(|n| NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Record a calculation.
    ///
    /// Merges into the most recent record when both fields are identical,
    /// otherwise prepends a new record. Returns the most recent record.
    pub fn record(&mut self, input_expression: &str, result_text: &str) -> &CalculationRecord {
        let merge = self
            .records
            .first()
            .is_some_and(|head| head.matches(input_expression, result_text));

        if merge {
            let head = &mut self.records[0];
            head.repeat_count = head.repeat_count.saturating_add(1);
            tracing::debug!(
                input = input_expression,
                repeat_count = head.repeat_count,
                "merged repeated calculation"
            );
        } else {
            if let Some(limit) = self.limit {
                self.records.truncate(limit.get() - 1);
            }
            self.records
                .insert(0, CalculationRecord::new(input_expression, result_text));
        }

        // Non-empty: either merged into the head or just inserted.
        &self.records[0]
    }

    /// All records, most recent first.
    pub fn entries(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// The record at `index` (0 = most recent).
    pub fn get(&self, index: usize) -> Option<&CalculationRecord> {
        self.records.get(index)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The input text to put back in front of the user for `record`.
    pub fn restore<'r>(&self, record: &'r CalculationRecord) -> &'r str {
        record.input_expression()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.get(0).is_none());
    }

    #[test]
    fn test_record_returns_head() {
        let mut log = HistoryLog::new();
        let head = log.record("2+2", "4");
        assert_eq!(head.input_expression(), "2+2");
        assert_eq!(head.repeat_count(), 1);
        let head = log.record("2+2", "4");
        assert_eq!(head.repeat_count(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut log = HistoryLog::with_limit(Some(2));
        log.record("1", "1");
        log.record("2", "2");
        log.record("3", "3");
        let inputs: Vec<&str> = log.entries().iter().map(|r| r.input_expression()).collect();
        assert_eq!(inputs, vec!["3", "2"]);
    }

    #[test]
    fn test_zero_limit_keeps_newest() {
        let mut log = HistoryLog::with_limit(Some(0));
        assert_eq!(log.record("a", "b").input_expression(), "a");
        log.record("c", "d");
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].input_expression(), "c");
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut log = HistoryLog::new();
        log.record("sqrt(16)", "4");
        let json = serde_json::to_string(log.entries()).unwrap();
        assert_eq!(
            json,
            r#"[{"inputExpression":"sqrt(16)","resultText":"4","repeatCount":1}]"#
        );
    }
}
