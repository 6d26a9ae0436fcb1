//! Session state and the operations a display layer drives.

use calc_types::SourceText;
use serde::Serialize;

use crate::config::SessionConfig;
use crate::error::CalculationError;
use crate::history::{CalculationRecord, HistoryLog};
use crate::pipeline::{calculate, Calculation};

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Readout {
    /// Nothing calculated yet, or cleared.
    #[default]
    Empty,
    /// The last submission failed.
    Error,
    /// The last successful result.
    Value(String),
}

/// One calculator session: input text, readout and history.
///
/// Each [`submit`](Session::submit) runs to completion synchronously; a
/// failed submission never touches the history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    readout: Readout,
    history: HistoryLog,
    config: SessionConfig,
}

impl Session {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with `config`.
    ///
    /// Out-of-range settings are raised to their minimum rather than
    /// rejected; use [`SessionConfig::from_json`] for strict loading.
    pub fn with_config(config: SessionConfig) -> Self {
        let config = config.normalized();
        Self {
            history: HistoryLog::with_limit(config.history_limit),
            config,
            ..Self::default()
        }
    }

    // ── Calculation ───────────────────────────────────────────────────────

    /// Evaluate `raw` and record it on success.
    ///
    /// Blank input is rejected with [`CalculationError::EmptyInput`] and
    /// changes nothing. On failure the input is kept for correction and the
    /// readout switches to [`Readout::Error`]. On success the input is
    /// cleared.
    pub fn submit(&mut self, raw: &str) -> Result<Calculation, CalculationError> {
        if SourceText::new(raw).is_blank() {
            return Err(CalculationError::EmptyInput);
        }
        if self.input != raw {
            self.input = raw.to_string();
        }

        match calculate(raw, &self.config) {
            Ok(calculation) => {
                self.history.record(raw, &calculation.result_text);
                self.readout = Readout::Value(calculation.result_text.clone());
                self.input.clear();
                tracing::debug!(
                    input = raw,
                    result = %calculation.result_text,
                    history_len = self.history.len(),
                    "calculation succeeded"
                );
                Ok(calculation)
            }
            Err(err) => {
                self.readout = Readout::Error;
                tracing::debug!(input = raw, error = %err, "calculation failed");
                Err(err)
            }
        }
    }

    /// Submit whatever is currently in the input.
    pub fn submit_input(&mut self) -> Result<Calculation, CalculationError> {
        let raw = self.input.clone();
        self.submit(&raw)
    }

    // ── Input editing ─────────────────────────────────────────────────────

    /// The editable input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append text, as a keypad button press does.
    pub fn append(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// Remove the last character of the input.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Clear the input and the readout; history is kept.
    pub fn clear_entry(&mut self) {
        self.input.clear();
        self.readout = Readout::Empty;
    }

    // ── Readout & history ─────────────────────────────────────────────────

    /// What the result area shows.
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// History, most recent first.
    pub fn entries(&self) -> &[CalculationRecord] {
        self.history.entries()
    }

    /// Empty the history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Put the input of history record `index` back into the input.
    ///
    /// Returns the restored text, or `None` if there is no such record.
    pub fn recall(&mut self, index: usize) -> Option<&str> {
        let record = self.history.get(index)?;
        self.input = self.history.restore(record).to_string();
        Some(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_serialization() {
        assert_eq!(
            serde_json::to_string(&Readout::Empty).unwrap(),
            r#"{"kind":"empty"}"#
        );
        assert_eq!(
            serde_json::to_string(&Readout::Value("4".into())).unwrap(),
            r#"{"kind":"value","text":"4"}"#
        );
    }

    #[test]
    fn test_with_config_applies_history_limit() {
        let config = SessionConfig {
            history_limit: Some(1),
            ..SessionConfig::default()
        };
        let mut session = Session::with_config(config);
        session.submit("1+1").unwrap();
        session.submit("2+2").unwrap();
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].input_expression(), "2+2");
    }
}
