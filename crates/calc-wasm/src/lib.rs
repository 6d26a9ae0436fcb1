//! Calculator session as a WASM module for browser front ends.
//!
//! The display layer owns one [`Calculator`] and feeds it the text in its
//! input box. Every method returns plain strings (JSON where structured), so
//! the JavaScript side needs nothing beyond `JSON.parse`.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { Calculator } from 'calc-wasm';
//!
//! await init();
//!
//! const calc = new Calculator();
//! JSON.parse(calc.submit("sqrt(16)"));
//! // { ok: true, resultText: "4" }
//! JSON.parse(calc.entries());
//! // [{ inputExpression: "sqrt(16)", resultText: "4", repeatCount: 1 }]
//! ```

use calc_session::{CalculationError, Session, SessionConfig};
use calc_types::Diagnostics;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Outcome of [`Calculator::submit`], serialized for the front end.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<Diagnostics>,
}

impl SubmitResponse {
    fn from_outcome(outcome: Result<String, CalculationError>) -> Self {
        match outcome {
            Ok(result_text) => Self {
                ok: true,
                result_text: Some(result_text),
                error: None,
                message: None,
                diagnostics: None,
            },
            Err(err) => Self {
                ok: false,
                result_text: None,
                error: Some(err.kind()),
                message: Some(err.to_string()),
                diagnostics: match &err {
                    CalculationError::EmptyInput => None,
                    CalculationError::InvalidExpression(e) => Some(e.diagnostics()),
                },
            },
        }
    }
}

/// A calculator session exported to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct Calculator {
    session: Session,
}

#[wasm_bindgen]
impl Calculator {
    /// Create a calculator with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Calculator {
        Calculator::default()
    }

    /// Create a calculator from a JSON configuration such as
    /// `{"maxDepth": 32, "historyLimit": 100}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<Calculator, JsError> {
        let config = SessionConfig::from_json(config_json)?;
        Ok(Calculator {
            session: Session::with_config(config),
        })
    }

    /// Evaluate `expr` and record it on success.
    ///
    /// Returns `{"ok":true,"resultText":"4"}`, or on failure
    /// `{"ok":false,"error":"invalid_expression","message":...,"diagnostics":...}`.
    /// Blank input yields `"error":"empty_input"` and changes nothing.
    pub fn submit(&mut self, expr: &str) -> String {
        let outcome = self.session.submit(expr).map(|calc| calc.result_text);
        to_json(&SubmitResponse::from_outcome(outcome))
    }

    /// History as a JSON array, most recent first.
    pub fn entries(&self) -> String {
        to_json(self.session.entries())
    }

    /// Empty the history.
    pub fn clear(&mut self) {
        self.session.clear_history();
    }

    /// Input text of history record `index`, or `""` if there is none.
    pub fn restore(&mut self, index: usize) -> String {
        self.session
            .recall(index)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// What the result area shows, as `{"kind":"value","text":"4"}`,
    /// `{"kind":"error"}` or `{"kind":"empty"}`.
    pub fn readout(&self) -> String {
        to_json(self.session.readout())
    }
}

/// Return the calculator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(
            r#"{{"ok":false,"error":"serialization","message":"{}"}}"#,
            e.to_string().replace('"', "'")
        )
    })
}
