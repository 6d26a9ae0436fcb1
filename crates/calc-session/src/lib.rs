//! Calculator session: orchestrates the full calculation pipeline.
//!
//! ```text
//! raw input → Transformer → canonical text → Evaluator → f64 → result text → HistoryLog
//! ```
//!
//! [`Session`] owns the explicit application state (input text, readout,
//! history). Display layers call its operations and render what it exposes;
//! nothing here knows about buttons, focus or styling.

pub mod config;
pub mod error;
pub mod history;
pub mod pipeline;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use error::CalculationError;
pub use history::{CalculationRecord, HistoryLog};
pub use pipeline::{calculate, Calculation};
pub use session::{Readout, Session};
