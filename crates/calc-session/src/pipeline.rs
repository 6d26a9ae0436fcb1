//! Stateless transform → evaluate → format pipeline.

use serde::Serialize;

use calc_eval::{evaluate_with_depth, format_number};
use calc_transform::transform;
use calc_types::SourceText;

use crate::config::SessionConfig;
use crate::error::CalculationError;

/// A successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    /// The raw input, exactly as submitted.
    pub input: String,
    /// The input after transformation.
    pub canonical: String,
    /// The finite numeric result.
    pub value: f64,
    /// `value` formatted for display and history.
    pub result_text: String,
}

/// Run the full pipeline on `raw` without touching any session state.
#[tracing::instrument(level = "debug", skip(config), err(level = "debug"))]
pub fn calculate(raw: &str, config: &SessionConfig) -> Result<Calculation, CalculationError> {
    if SourceText::new(raw).is_blank() {
        return Err(CalculationError::EmptyInput);
    }

    let canonical = transform(raw);
    let value = evaluate_with_depth(&canonical, config.max_depth)?;

    Ok(Calculation {
        input: raw.to_string(),
        canonical,
        value,
        result_text: format_number(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_fields() {
        let calc = calculate("sqrt(16) + e^0", &SessionConfig::default()).unwrap();
        assert_eq!(calc.input, "sqrt(16) + e^0");
        assert_eq!(calc.canonical, "sqrt(16) + E**0");
        assert_eq!(calc.value, 5.0);
        assert_eq!(calc.result_text, "5");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(
            calculate(" \t", &SessionConfig::default()),
            Err(CalculationError::EmptyInput)
        );
    }
}
