//! Calculator transformer: rewrites user notation into canonical form.
//!
//! ```text
//! "log(100) + 2^e"  →  "log10(100) + 2**E"
//! ```
//!
//! Rewriting happens on whole tokens only. The text between tokens
//! (whitespace, characters the lexer could not classify) is copied through
//! untouched so the evaluator sees, and reports on, exactly what the user
//! typed.

mod transform;

pub use transform::{transform, FUNCTION_ALIASES};
