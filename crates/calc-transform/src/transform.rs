use calc_lexer::{Lexer, Token, TokenKind};
use calc_types::ast::{Constant, Function};
use calc_types::{SourceText, Span};

/// User-facing function names and the canonical function each one denotes.
///
/// A name is only rewritten when the next token is `(`.
pub const FUNCTION_ALIASES: &[(&str, Function)] = &[
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("log", Function::Log10),
    ("ln", Function::Ln),
    ("sqrt", Function::Sqrt),
];

/// Rewrite `expr` into the canonical form the evaluator parses.
///
/// Total: malformed input is passed through with only its recognisable
/// tokens rewritten, and the evaluator reports the problem later.
pub fn transform(expr: &str) -> String {
    let source = SourceText::new(expr);
    let tokens = Lexer::new(&source).lex().tokens;
    let mut out = String::with_capacity(expr.len() + 8);
    let mut cursor = 0u32;

    for (i, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Eof {
            break;
        }
        let gap = Span::new(cursor, token.span.start);
        out.push_str(source.slice(gap).unwrap_or_default());
        let lexeme = source.slice(token.span).unwrap_or_default();
        out.push_str(rewrite(token, lexeme, tokens.get(i + 1)));
        cursor = token.span.end;
    }
    out.push_str(expr.get(cursor as usize..).unwrap_or_default());

    tracing::trace!(input = expr, canonical = %out, "transformed expression");
    out
}

fn rewrite<'a>(token: &Token, lexeme: &'a str, next: Option<&Token>) -> &'a str {
    match &token.kind {
        TokenKind::Identifier(name) => {
            let called = next.is_some_and(|t| t.kind == TokenKind::LParen);
            if called {
                if let Some((_, function)) =
                    FUNCTION_ALIASES.iter().find(|(alias, _)| *alias == name.as_str())
                {
                    return function.name();
                }
            }
            match name.as_str() {
                "pi" => Constant::Pi.name(),
                "e" => Constant::E.name(),
                _ => lexeme,
            }
        }
        TokenKind::Caret => "**",
        TokenKind::PiSymbol => Constant::Pi.name(),
        _ => lexeme,
    }
}
