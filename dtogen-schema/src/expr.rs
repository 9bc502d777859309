//! Directive argument expressions.
//!
//! Both hosts share one conversion from a Rust expression to [`ArgExpr`]:
//! the attribute macro hands over the `syn::Expr` it parsed, and the XML
//! schema parser parses argument bodies such as `["Address", "Order"]` with
//! `syn` first. Only array literals and string literals are recognised; any
//! other expression is kept as [`ArgExpr::Other`] so the extractor can reject
//! it.

use crate::declaration::ArgExpr;
use quote::ToTokens;
use syn::{Expr, Lit};

/// Parses directive argument text into an expression.
///
/// Text that is not a Rust expression, or whose top level is neither an
/// array nor a string literal, is kept verbatim (trimmed).
#[must_use]
pub fn parse_argument(text: &str) -> ArgExpr {
    let trimmed = text.trim();
    match syn::parse_str::<Expr>(trimmed).map(|expr| arg_expr(&expr)) {
        Ok(value @ (ArgExpr::Array(_) | ArgExpr::Str(_))) => value,
        _ => ArgExpr::Other(trimmed.to_string()),
    }
}

/// Converts a parsed expression, keeping unsupported forms as source text.
#[must_use]
pub fn arg_expr(expr: &Expr) -> ArgExpr {
    match expr {
        Expr::Array(array) => ArgExpr::Array(array.elems.iter().map(arg_expr).collect()),
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => ArgExpr::Str(s.value()),
            _ => ArgExpr::Other(expr.to_token_stream().to_string()),
        },
        Expr::Group(inner) => arg_expr(&inner.expr),
        _ => ArgExpr::Other(expr.to_token_stream().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(values: &[&str]) -> ArgExpr {
        ArgExpr::Array(values.iter().map(|v| ArgExpr::Str(v.to_string())).collect())
    }

    #[test]
    fn test_parse_string_array() {
        assert_eq!(
            parse_argument(r#"["Address", "Order"]"#),
            strs(&["Address", "Order"])
        );
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_argument("[]"), ArgExpr::Array(Vec::new()));
        assert_eq!(parse_argument("  [ ]  "), ArgExpr::Array(Vec::new()));
    }

    #[test]
    fn test_parse_trailing_comma() {
        assert_eq!(parse_argument(r#"["TypeA", "TypeB",]"#), strs(&["TypeA", "TypeB"]));
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(
            parse_argument(r#""a\"b\\c""#),
            ArgExpr::Str(r#"a"b\c"#.to_string())
        );
    }

    #[test]
    fn test_parse_raw_and_unicode_literals() {
        assert_eq!(parse_argument(r#"[r"Address"]"#), strs(&["Address"]));
        assert_eq!(parse_argument(r#"["Addr\u{65}ss"]"#), strs(&["Address"]));
        assert_eq!(parse_argument(r##"[r#"Order"#]"##), strs(&["Order"]));
    }

    #[test]
    fn test_parse_computed_expression() {
        assert_eq!(
            parse_argument("nestedNames()"),
            ArgExpr::Other("nestedNames()".to_string())
        );
    }

    #[test]
    fn test_parse_array_with_computed_element() {
        let ArgExpr::Array(elements) = parse_argument(r#"["Address", names[0]]"#) else {
            panic!("expected array");
        };
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0], ArgExpr::Str("Address".to_string()));
        assert!(matches!(elements[1], ArgExpr::Other(_)));
    }

    #[test]
    fn test_parse_unterminated() {
        assert_eq!(
            parse_argument(r#"["Address""#),
            ArgExpr::Other(r#"["Address""#.to_string())
        );
        assert_eq!(
            parse_argument(r#""open"#),
            ArgExpr::Other(r#""open"#.to_string())
        );
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert_eq!(
            parse_argument(r#"["Address"] + more"#),
            ArgExpr::Other(r#"["Address"] + more"#.to_string())
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(parse_argument("   "), ArgExpr::Other(String::new()));
    }

    #[test]
    fn test_arg_expr_keeps_other_text() {
        let expr: Expr = syn::parse_quote!(names());
        assert!(matches!(arg_expr(&expr), ArgExpr::Other(_)));

        let expr: Expr = syn::parse_quote!(["A", 1]);
        let ArgExpr::Array(elements) = arg_expr(&expr) else {
            panic!("expected array");
        };
        assert_eq!(elements[0], ArgExpr::Str("A".to_string()));
        assert_eq!(elements[1], ArgExpr::Other("1".to_string()));
    }
}
