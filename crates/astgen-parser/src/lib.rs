pub mod parser;

pub use parser::Parser;

use std::collections::HashMap;

use astgen_lexer::Lexer;
use astgen_syntax::error::{error, error_at, ErrorKind, Result};
use astgen_syntax::schema::{is_identifier, NodeSpec, UnionSchema};

/// Parses a single node specification such as `"Binary | Expr, Token, Expr"`.
///
/// `line` is only used to locate errors.
pub fn parse_spec(line: usize, text: &str) -> Result<NodeSpec> {
    let tokens = Lexer::new(line, text).tokenize()?;
    Parser::new(text, tokens).parse_spec()
}

/// Parses an in-memory list of node specifications into a schema.
///
/// Errors are located by the 1-based index of the offending entry.
pub fn parse_schema<S: AsRef<str>>(base_name: &str, specs: &[S]) -> Result<UnionSchema> {
    let lines = specs.iter().enumerate().map(|(i, s)| (i + 1, s.as_ref()));
    build_schema(base_name, lines)
}

/// Parses a schema file: one node specification per line.
///
/// Blank lines and lines starting with `#` are skipped. Errors carry the
/// physical line number within `source`.
pub fn parse_schema_source(base_name: &str, source: &str) -> Result<UnionSchema> {
    let lines = source
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| {
            let t = l.trim_start();
            !t.is_empty() && !t.starts_with('#')
        });
    build_schema(base_name, lines)
}

fn build_schema<'a>(base_name: &str, lines: impl Iterator<Item = (usize, &'a str)>) -> Result<UnionSchema> {
    if !is_identifier(base_name) {
        return error(
            ErrorKind::InvalidName,
            format!("Base type name '{}' is not an identifier", base_name),
        );
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut variants = Vec::new();
    for (line, text) in lines {
        let spec = parse_spec(line, text)?;
        if let Some(first) = seen.get(&spec.variant_name) {
            let col = text.find(spec.variant_name.as_str()).map(|i| text[..i].chars().count() + 1).unwrap_or(1);
            return error_at(
                ErrorKind::DuplicateVariant,
                line,
                col,
                format!("Duplicate variant '{}' (first declared on line {})", spec.variant_name, first),
            );
        }
        tracing::trace!(line, variant = %spec.variant_name, fields = spec.fields.len(), "parsed node spec");
        seen.insert(spec.variant_name.clone(), line);
        variants.push(spec);
    }

    if variants.is_empty() {
        return error(
            ErrorKind::EmptyVariantList,
            format!("Schema for '{}' declares no variants", base_name),
        );
    }

    tracing::debug!(base = base_name, variants = variants.len(), "parsed schema");
    Ok(UnionSchema::new(base_name, variants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_syntax::bootstrap::{EXPR_BASE, EXPR_SPECS};

    fn spec(text: &str) -> NodeSpec {
        parse_spec(1, text).expect("Parsing should succeed")
    }

    fn spec_err(text: &str) -> astgen_syntax::Error {
        parse_spec(1, text).expect_err("Parsing should fail")
    }

    #[test]
    fn test_simple_spec() {
        let s = spec("Binary | Expr, Token, Expr");
        assert_eq!(s.variant_name, "Binary");
        assert_eq!(s.fields, vec!["Expr", "Token", "Expr"]);
    }

    #[test]
    fn test_generic_fields_are_verbatim() {
        let s = spec("MsgEmission | Option<Box<Expr>>, Token, Option<Box<Expr>>");
        assert_eq!(s.fields, vec!["Option<Box<Expr>>", "Token", "Option<Box<Expr>>"]);

        let s = spec("  Table |  HashMap<String, Expr> ,Vec<(u8, Expr)>  ");
        assert_eq!(s.variant_name, "Table");
        assert_eq!(s.fields, vec!["HashMap<String, Expr>", "Vec<(u8, Expr)>"]);
    }

    #[test]
    fn test_reference_and_array_fields() {
        let s = spec("Raw | &'static str, [u8; 4]");
        assert_eq!(s.fields, vec!["&'static str", "[u8; 4]"]);
    }

    #[test]
    fn test_matches_comma_space_splitting() {
        // well-formed lines split exactly like `name | a, b, c`
        for line in EXPR_SPECS {
            let (name, rest) = line.split_once('|').unwrap();
            let expected: Vec<&str> = rest.trim().split(", ").collect();
            let s = spec(line);
            assert_eq!(s.variant_name, name.trim());
            assert_eq!(s.fields, expected);
        }
    }

    #[test]
    fn test_function_type_fields() {
        let s = spec("Call | fn(Expr) -> Expr");
        assert_eq!(s.fields, vec!["fn(Expr) -> Expr"]);

        let s = spec("Cb | Box<dyn Fn(Expr) -> Expr>, Token");
        assert_eq!(s.fields, vec!["Box<dyn Fn(Expr) -> Expr>", "Token"]);

        // same split as the comma-space convention
        let line = "Hook | Expr, Box<dyn Fn(Expr) -> Expr>";
        let (_, rest) = line.split_once('|').unwrap();
        let expected: Vec<&str> = rest.trim().split(", ").collect();
        assert_eq!(spec(line).fields, expected);
    }

    #[test]
    fn test_unicode_names() {
        let s = spec("Café | Größe, Expr");
        assert_eq!(s.variant_name, "Café");
        assert_eq!(s.fields, vec!["Größe", "Expr"]);

        let schema = parse_schema("Ausdruck", &["Café | Ausdruck"]).unwrap();
        assert_eq!(schema.variants[0].variant_name, "Café");
    }

    #[test]
    fn test_missing_delimiter() {
        let err = spec_err("Binary Expr, Token");
        assert_eq!(err.kind, ErrorKind::MissingDelimiter);
        assert_eq!(err.col, Some(8));
        assert!(err.msg.contains("single identifier"));

        let err = spec_err("Binary");
        assert_eq!(err.kind, ErrorKind::MissingDelimiter);
        assert_eq!(err.col, Some(7));

        let err = spec_err("Binary, Expr");
        assert_eq!(err.kind, ErrorKind::MissingDelimiter);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(spec_err("Binary |").kind, ErrorKind::EmptyField);
        assert_eq!(spec_err("Binary |   ").kind, ErrorKind::EmptyField);
        assert_eq!(spec_err("Binary | Expr, , Expr").kind, ErrorKind::EmptyField);
        let err = spec_err("Binary | Expr,");
        assert_eq!(err.kind, ErrorKind::EmptyField);
        assert_eq!(err.col, Some(15));
    }

    #[test]
    fn test_unbalanced_brackets() {
        let err = spec_err("Object | Vec<Expr");
        assert_eq!(err.kind, ErrorKind::Unbalanced);
        assert_eq!(err.col, Some(13));

        assert_eq!(spec_err("Object | Vec<Expr>>").kind, ErrorKind::Unbalanced);
        assert_eq!(spec_err("Object | Vec<Expr)").kind, ErrorKind::Unbalanced);
    }

    #[test]
    fn test_stray_tokens() {
        assert_eq!(spec_err("").kind, ErrorKind::UnexpectedToken);
        assert_eq!(spec_err("A | B | C").kind, ErrorKind::UnexpectedToken);
        assert_eq!(spec_err("<A> | B").kind, ErrorKind::InvalidName);
    }

    #[test]
    fn test_bootstrap_schema() {
        let schema = parse_schema(EXPR_BASE, EXPR_SPECS).expect("bootstrap schema parses");
        assert_eq!(schema.base_name, "Expr");
        let names: Vec<&str> = schema.variants.iter().map(|v| v.variant_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Binary", "MsgEmission", "BinaryOpt", "Asm", "Object", "Fn", "CodeBlock", "Type", "Literal"]
        );
    }

    #[test]
    fn test_schema_errors_are_located() {
        let err = parse_schema("Expr", &["Binary | Expr", "Broken"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingDelimiter);
        assert_eq!(err.line, Some(2));

        let err = parse_schema("Expr", &["A | Expr", "B | Token", "A | Token"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateVariant);
        assert_eq!((err.line, err.col), (Some(3), Some(1)));

        let empty: [&str; 0] = [];
        let err = parse_schema("Expr", &empty).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyVariantList);

        let err = parse_schema("Vec<Expr>", &["A | B"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidName);
    }

    #[test]
    fn test_schema_source() {
        let src = "# statements\n\nLet | Token, Expr\n   # indented comment\nBlock | Vec<Stmt>\n";
        let schema = parse_schema_source("Stmt", src).unwrap();
        assert_eq!(schema.variants.len(), 2);
        assert_eq!(schema.variants[1].fields, vec!["Vec<Stmt>"]);

        let err = parse_schema_source("Stmt", "# header\n\nLet Token\n").unwrap_err();
        assert_eq!(err.line, Some(3));

        let err = parse_schema_source("Stmt", "# only comments\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyVariantList);
    }
}
