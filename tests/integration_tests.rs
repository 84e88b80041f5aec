//! Integration tests for the Rill frontend pipeline

use std::fs;
use std::path::Path;

use rill::events::{EchoEvents, SilentEvents, TreeBuilder};
use rill::tokens::TokenKind;
use rill::{lexer, parser};

/// Helper to run the full pipeline on a source file
fn analyse_file(path: &Path) -> Result<(), Vec<String>> {
    let source = fs::read_to_string(path).map_err(|e| vec![e.to_string()])?;

    let tokens = lexer::lex(&source)
        .map_err(|errs| errs.iter().map(|e| e.to_string()).collect::<Vec<_>>())?;

    parser::parse(&tokens, &mut SilentEvents).map_err(|e| vec![e.to_string()])?;

    Ok(())
}

/// Test that all valid fixtures parse successfully
#[test]
fn test_valid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/valid");

    let mut seen = 0;
    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "rill").unwrap_or(false) {
            seen += 1;
            let result = analyse_file(&path);
            assert!(
                result.is_ok(),
                "Expected {} to parse successfully, got errors: {:?}",
                path.display(),
                result.unwrap_err()
            );
        }
    }
    assert!(seen > 0, "No valid fixtures found");
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/invalid");

    let mut seen = 0;
    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "rill").unwrap_or(false) {
            seen += 1;
            assert!(
                analyse_file(&path).is_err(),
                "Expected {} to fail",
                path.display()
            );
        }
    }
    assert!(seen > 0, "No invalid fixtures found");
}

/// The truncated fixture must fail at end of input, not at a real token.
#[test]
fn truncated_program_fails_at_end_of_input() {
    let source = fs::read_to_string("tests/fixtures/invalid/truncated.rill").unwrap();
    let tokens = lexer::lex(&source).unwrap();

    let err = parser::parse(&tokens, &mut SilentEvents).unwrap_err();
    let found = err.offending_token().expect("syntax error");
    assert_eq!(found.kind, TokenKind::Eof);
    assert!(err.root_cause().to_string().contains("end of input"));
}

/// The offending line number in a multi-line program points at the right line.
#[test]
fn error_line_numbers_follow_the_source() {
    let source = "begin\n  x := 1;\n  y := ;\n  z := 3\nend\n";
    let tokens = lexer::lex(source).unwrap();

    let err = parser::parse(&tokens, &mut SilentEvents).unwrap_err();
    let found = err.offending_token().expect("syntax error");
    assert_eq!(found.kind, TokenKind::Semicolon);
    assert_eq!(found.line, 3);
}

/// The echo and tree sinks both observe the same derivation.
#[test]
fn echo_and_tree_sinks_agree_on_terminal_count() {
    let source = fs::read_to_string("tests/fixtures/valid/control_flow.rill").unwrap();
    let tokens = lexer::lex(&source).unwrap();

    let mut echo = EchoEvents::new(Vec::new());
    parser::parse(&tokens, &mut echo).unwrap();
    let trace = String::from_utf8(echo.into_inner()).unwrap();

    let mut builder = TreeBuilder::new();
    parser::parse(&tokens, &mut builder).unwrap();
    let root = builder.finish().unwrap();

    // Every non-Eof token is a terminal line in the echo trace and a leaf in
    // the tree.
    let terminal_count = tokens.len() - 1;
    let echo_terminals = trace
        .lines()
        .filter(|l| {
            let l = l.trim_start();
            !l.starts_with('<') && !l.is_empty()
        })
        .count();
    assert_eq!(echo_terminals, terminal_count);
    assert_eq!(count_leaves(&root), terminal_count);
}

fn count_leaves(node: &rill::events::ParseNode) -> usize {
    match node {
        rill::events::ParseNode::Terminal(_) => 1,
        rill::events::ParseNode::Rule { children, .. } => children.iter().map(count_leaves).sum(),
    }
}
