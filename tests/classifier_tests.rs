//! Integration tests for argument vector classification
//!
//! Exercises the public API the way a host program would: build an argument
//! vector, classify it, and inspect the three groups.

use argscope::parse::{ArrayKind, GrowthPolicy, ParseConfig, Severity};
use argscope::{Outcome, ParseError, Parser, parse};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_positional_only_sequences_keep_order() {
    let cases: &[&[&str]] = &[
        &["exec", "a"],
        &["exec", "a", "b"],
        &["exec", "z", "y", "x", "w", "v", "u", "t"],
    ];
    for case in cases {
        let owned = argv(case);
        let cli = parse(&owned).unwrap();

        assert_eq!(cli.args.as_slice(), &case[1..]);
        assert!(cli.cmd_options.is_empty());
        assert!(cli.program_options.is_empty());
    }
}

#[test]
fn test_program_then_command_options() {
    let owned = argv(&["exec", "-a", "--", "-b"]);
    let cli = parse(&owned).unwrap();

    assert_eq!(cli.program_options.as_slice(), &["-a"]);
    assert_eq!(cli.cmd_options.as_slice(), &["-b"]);
    assert!(cli.args.is_empty());
}

#[test]
fn test_separator_after_positional_fails_regardless_of_tail() {
    let tails: &[&[&str]] = &[&[], &["-x"], &["more", "--", "-y"], &["--"]];
    for tail in tails {
        let mut tokens = vec!["exec", "pos1", "--"];
        tokens.extend_from_slice(tail);
        let owned = argv(&tokens);

        let err = parse(&owned).unwrap_err();
        assert_eq!(err.severity(), Severity::User);
        assert_eq!(err.outcome(), Outcome::User);
        assert!(matches!(err, ParseError::SeparatorAfterPositional { .. }));
    }
}

#[test]
fn test_bare_invocation_is_detectable() {
    let owned = argv(&["exec"]);
    let cli = parse(&owned).unwrap();

    assert_eq!(cli.execfile, "exec");
    assert!(cli.is_bare());
    assert!(!cli.args.is_allocated());
    assert!(!cli.cmd_options.is_allocated());
    assert!(!cli.program_options.is_allocated());
}

#[test]
fn test_relative_order_within_each_group() {
    let owned = argv(&["exec", "-p1", "arg1", "-p2", "arg2", "--p3", "arg3"]);
    let cli = parse(&owned).unwrap();

    assert_eq!(cli.args.as_slice(), &["arg1", "arg2", "arg3"]);
    assert_eq!(cli.program_options.as_slice(), &["-p1", "-p2", "--p3"]);

    let owned = argv(&["exec", "--", "-c1", "arg1", "-c2", "arg2"]);
    let cli = parse(&owned).unwrap();

    assert_eq!(cli.args.as_slice(), &["arg1", "arg2"]);
    assert_eq!(cli.cmd_options.as_slice(), &["-c1", "-c2"]);
}

#[test]
fn test_every_token_lands_in_exactly_one_group() {
    let owned = argv(&["exec", "-a", "x", "--b", "--", "-c", "y", "-d"]);
    let err = parse(&owned).unwrap_err();
    // "--" follows the positional "x"
    assert!(err.to_string().contains("('x')"));

    let owned = argv(&["exec", "-a", "--b", "--", "-c", "y", "-d", "z"]);
    let cli = parse(&owned).unwrap();
    // separator consumed, everything else counted once
    assert_eq!(cli.token_count(), owned.len() - 2);
}

#[test]
fn test_fixed_capacity_boundary() {
    let capacity = 4;
    let parser = Parser::new(ParseConfig {
        default_capacity: capacity,
        growth: GrowthPolicy::Fixed,
    });

    let mut tokens = vec!["exec".to_string()];
    tokens.extend((0..capacity).map(|i| format!("arg{i}")));
    let filled = {
        let cli = parser.parse(&tokens).unwrap();
        assert_eq!(cli.args.len(), capacity);
        cli.args.capacity()
    };

    tokens.push("overflow".to_string());
    let err = parser.parse(&tokens).unwrap_err();
    assert_eq!(
        err,
        ParseError::CapacityExceeded {
            array: ArrayKind::Args,
            capacity: filled,
        }
    );
    assert_eq!(err.outcome(), Outcome::Fatal);
}

#[test]
fn test_default_policy_never_overflows() {
    let mut tokens = vec!["exec".to_string()];
    tokens.extend((0..1000).map(|i| format!("-o{i}")));

    let cli = parse(&tokens).unwrap();
    assert_eq!(cli.program_options.len(), 1000);
    assert_eq!(cli.program_options.last(), Some("-o999"));
}

#[test]
fn test_tokens_borrow_from_argument_vector() {
    let owned = argv(&["exec", "-v", "file"]);
    let cli = parse(&owned).unwrap();

    assert!(std::ptr::eq(cli.execfile, owned[0].as_str()));
    assert!(std::ptr::eq(cli.program_options.as_slice()[0], owned[1].as_str()));
}
