// tests/tokenize.rs

use proptest::prelude::*;

use linerun::errors::TokenizeError;
use linerun::input::CommandLine;

#[test]
fn splits_program_and_arguments() {
    let cmd = CommandLine::parse(3, b"ls -l /tmp").unwrap();
    assert_eq!(cmd.line, 3);
    assert_eq!(cmd.program, "ls");
    assert_eq!(cmd.args, vec!["-l", "/tmp"]);
}

#[test]
fn collapses_runs_of_spaces() {
    let cmd = CommandLine::parse(1, b"  echo   a  b  ").unwrap();
    assert_eq!(cmd.program, "echo");
    assert_eq!(cmd.args, vec!["a", "b"]);
}

#[test]
fn tabs_stay_inside_tokens() {
    let cmd = CommandLine::parse(1, b"sh -c exit\t3").unwrap();
    assert_eq!(cmd.args, vec!["-c", "exit\t3"]);
}

#[test]
fn program_without_arguments() {
    let cmd = CommandLine::parse(1, b"true").unwrap();
    assert_eq!(cmd.program, "true");
    assert!(cmd.args.is_empty());
}

#[test]
fn quotes_are_not_interpreted() {
    let cmd = CommandLine::parse(1, br#"echo "a b" $HOME | wc"#).unwrap();
    assert_eq!(cmd.args, vec!["\"a", "b\"", "$HOME", "|", "wc"]);
}

#[test]
fn blank_line_is_rejected() {
    assert_eq!(CommandLine::parse(1, b""), Err(TokenizeError::Blank));
    assert_eq!(CommandLine::parse(1, b"   \t "), Err(TokenizeError::Blank));
}

#[test]
fn invalid_utf8_is_rejected() {
    assert_eq!(
        CommandLine::parse(1, b"echo \xff\xfe"),
        Err(TokenizeError::NotUtf8)
    );
}

#[test]
fn interior_nul_is_rejected() {
    let err = CommandLine::parse(1, b"echo a\0b").unwrap_err();
    assert!(matches!(err, TokenizeError::InteriorNul(ref tok) if tok == "a\\0b"));
}

#[test]
fn display_joins_tokens_with_single_spaces() {
    let cmd = CommandLine::parse(1, b"printf   %s\\n  x").unwrap();
    assert_eq!(cmd.to_string(), "printf %s\\n x");
}

proptest! {
    #[test]
    fn tokens_match_non_empty_space_separated_words(
        words in proptest::collection::vec("[a-zA-Z0-9_./=-]{1,8}", 1..8),
        gaps in proptest::collection::vec(" {1,3}", 8),
    ) {
        let mut line = String::new();
        for (i, w) in words.iter().enumerate() {
            line.push_str(&gaps[i]);
            line.push_str(w);
        }

        let cmd = CommandLine::parse(1, line.as_bytes()).unwrap();
        prop_assert_eq!(&cmd.program, &words[0]);
        prop_assert_eq!(&cmd.args[..], &words[1..]);
        for arg in &cmd.args {
            prop_assert!(!arg.is_empty());
            prop_assert!(!arg.contains(char::is_whitespace));
        }
    }
}
