// tests/reader.rs

mod common;
use crate::common::{command_file, init_tracing, source_from};

use std::error::Error;

use linerun::errors::{RunnerError, TokenizeError};
use linerun::input::CommandSource;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn yields_commands_in_file_order_with_line_numbers() -> TestResult {
    init_tracing();

    let mut source = source_from(b"echo one\nls -a\ntrue\n");

    let first = source.next_command().await?.unwrap();
    assert_eq!((first.line, first.program.as_str()), (1, "echo"));
    assert_eq!(first.args, vec!["one"]);

    let second = source.next_command().await?.unwrap();
    assert_eq!((second.line, second.program.as_str()), (2, "ls"));

    let third = source.next_command().await?.unwrap();
    assert_eq!((third.line, third.program.as_str()), (3, "true"));

    assert!(source.next_command().await?.is_none());
    assert_eq!(source.lines_read(), 3);
    Ok(())
}

#[tokio::test]
async fn last_line_without_newline_is_read() -> TestResult {
    let mut source = source_from(b"true\necho last");

    source.next_command().await?.unwrap();
    let last = source.next_command().await?.unwrap();
    assert_eq!(last.program, "echo");
    assert_eq!(last.args, vec!["last"]);
    assert!(source.next_command().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn crlf_line_endings_are_stripped() -> TestResult {
    let mut source = source_from(b"echo a\r\necho b\r\n");

    let a = source.next_command().await?.unwrap();
    assert_eq!(a.args, vec!["a"]);
    let b = source.next_command().await?.unwrap();
    assert_eq!(b.args, vec!["b"]);
    Ok(())
}

#[tokio::test]
async fn empty_input_yields_nothing() -> TestResult {
    let mut source = source_from(b"");
    assert!(source.next_command().await?.is_none());
    assert_eq!(source.lines_read(), 0);
    Ok(())
}

#[tokio::test]
async fn blank_line_in_the_middle_is_a_tokenize_error() -> TestResult {
    let mut source = source_from(b"true\n\nfalse\n");

    source.next_command().await?.unwrap();
    match source.next_command().await {
        Err(RunnerError::Tokenize { line, source }) => {
            assert_eq!(line, 2);
            assert_eq!(source, TokenizeError::Blank);
        }
        other => panic!("expected tokenize error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn open_reads_from_disk() -> TestResult {
    let file = command_file("echo from-disk\n")?;
    let mut source = CommandSource::open(file.path()).await?;

    let cmd = source.next_command().await?.unwrap();
    assert_eq!(cmd.args, vec!["from-disk"]);
    Ok(())
}

#[tokio::test]
async fn open_missing_file_is_open_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("does-not-exist.txt");

    match CommandSource::open(&missing).await {
        Err(err @ RunnerError::OpenFile { .. }) => {
            assert_eq!(err.exit_code(), 1);
            assert!(err.to_string().contains("does-not-exist.txt"));
        }
        other => panic!("expected open error, got {other:?}"),
    }
    Ok(())
}
