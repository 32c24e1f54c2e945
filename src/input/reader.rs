// src/input/reader.rs

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, trace};

use crate::errors::{Result, RunnerError};
use crate::input::tokenize::CommandLine;

/// Sequential source of commands, one per line.
///
/// Owns the underlying reader; for files the handle is closed when the
/// source is dropped, whichever way the batch ends.
#[derive(Debug)]
pub struct CommandSource<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl CommandSource<BufReader<File>> {
    /// Open `path` read-only.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .map_err(|source| RunnerError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "opened command file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin> CommandSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Read and tokenize the next line. `Ok(None)` at end of file.
    pub async fn next_command(&mut self) -> Result<Option<CommandLine>> {
        self.buf.clear();
        let line = self.line + 1;

        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|source| RunnerError::Read { line, source })?;

        if n == 0 {
            trace!(lines = self.line, "end of command file");
            return Ok(None);
        }
        self.line = line;

        let mut raw = self.buf.as_slice();
        if let Some(rest) = raw.strip_suffix(b"\n") {
            raw = rest;
        }
        if let Some(rest) = raw.strip_suffix(b"\r") {
            raw = rest;
        }

        let command = CommandLine::parse(line, raw)
            .map_err(|source| RunnerError::Tokenize { line, source })?;

        trace!(line, program = %command.program, args = ?command.args, "tokenized line");
        Ok(Some(command))
    }
}
