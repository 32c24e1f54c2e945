// src/input/tokenize.rs

use std::fmt;

use crate::errors::TokenizeError;

/// One tokenized line of the command file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// 1-based line number in the command file.
    pub line: usize,
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split a raw line on runs of spaces.
    ///
    /// The first token is the program, the remaining tokens are passed as
    /// arguments verbatim. Only the space character separates tokens, so a
    /// tab stays inside its token. There is no quoting: `echo "a b"` yields
    /// the two arguments `"a` and `b"`.
    pub fn parse(line: usize, raw: &[u8]) -> Result<Self, TokenizeError> {
        let text = std::str::from_utf8(raw).map_err(|_| TokenizeError::NotUtf8)?;
        if text.trim().is_empty() {
            return Err(TokenizeError::Blank);
        }

        let mut tokens = text.split(' ').filter(|tok| !tok.is_empty()).map(|tok| {
            if tok.contains('\0') {
                Err(TokenizeError::InteriorNul(tok.replace('\0', "\\0")))
            } else {
                Ok(tok.to_string())
            }
        });

        let program = tokens.next().ok_or(TokenizeError::Blank)??;
        let args = tokens.collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            line,
            program,
            args,
        })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
