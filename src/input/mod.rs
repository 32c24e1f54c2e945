// src/input/mod.rs

//! Reading the command file.
//!
//! - [`reader`] owns the open file and yields one [`CommandLine`] per line.
//! - [`tokenize`] turns a raw line into a program name plus arguments.

pub mod reader;
pub mod tokenize;

pub use reader::CommandSource;
pub use tokenize::CommandLine;
