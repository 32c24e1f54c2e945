#![allow(dead_code, unused_imports)]

pub use linerun_test_utils::fake_executor::{FakeExecutor, FakeOutcome};
pub use linerun_test_utils::{command_file, init_tracing, with_timeout};

use linerun::input::CommandSource;
use tokio::io::BufReader;

/// Command source over an in-memory buffer.
pub fn source_from(contents: &'static [u8]) -> CommandSource<BufReader<&'static [u8]>> {
    CommandSource::new(BufReader::new(contents))
}
