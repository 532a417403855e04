//! # Cases Command Module / 用例命令模块
//!
//! Implements `casework cases`: builds the two reference test cases and runs
//! them one after another. Every step is reported through the log sink.

use std::path::PathBuf;
use std::sync::Arc;

use crate::engine::cases::{ListFiles, RandomFile};
use crate::engine::lifecycle::TestCase;
use crate::engine::sink::{LogSink, TracingSink};

/// Runs the listing case and then the random-file case, writing the random
/// file to `scratch`.
///
/// Each case is executed to completion before the next one is built; a fault
/// in one case never prevents the next from running.
pub fn execute(scratch: PathBuf) {
    let sink: Arc<dyn LogSink> = Arc::new(TracingSink::new());

    let mut files_list = TestCase::new(1, "files_list", ListFiles::new(), Arc::clone(&sink));
    files_list.execute();

    let mut random_file = TestCase::new(2, "random_file", RandomFile::new().at(scratch), sink);
    random_file.execute();
}
