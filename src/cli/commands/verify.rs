//! # Verify Command Module / 校验命令模块
//!
//! Implements `casework verify <CHECKSUM> [-d <CHECK_DIR>]`.

use std::path::Path;

use crate::infra::t;
use crate::reporting::console::{print_check_outcome, print_error};
use crate::tools::checksum::ChecksumList;

/// Checks every file listed in `checksum` against the files in `check_dir`,
/// printing one line per file as soon as it is known.
///
/// An unreadable or malformed list is printed as an error and nothing is checked.
/// An unknown algorithm, or a file that exists but cannot be read, stops the
/// run with a printed error after the earlier results.
pub fn execute(checksum: &Path, check_dir: &Path) {
    let list = match ChecksumList::load(checksum) {
        Ok(list) => list,
        Err(e) => {
            print_error(&e.context(t!("verify.manifest_failed", path = checksum.display()).to_string()));
            return;
        }
    };

    tracing::debug!(entries = list.entries.len(), dir = %check_dir.display(), "verifying checksums");
    for entry in &list.entries {
        match entry.check(check_dir) {
            Ok(outcome) => print_check_outcome(&outcome),
            Err(e) => {
                print_error(&e.context(t!("verify.check_failed", name = &entry.file_name).to_string()));
                return;
            }
        }
    }
}
