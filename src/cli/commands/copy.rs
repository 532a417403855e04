//! # Copy Command Module / 复制命令模块
//!
//! Implements `casework copy <CONFIG>`.

use std::path::Path;

use crate::infra::t;
use crate::reporting::console::{print_copy_outcome, print_error};
use crate::tools::copier::{self, CopyConfig};

/// Copies every file listed in the XML configuration at `config`.
///
/// A configuration that cannot be read or parsed is printed as an error;
/// per-entry failures are printed next to the other results.
pub fn execute(config: &Path) {
    let copy_config = match CopyConfig::load(config) {
        Ok(copy_config) => copy_config,
        Err(e) => {
            print_error(&e.context(t!("copy.config_failed", path = config.display()).to_string()));
            return;
        }
    };

    tracing::debug!(entries = copy_config.files.len(), config = %config.display(), "copying files");
    let outcomes = copier::copy_all(&copy_config, print_copy_outcome);
    let copied = outcomes.iter().filter(|outcome| outcome.is_copied()).count();
    tracing::info!(copied, total = outcomes.len(), "copy finished");
}
