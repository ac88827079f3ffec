#![allow(clippy::doc_markdown)] // The generated file mentions OPT_LEVEL without backticks

use std::sync::LazyLock;

include!(concat!(env!("OUT_DIR"), "/built.rs"));

/// Full version string reported at startup.
///
/// Combines the cargo package version with the git commit hash, plus a
/// `-dirty` suffix when the working tree had uncommitted changes at build
/// time. Falls back to the bare package version when git metadata was
/// unavailable.
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    let prefix = match GIT_COMMIT_HASH {
        Some(hash) => format!("{PKG_VERSION}-{hash}"),
        None => PKG_VERSION.to_string(),
    };
    let suffix = if GIT_DIRTY == Some(true) { "-dirty" } else { "" };
    format!("{prefix}{suffix}")
});
