#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `moodlog` binary with a clean environment whose
/// data and export directories live under `root`. Weather is unconfigured.
pub fn base_moodlog_command(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodlog").expect("moodlog binary not built");
    configure_moodlog_command(&mut cmd, root);
    cmd
}

/// Applies the standard isolated environment to an existing `Command`.
pub fn configure_moodlog_command(cmd: &mut Command, root: &Path) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", root)
        .env("MOODLOG_DIR", root.join("data"))
        .env("MOODLOG_EXPORT_DIR", root)
        .current_dir(root);
}
