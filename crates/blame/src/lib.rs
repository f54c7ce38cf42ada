//! Per-line authorship via `git blame`.
//!
//! One invocation per file, synchronous wait, no retries: the tool either
//! gets a complete authorship table or the whole run aborts. The consistency
//! check against the physical line count lives here too, since the blame
//! stream and the raw file are read by independent code paths.

mod authorship;
mod error;
mod porcelain;

pub use authorship::AuthorshipTable;
pub use error::{BlameError, Result};

use std::path::Path;
use std::process::Command;

/// Resolve the author email of every line of `path`.
///
/// Runs `git blame -C --line-porcelain` with the file's directory as the
/// working directory, so the scan root does not need to be the repository
/// root. The file must be tracked; untracked or unreadable history surfaces
/// as [`BlameError::HistoryUnavailable`].
pub fn line_authors(path: &Path) -> Result<AuthorshipTable> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = path
        .file_name()
        .ok_or_else(|| BlameError::unavailable(format!("not a file path: {}", path.display())))?;

    let mut cmd = Command::new("git");
    cmd.arg("blame").arg("-C").arg("--line-porcelain").arg(file_name);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    log::debug!("Blaming {}", path.display());
    let output = cmd
        .output()
        .map_err(|e| BlameError::unavailable(format!("could not invoke git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BlameError::unavailable(format!(
            "git blame failed for {}: {}",
            path.display(),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let authors = porcelain::parse_line_authors(&stdout)?;
    log::debug!("Attributed {} lines in {}", authors.len(), path.display());
    Ok(AuthorshipTable::new(authors))
}
