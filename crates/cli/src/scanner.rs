use collate_segmenter::Language;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Find the files under `root` that take part in attribution, in path order.
///
/// Hidden files and gitignored files are skipped; blamed files must be
/// tracked anyway, so an ignored file could only fail the run. Files whose
/// kind is not attributable are skipped silently.
pub fn attributable_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .sort_by_file_path(|a, b| a.cmp(b));

    for result in builder.build() {
        match result {
            Ok(entry) => {
                let Some(file_type) = entry.file_type() else {
                    continue;
                };
                if !file_type.is_file() {
                    continue;
                }

                let path = entry.path();
                if !Language::from_path(path).is_attributable() {
                    log::debug!("Skipping {}", path.display());
                    continue;
                }

                files.push(path.to_path_buf());
            }
            Err(e) => log::warn!("Failed to read entry: {e}"),
        }
    }

    log::info!("Found {} attributable files", files.len());
    files
}
