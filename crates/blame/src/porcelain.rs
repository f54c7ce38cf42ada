use crate::error::{BlameError, Result};

/// Parse `git blame --line-porcelain` output into one author email per line.
///
/// In porcelain format every content line is prefixed with a TAB and is
/// preceded by a block of metadata records for that line, among them
/// `author-mail <email>`. Only those two record shapes matter here; everything
/// else is skipped.
pub(crate) fn parse_line_authors(stream: &str) -> Result<Vec<String>> {
    let mut current: Option<&str> = None;
    let mut authors = Vec::new();

    for record in stream.lines() {
        if record.starts_with('\t') {
            let email = current.ok_or_else(|| {
                BlameError::unavailable("content line before any author-mail record")
            })?;
            authors.push(email.to_string());
        } else if let Some(mail) = record.strip_prefix("author-mail ") {
            current = Some(
                mail.trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>'),
            );
        }
    }

    Ok(authors)
}
