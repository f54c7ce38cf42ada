use collate_attribution::Excerpt;

/// Render the portfolio document.
///
/// A top-level heading names the author, then each excerpt sits behind a
/// `######` path marker: fenced and tagged with the syntax name for code,
/// indented four spaces for Markdown (GitHub does not render a fenced block
/// nested inside another one).
pub fn render_portfolio(author: &str, excerpts: &[Excerpt]) -> String {
    let mut out = format!("# {author}\n\n");

    for excerpt in excerpts {
        out.push_str(&format!("###### {}\n\n", excerpt.path.display()));
        if excerpt.language.is_document() {
            for line in excerpt.text.lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        } else {
            out.push_str(&format!(
                "``` {}\n{}```\n",
                excerpt.language.as_str(),
                excerpt.text
            ));
        }
    }

    out
}
