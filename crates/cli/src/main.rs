use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod report;
mod scanner;

#[derive(Parser)]
#[command(name = "collate")]
#[command(about = "Collect one contributor's code and doc excerpts into a Markdown portfolio", long_about = None)]
#[command(version)]
struct Cli {
    /// Root directory to scan
    root: PathBuf,

    /// Contributor email to attribute lines against
    author: String,

    /// Fraction of a unit's lines the author must exceed for it to qualify
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    threshold: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for the document)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if cli.threshold <= 0.0 || cli.threshold >= 1.0 {
        bail!(
            "threshold must be strictly between 0 and 1, got {}",
            cli.threshold
        );
    }

    let files = scanner::attributable_files(&cli.root);

    let mut excerpts = Vec::new();
    for file in &files {
        let mut found =
            collate_attribution::excerpts_for_file(file, &cli.author, cli.threshold)
                .with_context(|| format!("failed to extract contributions from {}", file.display()))?;
        log::info!("{}: {} excerpt(s)", file.display(), found.len());
        excerpts.append(&mut found);
    }

    print!("{}", report::render_portfolio(&cli.author, &excerpts));
    Ok(())
}
