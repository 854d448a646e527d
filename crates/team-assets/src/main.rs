use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use team_assets::{init_tracing, Generator, LogConfig};
use team_roster::Roster;

/// Generate team profile pages, vCards and QR codes
#[derive(Debug, Parser)]
#[command(name = "team-assets", version, about)]
struct Cli {
    /// Roster file (.yaml, .yml or .json)
    #[arg(long, default_value = "roster.yaml")]
    roster: PathBuf,

    /// Site root that receives team/ and assets/
    #[arg(long, default_value = ".")]
    site_root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&LogConfig::default())?;

    let roster = Roster::load(&cli.roster)
        .with_context(|| format!("loading roster {}", cli.roster.display()))?;

    let report = Generator::new(&cli.site_root)
        .run(&roster)
        .with_context(|| format!("generating assets under {}", cli.site_root.display()))?;

    print!("{}", report.render_text());
    Ok(())
}
