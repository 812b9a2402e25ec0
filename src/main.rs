use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use release_gap::config::{self, Config};
use release_gap::listing::GithubLister;
use release_gap::session::{CompareOptions, Session};
use release_gap::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-gap",
    version,
    about = "Count the releases between two tags and surface what changed in between"
)]
struct Args {
    #[arg(help = "Repository owner (user or organization)")]
    owner: String,

    #[arg(help = "Repository name")]
    repo: String,

    #[arg(help = "Release tag to measure from")]
    release: String,

    #[arg(long, help = "Release tag to measure to (defaults to the newest release)")]
    to: Option<String>,

    #[arg(
        short,
        long,
        help = "Only consider releases whose tag matches this regular expression"
    )]
    filter: Option<String>,

    #[arg(long, help = "Include pre-releases in the comparison")]
    include_prereleases: bool,

    #[arg(long, help = "Include draft releases in the comparison")]
    include_drafts: bool,

    #[arg(long, help = "Verify both tags exist as releases before comparing")]
    verify: bool,

    #[arg(short, long, help = "Print the release notes between the two tags")]
    notes: bool,

    #[arg(long, help = "Show the API rate limit state after the comparison")]
    rate: bool,

    #[arg(long, help = "API token (falls back to config, then GITHUB_TOKEN)")]
    token: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let token = resolve_token(&args, &config);
    let lister = match GithubLister::with_base_url(
        &config.github.api_url,
        token,
        Duration::from_secs(config.github.request_timeout_secs),
    ) {
        Ok(lister) => lister,
        Err(e) => {
            ui::display_error(&format!("Failed to set up the API client: {}", e));
            std::process::exit(1);
        }
    };

    let options = CompareOptions {
        target_tag: args.to.clone(),
        filter_pattern: args.filter.clone().or_else(|| config.defaults.filter.clone()),
        include_prereleases: args.include_prereleases || config.defaults.include_prereleases,
        include_drafts: args.include_drafts || config.defaults.include_drafts,
        verify_release: args.verify || config.defaults.verify_release,
    };

    let session = match Session::open(&lister, &args.owner, &args.repo, &args.release, &options) {
        Ok(session) => session,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::display_status(&format!(
        "Resolved {} releases for {}/{}",
        session.release_count(),
        session.owner(),
        session.repo()
    ));

    let comparison = match session.compare() {
        Ok(comparison) => comparison,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_comparison(&comparison);

    if args.notes {
        ui::display_notes(&comparison.notes);
    }

    if args.rate {
        match comparison.rate {
            Some(rate) => ui::display_rate(&rate),
            None => ui::display_status("No rate information reported by the API"),
        }
    }

    Ok(())
}

fn resolve_token(args: &Args, config: &Config) -> Option<String> {
    args.token
        .clone()
        .or_else(|| config.github.token.clone())
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
}
