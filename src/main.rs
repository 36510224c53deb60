use anyhow::{bail, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use text_extractor::output::{self, Report};
use text_extractor::{extract, DomainPolicy, ExtractOptions, ExtractionKind, MatchSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract useful data from a file!
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to extract data from
    #[arg(index = 1)]
    filename: PathBuf,

    /// Extract emails
    #[arg(short, long)]
    emails: bool,

    /// Extract URLs
    #[arg(short, long)]
    urls: bool,

    /// Extract domain names
    #[arg(short, long)]
    domains: bool,

    /// Extract mobile phone numbers (Singapore only)
    #[arg(short, long)]
    mobile: bool,

    /// Extract all data types above
    #[arg(short, long)]
    all: bool,

    /// Fail instead of skipping URLs whose host has no usable domain
    #[arg(long)]
    strict_domains: bool,

    /// Directory for the .csv files (default: next to the input)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Also write every result to a single JSON report
    #[arg(long)]
    json: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn kinds(&self) -> Vec<ExtractionKind> {
        let selected = [
            (self.emails, ExtractionKind::Email),
            (self.urls, ExtractionKind::Url),
            (self.domains, ExtractionKind::Domain),
            (self.mobile, ExtractionKind::Mobile),
        ];

        selected
            .into_iter()
            .filter(|(on, _)| self.all || *on)
            .map(|(_, kind)| kind)
            .collect()
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!("Verbosity level: {}", args.verbose);

    let kinds = args.kinds();
    if kinds.is_empty() {
        bail!("nothing to extract: pass one of -e, -u, -d, -m or -a");
    }

    let bytes = fs::read(&args.filename)
        .with_context(|| format!("Failed to read {}", args.filename.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    tracing::info!(file = %args.filename.display(), bytes = bytes.len(), "loaded input");

    let options = ExtractOptions {
        domain_policy: if args.strict_domains {
            DomainPolicy::Strict
        } else {
            DomainPolicy::Skip
        },
    };

    // Extractors share nothing, so the kinds run side by side.
    let results: Vec<(ExtractionKind, MatchSet)> = kinds
        .par_iter()
        .map(|&kind| {
            tracing::info!("Extracting {}..", kind.plural());
            extract(kind, &text, &options).map(|values| (kind, values))
        })
        .collect::<text_extractor::Result<_>>()
        .context("Extraction failed")?;

    for (kind, values) in &results {
        let path = output::output_path(&args.filename, *kind, args.out_dir.as_deref());
        output::write_match_set(&path, values)?;
        println!("{} {} extracted to {}", values.len(), kind.plural(), path.display());
    }

    if let Some(json_path) = &args.json {
        let mut report = Report::new(args.filename.to_string_lossy());
        for (kind, values) in &results {
            report.add(*kind, values);
        }
        output::write_json_report(json_path, &report)?;
        println!("Results written to {}", json_path.display());
    }

    Ok(())
}
