use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use wildlitz_phonics::{HighlightMask, WordChallenge, parse_challenges};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word or phrase to highlight
    #[arg(value_name = "WORD", required_unless_present = "challenges")]
    word: Option<String>,

    /// Pattern id, e.g. digraph_sh, blends, i_e
    #[arg(value_name = "PATTERN", default_value = "")]
    pattern: String,

    /// JSON file of challenges from the word service ("-" for stdin)
    #[arg(short = 'c', long, value_name = "FILE", conflicts_with = "word")]
    challenges: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log pattern dispatch decisions to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Highlighted runs in brackets: [sh]ip
    Text,
    /// One 0/1 digit per character
    Mask,
    /// One JSON object per line
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let challenges = match (&args.challenges, &args.word) {
        (Some(path), _) => read_challenges(path)?,
        (None, Some(word)) => vec![WordChallenge::new(word, &args.pattern)],
        (None, None) => bail!("Nothing to highlight: give a WORD or --challenges FILE."),
    };

    for challenge in &challenges {
        println!("{}", render(challenge, &challenge.highlight(), args.format));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_challenges(path: &str) -> Result<Vec<WordChallenge>> {
    let contents = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };
    parse_challenges(&contents).with_context(|| format!("Failed to parse {}", path))
}

fn render(challenge: &WordChallenge, mask: &HighlightMask, format: Format) -> String {
    match format {
        Format::Text => mask.render_bracketed(&challenge.word),
        Format::Mask => mask.render_bits(),
        Format::Json => json!({
            "word": challenge.word,
            "pattern": challenge.pattern,
            "mask": mask,
            "spans": mask
                .spans()
                .into_iter()
                .map(|span| [span.start, span.end])
                .collect::<Vec<_>>(),
        })
        .to_string(),
    }
}
