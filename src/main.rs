// src/main.rs
//
// calloutify — wrap classed callout boxes in HTML into styled blocks
//
// - .challenge     → <blockquote><strong>Try this:</strong> …</blockquote>
// - .solution      → <blockquote><details><summary><strong>Solution:</strong></summary> …</details></blockquote>
//                    (--bare-solution drops the outer blockquote)
// - .callout-trick → <blockquote><strong>HELPFUL TRICK:</strong> …</blockquote>
// - tip class      → <blockquote><strong>TIP:</strong> …</blockquote>
//                    (default "callout-tip"; pass --tip-class callout-trick to
//                     reproduce the legacy double wrap)
//
// Each rule runs as its own pass over the document, in the order above, so a
// class matched by two rules ends up nested inside two wrappers.
//
// CLI flags:
//   --tip-class <CLASS> : class the TIP rule matches (default: callout-tip)
//   --bare-solution     : wrap solutions in a bare <details>, no outer quote

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use calloutify::{rewrite_file, Error, WrapRule, WrapStyle};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Class the TIP rule matches
    #[arg(long = "tip-class", default_value = "callout-tip")]
    tip_class: String,

    /// Wrap solutions in a bare <details> without the outer <blockquote>
    #[arg(long = "bare-solution", action = ArgAction::SetTrue)]
    bare_solution: bool,

    /// Input file
    input: PathBuf,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("calloutify: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let solution_style = if cli.bare_solution {
        WrapStyle::BareDisclosure
    } else {
        WrapStyle::Disclosure
    };

    let rules = [
        WrapRule::new("challenge", "Try this:", WrapStyle::Quote),
        WrapRule::new("solution", "Solution:", solution_style),
        WrapRule::new("callout-trick", "HELPFUL TRICK:", WrapStyle::Quote),
        WrapRule::new(cli.tip_class.as_str(), "TIP:", WrapStyle::Quote),
    ];

    rewrite_file(&cli.input, cli.output.as_deref(), &rules)
}
