extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate quickblast;
extern crate shlex;

use std::env;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use quickblast::prelude::*;
use quickblast::util::{read_input, unescape_delimiter};

/// qblast - exact local alignment of two or more texts
///
/// Prints every run of identical content shared by all inputs, one match
/// per line as `length pos_1 ... pos_k`, longest first.
#[derive(Parser, Debug)]
#[command(name = "qblast", args_override_self = true, version, about)]
struct Cli {
    /// Files to align, in chain order (literal strings with --literal)
    #[arg(required = true, num_args = 2..)]
    inputs: Vec<String>,

    /// Treat inputs as the texts themselves instead of file paths
    #[arg(short, long)]
    literal: bool,

    /// Minimum match length, in bytes or tokens
    #[arg(short, long, default_value_t = 1)]
    min_len: usize,

    /// Align words (`\w+`) instead of bytes
    #[arg(short, long)]
    words: bool,

    /// Align tokens matching this regular expression instead of bytes
    #[arg(long, value_name = "PATTERN", conflicts_with = "words")]
    token_regex: Option<String>,

    /// Fold diacritics before tokenizing (implies --words without --token-regex)
    #[arg(long)]
    normalize: bool,

    /// Split inputs on this delimiter; matches never cross it (escapes like \n are understood)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Report each run of the first two inputs in at most one match
    #[arg(short, long)]
    unique: bool,

    /// Print every input with its matches highlighted
    #[arg(long)]
    highlight: bool,

    /// Characters of context kept around highlights
    #[arg(long, default_value_t = 16)]
    context: usize,

    /// Highlight marker pair, outermost first (repeatable)
    #[arg(long, value_name = "OPEN,CLOSE", value_parser = parse_marker)]
    marker: Vec<(String, String)>,

    /// Print the matches as JSON
    #[arg(long)]
    json: bool,
}

fn parse_marker(s: &str) -> Result<(String, String), String> {
    s.split_once(',')
        .map(|(open, close)| (open.to_string(), close.to_string()))
        .ok_or_else(|| format!("marker must be OPEN,CLOSE, got {s:?}"))
}

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        eprintln!("{err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> Cli {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("qblast")));
    args.extend(
        env::var("QBLAST_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    Cli::parse_from(args)
}

fn tokenizer(cli: &Cli) -> Result<Option<Box<dyn Tokenizer>>> {
    let inner: Box<dyn Tokenizer> = match &cli.token_regex {
        Some(pattern) => Box::new(RegexTokenizer::new(pattern)?),
        None if cli.words || cli.normalize => Box::new(RegexTokenizer::words()),
        None => return Ok(None),
    };
    Ok(Some(if cli.normalize {
        Box::new(NormalizedTokenizer::new(inner))
    } else {
        inner
    }))
}

fn real_main() -> Result<i32> {
    let cli = parse_args();
    debug!("{cli:?}");

    let texts = if cli.literal {
        cli.inputs.clone()
    } else {
        cli.inputs
            .iter()
            .map(|path| read_input(path).wrap_err_with(|| format!("could not read {path}")))
            .collect::<Result<Vec<_>>>()?
    };

    //------------------------------------------------------------------------------
    // align
    let mut builder = AlignOptionsBuilder::default();
    builder.unique_substrings(cli.unique);
    if let Some(tokenizer) = tokenizer(&cli)? {
        builder.tokenizer(tokenizer);
    }
    if let Some(delimiter) = &cli.delimiter {
        builder.delimiter(unescape_delimiter(delimiter));
    }
    let options = builder.build().map_err(quickblast::Error::from)?;
    let results = align(&texts, cli.min_len, &options);
    info!("{} matches", results.len());

    //------------------------------------------------------------------------------
    // output
    let mut out = BufWriter::new(io::stdout().lock());
    if cli.json {
        serde_json::to_writer(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for tuple in &results {
            let row: Vec<String> = tuple.to_row().iter().map(usize::to_string).collect();
            writeln!(out, "{}", row.join(" "))?;
        }
    }

    if cli.highlight && !results.is_empty() {
        let mut hl = HighlightOptionsBuilder::default();
        hl.context_length(cli.context);
        if !cli.marker.is_empty() {
            hl.markers(cli.marker.iter().cloned());
        }
        let hl = hl.build().map_err(quickblast::Error::from)?;
        for (column, text) in texts.iter().enumerate() {
            writeln!(out, "{}", render_highlights(text, column, &results, &hl))?;
        }
    }
    out.flush()?;

    Ok(if results.is_empty() { 1 } else { 0 })
}
