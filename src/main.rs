use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;
use questions::{Corpus, Settings, error, search};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("QUESTIONS_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let settings = Settings::resolve(
        cli.file_matches,
        cli.sentence_matches,
        cli.stopwords.as_deref(),
    )?;
    let tokenizer = settings.tokenizer();

    // Load before prompting.
    let corpus = Corpus::load(&cli.corpus)?;

    let question = match cli.query {
        Some(query) => query,
        None => read_question()?,
    };

    let answer =
        search::answer(&corpus, &question, &tokenizer, &settings.params())?;

    let mut out = std::io::stdout().lock();
    if cli.json {
        search::format_json(&answer, &mut out)?;
    } else if cli.scores {
        search::format_human(&answer, &mut out)?;
    } else {
        search::format_plain(&answer, &mut out)?;
    }
    out.flush()?;

    Ok(())
}

/// Read one line from stdin, prompting when attached to a terminal.
fn read_question() -> error::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Query: ");
        std::io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
