use std::path::PathBuf;

use clap::Parser;
use questions::config::parse_count;

#[derive(Debug, Parser)]
#[command(
    name = "questions",
    about = "Answer a question from a directory of text files"
)]
pub struct Cli {
    /// Directory containing the .txt corpus files
    pub corpus: PathBuf,

    /// Ask this question instead of reading one line from stdin
    #[arg(long)]
    pub query: Option<String>,

    /// Number of top files to search for sentences [default: 1]
    #[arg(short = 'f', long = "files", value_parser = parse_count)]
    pub file_matches: Option<usize>,

    /// Number of sentences to print [default: 1]
    #[arg(short = 's', long = "sentences", value_parser = parse_count)]
    pub sentence_matches: Option<usize>,

    /// Replace the built-in English stopwords with a word-per-line file
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Output the query, ranked files and sentences as JSON
    #[arg(long, conflicts_with = "scores")]
    pub json: bool,

    /// Show ranked files and sentences with their scores
    #[arg(long)]
    pub scores: bool,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
