use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use faq_matcher::{
    Chatbot, FaqCorpus, FaqIndexData, FaqMatcher, MatcherConfig, Normalizer,
    DEFAULT_SIMILARITY_THRESHOLD,
};

/// Answer questions from a fixed FAQ corpus, with a canned fallback for
/// anything the matcher is not confident about.
#[derive(Parser, Debug)]
#[command(name = "faq-chat", version, about)]
struct Cli {
    /// Path to the FAQ corpus JSON file
    /// (object form {"question": "answer"} or an array of entries)
    corpus: Option<PathBuf>,

    /// Load a fitted index snapshot (CBOR) instead of fitting from a corpus
    #[arg(long, conflicts_with = "corpus")]
    index: Option<PathBuf>,

    /// Write the fitted index snapshot (CBOR) after startup
    #[arg(long)]
    save_index: Option<PathBuf>,

    /// Answer a single query and exit instead of starting the prompt loop
    #[arg(short, long)]
    query: Option<String>,

    /// Similarity the best match must strictly exceed
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: f64,

    /// Print the per-entry scores alongside each answer
    #[arg(long)]
    scores: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let matcher = match (&cli.corpus, &cli.index) {
        (Some(path), None) => {
            let corpus = FaqCorpus::from_json_file(path)
                .with_context(|| format!("loading corpus from {}", path.display()))?;
            let config = MatcherConfig {
                threshold: cli.threshold,
            };
            FaqMatcher::new(corpus, Normalizer::english(), config)?
        }
        (None, Some(path)) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening index snapshot {}", path.display()))?;
            FaqIndexData::from_cbor_reader(io::BufReader::new(file))?
                .into_matcher(Normalizer::english())?
        }
        _ => bail!("pass either a corpus JSON path or --index <snapshot>"),
    };

    if let Some(path) = &cli.save_index {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating index snapshot {}", path.display()))?;
        FaqIndexData::from_matcher(&matcher).to_cbor_writer(io::BufWriter::new(file))?;
        eprintln!("index snapshot written to {}", path.display());
    }

    let show_scores = cli.scores;
    let bot = Chatbot::new(matcher);

    if let Some(query) = &cli.query {
        answer(&bot, query, show_scores);
        return Ok(());
    }

    // prompt loop
    eprintln!(
        "faq-chat ready ({} entries). \"exit\" or \"quit\" to leave.",
        bot.matcher().corpus().len()
    );
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        match read_input(&line) {
            Input::Quit => break,
            Input::Empty => eprintln!("Please provide a valid query!"),
            Input::Query(query) => answer(&bot, query, show_scores),
        }
    }
    Ok(())
}

/// What to do with one line of the prompt loop.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    /// blank line: re-prompt, do not terminate
    Empty,
    Quit,
    Query(&'a str),
}

fn read_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Empty,
        "exit" | "quit" => Input::Quit,
        query => Input::Query(query),
    }
}

fn answer(bot: &Chatbot, query: &str, show_scores: bool) {
    if show_scores {
        let scores = bot.matcher().scores(query);
        for (entry, score) in bot.matcher().corpus().iter().zip(scores) {
            eprintln!("  {score:.4}  {}", entry.question);
        }
    }
    println!("{}", bot.get_response(query));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_reprompt_instead_of_terminating() {
        assert_eq!(read_input("\n"), Input::Empty);
        assert_eq!(read_input("   \n"), Input::Empty);
        // the loop must keep answering after a blank line
        assert_eq!(read_input("hello again\n"), Input::Query("hello again"));
    }

    #[test]
    fn only_exit_and_quit_terminate() {
        assert_eq!(read_input("exit\n"), Input::Quit);
        assert_eq!(read_input("quit\n"), Input::Quit);
        assert_eq!(read_input("exit now\n"), Input::Query("exit now"));
    }

    #[test]
    fn queries_are_trimmed() {
        assert_eq!(read_input("  what is python?  \n"), Input::Query("what is python?"));
    }
}
