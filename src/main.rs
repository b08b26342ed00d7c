use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::thread;

use qafind::config::{Config, TriggerMode};
use qafind::corpus::Corpus;
use qafind::repl::{self, TranscriptEvent};
use qafind::session::{Session, SessionCommand, SessionEvent};
use qafind::render;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qafind", version, about = "Find interview answers by asking the question")]
struct Cli {
    /// Config file (default: ./config.toml if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Corpus JSON file, overrides the config
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Trigger mode: prefix or anywhere
    #[arg(long)]
    mode: Option<TriggerMode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search once for a transcript and exit
    Ask {
        /// Transcript text, e.g. "can you tell me about databases"
        #[arg(required = true)]
        transcript: Vec<String>,
    },
    /// Validate config and corpus, then print a summary
    Check,
}

#[hotpath::main]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(corpus) = cli.corpus {
        config.corpus = Some(corpus);
    }
    if let Some(mode) = cli.mode {
        config.trigger.mode = mode;
    }

    init_logging(&config.logging.level);

    let corpus = Corpus::load_or_builtin(config.corpus.as_deref())
        .context("Failed to load corpus")?;
    if corpus.is_empty() {
        tracing::warn!("Corpus is empty, every search will come back empty");
    }

    match cli.command {
        Some(Command::Ask { transcript }) => run_ask(&config, corpus, &transcript.join(" ")),
        Some(Command::Check) => run_check(&config, &corpus),
        None => run_repl(&config, corpus),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_ask(config: &Config, corpus: Corpus, transcript: &str) -> anyhow::Result<()> {
    let mut session = Session::new(config, corpus);
    let mut out = io::stdout();
    let events = session.handle(SessionCommand::Transcript(TranscriptEvent::Final(
        transcript.to_string(),
    )));
    for event in &events {
        render::event(&mut out, event)?;
    }
    Ok(())
}

fn run_check(config: &Config, corpus: &Corpus) -> anyhow::Result<()> {
    println!(
        "Corpus: {} questions, {} distinct answers ({})",
        corpus.len(),
        corpus.answer_count(),
        config
            .corpus
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
    println!(
        "Trigger: {} mode, phrases: {:?}",
        config.trigger.mode, config.trigger.phrases
    );
    println!(
        "Matcher: min_token_length={} keyword_threshold={} fuzzy_threshold={} search_answers={} stopwords={}",
        config.matcher.min_token_length,
        config.matcher.keyword_threshold,
        config.matcher.fuzzy_threshold,
        config.matcher.search_answers,
        config.matcher.stopwords.len()
    );
    Ok(())
}

fn run_repl(config: &Config, corpus: Corpus) -> anyhow::Result<()> {
    let mut out = io::stdout();
    render::banner(&mut out, corpus.len(), &config.trigger.phrases)?;

    let session = Session::new(config, corpus);

    // Channel: input/ctrl-c -> session
    let (cmd_tx, cmd_rx) = flume::unbounded::<SessionCommand>();
    // Channel: session -> renderer
    let (event_tx, event_rx) = flume::unbounded::<SessionEvent>();

    let ctrlc_tx = cmd_tx.clone();
    ctrlc::set_handler(move || {
        let _ = ctrlc_tx.send(SessionCommand::Shutdown);
    })
    .context("Failed to install Ctrl+C handler")?;

    // Input thread is left running; it may be blocked on stdin at exit
    let _input = repl::spawn_input(cmd_tx);
    let session_handle = thread::spawn(move || session.run(cmd_rx, event_tx));

    for event in event_rx.iter() {
        render::event(&mut out, &event)?;
        if matches!(event, SessionEvent::Shutdown(_)) {
            break;
        }
    }

    join_session(session_handle)
}

fn join_session(handle: thread::JoinHandle<()>) -> anyhow::Result<()> {
    if handle.join().is_err() {
        tracing::error!("Session thread panicked");
        anyhow::bail!("session thread panicked");
    }
    Ok(())
}
