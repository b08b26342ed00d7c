use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::matcher::MatchResult;
use crate::session::SessionEvent;

pub const NO_RESULTS: &str = "No matching results found.";

pub fn banner(out: &mut impl Write, questions: usize, triggers: &[String]) -> io::Result<()> {
    writeln!(out, "{}", "Interview Q&A Finder".bold())?;
    writeln!(out, "{} questions loaded. Type a question, or /help.", questions)?;
    if !triggers.is_empty() {
        let quoted: Vec<String> = triggers.iter().map(|t| format!("\"{}\"", t)).collect();
        writeln!(out, "{}", format!("Triggers: {}", quoted.join(", ")).dark_grey())?;
    }
    writeln!(out)
}

pub fn results(out: &mut impl Write, result: &MatchResult) -> io::Result<()> {
    if result.is_empty() {
        return writeln!(out, "{}", NO_RESULTS.yellow());
    }
    for m in &result.matches {
        writeln!(out, "{} {}", "Q:".bold(), m.record.question)?;
        writeln!(out, "{} {}", "A:".bold().green(), m.record.answer)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn event(out: &mut impl Write, event: &SessionEvent) -> io::Result<()> {
    let written = match event {
        SessionEvent::Preview(text) => writeln!(out, "{}", text.as_str().dark_grey()),
        SessionEvent::Results {
            transcript,
            query,
            result,
        } => {
            writeln!(out, "Transcript: {}", transcript.as_str().bold())?;
            let tier = result
                .tier
                .map(|t| format!(" [{}]", t))
                .unwrap_or_default();
            writeln!(out, "{}", format!("Query: {}{}", query, tier).dark_grey())?;
            results(out, result)
        }
        SessionEvent::NoTrigger(transcript) => {
            writeln!(out, "Transcript: {}", transcript.as_str().bold())?;
            writeln!(out, "{}", "No question trigger detected.".dark_grey())
        }
        SessionEvent::Ignored(_) => {
            writeln!(out, "{}", "Not listening (type /listen).".dark_grey())
        }
        SessionEvent::Listening(true) => writeln!(out, "{}", "Listening...".cyan()),
        SessionEvent::Listening(false) => writeln!(out, "{}", "Stopped listening.".cyan()),
        SessionEvent::Message(text) => writeln!(out, "{}", text.trim_end()),
        SessionEvent::Error(text) => writeln!(out, "{}", text.as_str().red()),
        SessionEvent::Shutdown(summary) => {
            writeln!(out)?;
            write!(out, "{}", summary.as_str().dark_grey())
        }
    };
    written?;
    out.flush()
}
