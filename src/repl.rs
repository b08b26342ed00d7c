//! REPL input handling - typed lines stand in for speech transcripts

use std::io::BufRead;
use std::thread;

use crate::session::SessionCommand;

/// Events from a transcription source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Partial text while the speaker is still talking, display only
    Preview(String),
    /// Finished utterance, searched when listening
    Final(String),
}

/// Map a typed line to a session command; blank lines are skipped
pub fn parse_line(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with('/') {
        return Some(SessionCommand::Slash(line.to_string()));
    }
    Some(SessionCommand::Transcript(TranscriptEvent::Final(
        line.to_string(),
    )))
}

/// Read stdin on a background thread, forwarding lines until EOF
pub fn spawn_input(cmd_tx: flume::Sender<SessionCommand>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("stdin read failed: {}", e);
                    break;
                }
            };
            if let Some(cmd) = parse_line(&line) {
                if cmd_tx.send(cmd).is_err() {
                    return;
                }
            }
        }
        let _ = cmd_tx.send(SessionCommand::Shutdown);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(
            parse_line(" /stats "),
            Some(SessionCommand::Slash("/stats".to_string()))
        );
        assert_eq!(
            parse_line("what is rust"),
            Some(SessionCommand::Transcript(TranscriptEvent::Final(
                "what is rust".to_string()
            )))
        );
    }
}
