//! Session controller - owns the UI state and routes input to the matcher
//!
//! The front end talks to the session only through `SessionCommand`s and
//! reads back `SessionEvent`s, so a speech source and a keyboard can feed the
//! same loop.

use crate::command::{parse_slash_command, CommandProcessor, SlashCommand, HELP};
use crate::config::{Config, TriggerMode};
use crate::corpus::Corpus;
use crate::matcher::{MatchResult, Matcher};
use crate::repl::TranscriptEvent;
use crate::stats::{MatchStats, Timer};
use crate::trigger::TriggerDetector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Transcript(TranscriptEvent),
    /// Typed `/command`
    Slash(String),
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Preview(String),
    /// A final transcript was searched; `result` may be empty
    Results {
        transcript: String,
        query: String,
        result: MatchResult,
    },
    /// Final transcript without a trigger phrase in prefix mode
    NoTrigger(String),
    /// Final transcript arrived while not listening
    Ignored(String),
    Listening(bool),
    Message(String),
    Error(String),
    /// Carries the stats summary
    Shutdown(String),
}

/// Explicit UI state, previously spread across view callbacks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub listening: bool,
    pub transcript: String,
    pub results: MatchResult,
}

pub struct Session {
    corpus: Corpus,
    matcher: Matcher,
    detector: TriggerDetector,
    commands: CommandProcessor,
    continuous: bool,
    state: SessionState,
    stats: MatchStats,
}

impl Session {
    /// New session, listening from the start
    pub fn new(config: &Config, corpus: Corpus) -> Self {
        Self {
            corpus,
            matcher: Matcher::new(&config.matcher),
            detector: TriggerDetector::from_config(&config.trigger),
            commands: CommandProcessor::new(&config.interaction),
            continuous: config.interaction.continuous,
            state: SessionState {
                listening: true,
                ..SessionState::default()
            },
            stats: MatchStats::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn run(mut self, cmd_rx: flume::Receiver<SessionCommand>, event_tx: flume::Sender<SessionEvent>) {
        while let Ok(cmd) = cmd_rx.recv() {
            let events = self.handle(cmd);
            let done = events
                .iter()
                .any(|e| matches!(e, SessionEvent::Shutdown(_)));
            for event in events {
                if event_tx.send(event).is_err() {
                    return;
                }
            }
            if done {
                break;
            }
        }
    }

    pub fn handle(&mut self, cmd: SessionCommand) -> Vec<SessionEvent> {
        match cmd {
            SessionCommand::Transcript(TranscriptEvent::Preview(text)) => {
                vec![SessionEvent::Preview(text)]
            }
            SessionCommand::Transcript(TranscriptEvent::Final(text)) => self.handle_final(text),
            SessionCommand::Slash(input) => match parse_slash_command(&input) {
                Some(Ok(command)) => self.apply(command),
                Some(Err(msg)) => vec![SessionEvent::Error(msg)],
                None => self.handle_final(input),
            },
            SessionCommand::Shutdown => vec![SessionEvent::Shutdown(self.stats.summary())],
        }
    }

    fn handle_final(&mut self, text: String) -> Vec<SessionEvent> {
        if self.commands.is_stop_command(&text) {
            return self.set_listening(false);
        }
        if !self.state.listening {
            return vec![SessionEvent::Ignored(text)];
        }

        self.state.transcript = text.to_lowercase();
        let mut events = match self.detector.strip(&self.state.transcript) {
            Some(query) => {
                let timer = Timer::start();
                let result = self.matcher.find(&query, &self.corpus);
                timer.finish(&mut self.stats, &result);
                tracing::info!(
                    "{:?} -> {} results ({})",
                    query,
                    result.len(),
                    result.tier.map(|t| t.to_string()).unwrap_or_else(|| "none".into())
                );
                self.state.results = result.clone();
                vec![SessionEvent::Results {
                    transcript: self.state.transcript.clone(),
                    query,
                    result,
                }]
            }
            None => {
                self.stats.record_untriggered();
                vec![SessionEvent::NoTrigger(self.state.transcript.clone())]
            }
        };

        if !self.continuous {
            events.extend(self.set_listening(false));
        }
        events
    }

    fn set_listening(&mut self, listening: bool) -> Vec<SessionEvent> {
        if self.state.listening == listening {
            return Vec::new();
        }
        self.state.listening = listening;
        vec![SessionEvent::Listening(listening)]
    }

    fn apply(&mut self, command: SlashCommand) -> Vec<SessionEvent> {
        match command {
            SlashCommand::Listen => self.set_listening(true),
            SlashCommand::Stop => self.set_listening(false),
            SlashCommand::Mode(mode) => {
                self.detector.set_mode(mode);
                vec![SessionEvent::Message(format!("Trigger mode: {}", mode))]
            }
            SlashCommand::Answers => {
                let enabled = !self.matcher.search_answers();
                self.matcher.set_search_answers(enabled);
                vec![SessionEvent::Message(format!(
                    "Answer search {}",
                    if enabled { "enabled" } else { "disabled" }
                ))]
            }
            SlashCommand::Status => vec![SessionEvent::Message(self.status())],
            SlashCommand::Stats => vec![SessionEvent::Message(self.stats.summary())],
            SlashCommand::Help => vec![SessionEvent::Message(HELP.to_string())],
            SlashCommand::Quit => vec![SessionEvent::Shutdown(self.stats.summary())],
        }
    }

    fn status(&self) -> String {
        let triggers = if self.detector.phrases().is_empty() {
            "(none)".to_string()
        } else {
            self.detector.phrases().join(", ")
        };
        format!(
            "Listening: {}, Mode: {}, Answers: {}, Corpus: {} questions / {} answers\nTriggers: {}",
            if self.state.listening { "on" } else { "off" },
            self.detector.mode(),
            if self.matcher.search_answers() { "on" } else { "off" },
            self.corpus.len(),
            self.corpus.answer_count(),
            triggers,
        )
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        self.detector.mode()
    }
}
