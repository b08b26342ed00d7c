//! Command system - intercepts input before it is searched
//!
//! Two kinds of commands are recognised:
//! 1. Spoken stop phrases - stop listening, matched fuzzily
//! 2. Slash commands - typed `/word`, change session settings

use crate::config::{InteractionConfig, TriggerMode};
use crate::fuzzy::{clean_for_matching, leading_phrase_match};

pub const HELP: &str = "\
Commands:
  /listen - Start listening for questions
  /stop - Stop listening
  /mode prefix|anywhere - Require the trigger at the start, or accept it anywhere
  /answers - Toggle searching answer text in exact matching
  /status - Show current settings
  /stats - Show match statistics
  /quit - Exit
  /help - Show this help

Anything else is treated as a spoken transcript.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Listen,
    Stop,
    Mode(TriggerMode),
    Answers,
    Status,
    Stats,
    Help,
    Quit,
}

/// Parse a typed `/command`.
///
/// Returns `None` if the input is not a slash command at all, and an error
/// message for unknown commands or bad arguments.
pub fn parse_slash_command(input: &str) -> Option<Result<SlashCommand, String>> {
    let input = input.trim();
    let rest = input.strip_prefix('/')?;

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    let command = match name.as_str() {
        "listen" | "start" => Ok(SlashCommand::Listen),
        "stop" => Ok(SlashCommand::Stop),
        "mode" => match arg {
            Some(mode) => mode.parse().map(SlashCommand::Mode),
            None => Err("Usage: /mode prefix|anywhere".to_string()),
        },
        "answers" => Ok(SlashCommand::Answers),
        "status" => Ok(SlashCommand::Status),
        "stats" => Ok(SlashCommand::Stats),
        "help" | "commands" => Ok(SlashCommand::Help),
        "quit" | "exit" => Ok(SlashCommand::Quit),
        other => Err(format!("Unknown command '/{}', try /help", other)),
    };
    Some(command)
}

/// Recognises spoken stop phrases
pub struct CommandProcessor {
    stop_phrases: Vec<Vec<String>>,
}

impl CommandProcessor {
    pub fn new(config: &InteractionConfig) -> Self {
        let stop_phrases = config
            .stop_phrases
            .iter()
            .map(|p| {
                clean_for_matching(p)
                    .split_whitespace()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .collect();
        Self { stop_phrases }
    }

    /// The whole transcript must be a stop phrase, give or take a typo per word
    pub fn is_stop_command(&self, text: &str) -> bool {
        let spoken: Vec<&str> = text.split_whitespace().collect();
        self.stop_phrases.iter().any(|phrase| {
            phrase.len() == spoken.len() && leading_phrase_match(phrase, &spoken).is_some()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> CommandProcessor {
        CommandProcessor::new(&InteractionConfig::default())
    }

    #[test]
    fn test_stop_phrase() {
        let processor = processor();
        assert!(processor.is_stop_command("stop listening"));
        assert!(processor.is_stop_command("Stop listening."));
        assert!(processor.is_stop_command("stop listenin"));
    }

    #[test]
    fn test_not_stop_phrase() {
        let processor = processor();
        assert!(!processor.is_stop_command("start listening"));
        assert!(!processor.is_stop_command("stop listening to music please"));
        assert!(!processor.is_stop_command("what is your experience"));
        assert!(!processor.is_stop_command(""));
    }

    #[test]
    fn test_no_stop_phrases_configured() {
        let config = InteractionConfig {
            continuous: true,
            stop_phrases: vec!["  ".to_string()],
        };
        let processor = CommandProcessor::new(&config);
        assert!(!processor.is_stop_command(""));
        assert!(!processor.is_stop_command("stop"));
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_slash_command("/listen"), Some(Ok(SlashCommand::Listen)));
        assert_eq!(parse_slash_command(" /STOP "), Some(Ok(SlashCommand::Stop)));
        assert_eq!(
            parse_slash_command("/mode anywhere"),
            Some(Ok(SlashCommand::Mode(TriggerMode::Anywhere)))
        );
        assert_eq!(parse_slash_command("/exit"), Some(Ok(SlashCommand::Quit)));
    }

    #[test]
    fn test_slash_errors() {
        assert!(matches!(parse_slash_command("/mode"), Some(Err(_))));
        assert!(matches!(parse_slash_command("/mode sideways"), Some(Err(_))));
        assert!(matches!(parse_slash_command("/dance"), Some(Err(_))));
    }

    #[test]
    fn test_not_a_slash_command() {
        assert_eq!(parse_slash_command("what is rust"), None);
    }
}
