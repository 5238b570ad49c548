use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::{ChatError, FeatureLevel, SessionState};
use crate::api::app_state;
use crate::core::AppConfig;
use crate::core::logging::init_tracing;
use crate::office::{SUPPORTED_LANGUAGES, is_supported_language};

#[derive(Debug, PartialEq)]
enum Input {
    Message(String),
    Clear,
    Language(String),
    Level(String),
    Faq,
    Stats,
    Empty,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };
    match cmd {
        "/clear" => Input::Clear,
        "/lang" => Input::Language(arg.to_string()),
        "/level" => Input::Level(arg.to_string()),
        "/faq" => Input::Faq,
        "/stats" => Input::Stats,
        _ => Input::Message(line.to_string()),
    }
}

pub async fn run(language: String) -> Result<()> {
    init_tracing();
    let mut rl = DefaultEditor::new()?;

    let config = AppConfig::default();
    let state = app_state(config);
    let dispatcher = state.dispatcher;

    let mut session = SessionState::new();
    if is_supported_language(&language) {
        session.language = language;
    } else {
        println!(
            "Unknown language {}, using {}",
            language, session.language
        );
    }

    println!(
        "Chatting with the assistant for {} ({}). Commands: /clear, /lang <language>, /level <1-3>, /faq, /stats",
        dispatcher.office().name,
        session.language
    );

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse_input(&line) {
                    Input::Empty => {}
                    Input::Clear => {
                        dispatcher.clear(&mut session);
                        println!("Conversation cleared.");
                    }
                    Input::Language(lang) => {
                        if is_supported_language(&lang) {
                            session.language = lang;
                            println!("Language set to {}.", session.language);
                        } else {
                            println!("Choose one of: {}", SUPPORTED_LANGUAGES.join(", "));
                        }
                    }
                    Input::Level(level) => {
                        let parsed = level
                            .parse::<u8>()
                            .map_err(|e| e.to_string())
                            .and_then(FeatureLevel::try_from);
                        match parsed {
                            Ok(level) => {
                                session.feature_level = level;
                                println!("{}", level.label());
                            }
                            Err(e) => println!("{}", e),
                        }
                    }
                    Input::Faq => {
                        for entry in dispatcher.faqs().entries_for(&session.language) {
                            println!("Q: {}\nA: {}\n", entry.question, entry.answer);
                        }
                    }
                    Input::Stats => {
                        println!(
                            "Total queries: {}, active level: {}",
                            session.query_count, session.feature_level
                        );
                    }
                    Input::Message(msg) => {
                        let result = dispatcher.submit(&mut session, &msg).await;
                        match result {
                            Ok(reply) => println!("{}", reply),
                            Err(e @ ChatError::MissingCredential) => {
                                // Nothing can be sent until the key is configured
                                return Err(e.into());
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("   "), Input::Empty);
        assert_eq!(parse_input("/clear"), Input::Clear);
        assert_eq!(parse_input("/lang Spanish"), Input::Language("Spanish".to_string()));
        assert_eq!(parse_input("/level  3 "), Input::Level("3".to_string()));
        assert_eq!(parse_input("/faq"), Input::Faq);
        assert_eq!(parse_input("/stats"), Input::Stats);
        assert_eq!(
            parse_input(" Where is the office? "),
            Input::Message("Where is the office?".to_string())
        );
        assert_eq!(
            parse_input("/unknown thing"),
            Input::Message("/unknown thing".to_string())
        );
    }
}
