//! Prompt contract shared by the terminal front-end and the step functions
//!
//! A [`Prompter`] never returns an error: an interrupt ends the process, and
//! any other failure is reported and replaced by a fallback value so the run
//! can continue. The free functions here add the ordering and default rules
//! every front-end must follow.

use std::io;

/// Interactive question/answer backend
pub trait Prompter {
    /// Yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Pick one of `options` (already ordered), starting on `default` when given
    fn choose(&mut self, message: &str, options: &[String], default: Option<&str>) -> String;

    /// Pick at least one of `options` (already ordered)
    fn choose_many(&mut self, message: &str, options: &[String]) -> Vec<String>;

    /// Free text; returns `default` when the user submits nothing
    fn input(&mut self, message: &str, default: Option<&str>) -> String;
}

/// How a failed prompt must be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFailure {
    /// Ctrl-C or Esc: the whole process stops
    Interrupted,
    /// Anything else: report it and carry on with the fallback value
    Recoverable,
}

impl PromptFailure {
    pub fn classify(err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            Self::Interrupted
        } else {
            Self::Recoverable
        }
    }
}

/// Message printed for recoverable prompt failures
pub fn failure_message(err: &io::Error) -> String {
    format!("Encountered an error processing prompt: {}", err)
}

/// Options in presentation order: sorted, duplicates removed
pub fn ordered(options: &[String]) -> Vec<String> {
    let mut sorted = options.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted
}

/// Answer for a free-text prompt, falling back to the default on empty input
pub fn resolve_input(answer: String, default: Option<&str>) -> String {
    match default {
        Some(default) if answer.is_empty() => default.to_string(),
        _ => answer,
    }
}

pub fn confirm<P: Prompter + ?Sized>(prompter: &mut P, message: &str) -> bool {
    prompter.confirm(message)
}

pub fn select<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    options: &[String],
    default: Option<&str>,
) -> String {
    let options = ordered(options);
    let default = default.filter(|d| options.iter().any(|o| o == d));
    prompter.choose(message, &options, default)
}

pub fn multi_select<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    options: &[String],
) -> Vec<String> {
    prompter.choose_many(message, &ordered(options))
}

pub fn ask<P: Prompter + ?Sized>(prompter: &mut P, message: &str, default: Option<&str>) -> String {
    let answer = prompter.input(message, default);
    resolve_input(answer, default)
}


#[cfg(test)]
mod tests {
    use super::testing::{ScriptedPrompter, Shown};
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_select_presents_sorted_options() {
        let mut prompter = ScriptedPrompter::default().choosing("b");
        let answer = select(&mut prompter, "Pick", &strings(&["c", "a", "b"]), None);

        assert_eq!(answer, "b");
        assert_eq!(
            prompter.shown,
            vec![Shown::Choose("Pick".into(), strings(&["a", "b", "c"]), None)]
        );
    }

    #[test]
    fn test_select_drops_default_outside_options() {
        let mut prompter = ScriptedPrompter::default();
        select(&mut prompter, "Pick", &strings(&["a"]), Some("z"));
        assert_eq!(
            prompter.shown,
            vec![Shown::Choose("Pick".into(), strings(&["a"]), None)]
        );

        let mut prompter = ScriptedPrompter::default();
        let answer = select(&mut prompter, "Pick", &strings(&["b", "a"]), Some("b"));
        assert_eq!(answer, "b");
    }

    #[test]
    fn test_multi_select_presents_sorted_options() {
        let mut prompter = ScriptedPrompter::default().choosing_many(&["web"]);
        let answer = multi_select(&mut prompter, "Modules", &strings(&["web", "actuator"]));

        assert_eq!(answer, strings(&["web"]));
        assert_eq!(
            prompter.shown,
            vec![Shown::ChooseMany(
                "Modules".into(),
                strings(&["actuator", "web"])
            )]
        );
    }

    #[test]
    fn test_ask_returns_default_on_empty_input() {
        let mut prompter = ScriptedPrompter::default().typing("");
        assert_eq!(ask(&mut prompter, "Group Id", Some("me.snowdrop")), "me.snowdrop");

        let mut prompter = ScriptedPrompter::default().typing("org.acme");
        assert_eq!(ask(&mut prompter, "Group Id", Some("me.snowdrop")), "org.acme");

        let mut prompter = ScriptedPrompter::default().typing("");
        assert_eq!(ask(&mut prompter, "Location", None), "");
    }

    #[test]
    fn test_classify_prompt_failures() {
        let interrupted = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c");
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "gone");

        assert_eq!(PromptFailure::classify(&interrupted), PromptFailure::Interrupted);
        assert_eq!(PromptFailure::classify(&broken), PromptFailure::Recoverable);
        assert_eq!(
            failure_message(&broken),
            "Encountered an error processing prompt: gone"
        );
    }
}
