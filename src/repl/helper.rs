//! Rustyline helper for the calculator REPL
//!
//! Provides tab completion for operator and command names. Highlighting,
//! hinting, and validation keep the rustyline defaults.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::engine::OPERATOR_NAMES;

/// Stack and meta commands recognized alongside the operators
const COMMANDS: &[&str] = &["clear", "display", "help", "history", "quit", "exit"];

/// Calculator REPL helper: operator/command name completion
#[derive(Default)]
pub struct CalcHelper;

impl CalcHelper {
    /// Create a new helper
    pub fn new() -> Self {
        Self
    }

    fn completions() -> impl Iterator<Item = &'static str> {
        OPERATOR_NAMES.iter().chain(COMMANDS.iter()).copied()
    }
}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];

        // Start of the word being completed
        let word_start = before_cursor
            .rfind(|c: char| c.is_whitespace())
            .map(|i| i + 1)
            .unwrap_or(0);
        let partial = &before_cursor[word_start..];

        if partial.is_empty() {
            return Ok((pos, vec![]));
        }

        let mut matches: Vec<Pair> = Self::completions()
            .filter(|name| name.starts_with(partial))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        matches.sort_by(|a, b| a.display.cmp(&b.display));

        Ok((word_start, matches))
    }
}

impl Hinter for CalcHelper {
    type Hint = String;
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

impl Helper for CalcHelper {}
