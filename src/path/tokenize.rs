//! Turn pest pairs into commands.
//!
//! Every command owns the numbers between its letter and the next letter.
//! Anything the grammar marks as junk, and numbers that do not fit in a
//! finite `f64`, are dropped here.

use std::fmt;

use pest::Parser;
use pest::iterators::Pair;

use super::verb::{Mode, Verb};
use crate::log::{debug, warn};
use crate::{PathDataParser, Rule};

/// One command letter with the parameters that follow it
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub verb: Verb,
    pub mode: Mode,
    pub params: Vec<f64>,
}

impl Command {
    pub fn new(verb: Verb, mode: Mode, params: Vec<f64>) -> Self {
        Command { verb, mode, params }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb.letter(self.mode))?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

/// Split path data into commands.
///
/// Never fails: text before the first command letter, stray characters and
/// unreadable numbers are skipped.
pub fn tokenize(path_data: &str) -> Vec<Command> {
    let pairs = match PathDataParser::parse(Rule::path, path_data) {
        Ok(pairs) => pairs,
        Err(_err) => {
            // The grammar accepts any string; treat a rejection as "no geometry"
            warn!(error = %_err, "path data rejected by grammar");
            return Vec::new();
        }
    };

    let mut commands = Vec::new();
    for pair in pairs.flat_map(|path| path.into_inner()) {
        match pair.as_rule() {
            Rule::command => {
                if let Some(command) = parse_command(pair) {
                    commands.push(command);
                }
            }
            Rule::leading => {
                debug!(text = pair.as_str(), "skipping text before first command");
            }
            _ => {}
        }
    }

    debug!(count = commands.len(), "tokenized path data");
    commands
}

fn parse_command(pair: Pair<Rule>) -> Option<Command> {
    let mut inner = pair.into_inner();
    let letter = inner.next()?.as_str().chars().next()?;
    let (verb, mode) = Verb::from_letter(letter)?;

    let mut params = Vec::new();
    for child in inner {
        collect_params(child, &mut params);
    }
    Some(Command::new(verb, mode, params))
}

fn collect_params(pair: Pair<Rule>, params: &mut Vec<f64>) {
    match pair.as_rule() {
        Rule::number | Rule::flag => {
            if let Some(value) = parse_number(pair.as_str()) {
                params.push(value);
            } else {
                warn!(token = pair.as_str(), "dropping non-finite number");
            }
        }
        Rule::arc_group => {
            for child in pair.into_inner() {
                collect_params(child, params);
            }
        }
        Rule::junk => {
            warn!(text = pair.as_str(), "dropping malformed token");
        }
        _ => {}
    }
}

/// Read one number token; `None` if it does not parse to a finite value.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
