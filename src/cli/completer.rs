//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 顶层命令
const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "stats", "vertex", "vertices", "edge", "edges", "order", "degree",
    "path", "walk", "reach", "facility", "set",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "vertex" | "v" => Some(&["add", "remove", "has"]),
        "edge" | "e" => Some(&["add", "remove", "has"]),
        "set" => Some(&["insert", "erase", "has", "show"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'a str>) -> Vec<Pair> {
    candidates
        .map(|kw| Pair {
            display: kw.to_string(),
            replacement: kw.to_string(),
        })
        .collect()
}

/// 控制台补全器
#[derive(Default)]
pub struct ShellCompleter;

impl ShellCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 计算补全的起始位置和候选词
    pub fn candidates(&self, line_to_cursor: &str) -> (usize, Vec<Pair>) {
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let pos = line_to_cursor.len();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        match (words.as_slice(), at_word_end) {
            ([], _) => (0, pairs(COMMANDS.iter())),
            ([current], true) => {
                let current = current.to_lowercase();
                let start = pos - current.len();
                (
                    start,
                    pairs(COMMANDS.iter().filter(|kw| kw.starts_with(&current))),
                )
            }
            ([.., prev, current], true) => {
                let current = current.to_lowercase();
                let start = pos - current.len();
                match get_sub_commands(&prev.to_lowercase()) {
                    Some(subs) => (
                        start,
                        pairs(subs.iter().filter(|kw| kw.starts_with(&current))),
                    ),
                    None => (start, Vec::new()),
                }
            }
            ([.., last], false) => match get_sub_commands(&last.to_lowercase()) {
                Some(subs) => (pos, pairs(subs.iter())),
                None => (pos, Vec::new()),
            },
        }
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = line.get(..pos).unwrap_or(line);
        Ok(self.candidates(line_to_cursor))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
