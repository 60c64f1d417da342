//! Shell used to interpret command lines.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::process::Command;

/// Characters that make `cmd.exe` split or reinterpret an unquoted word.
const CMD_SPECIAL: &[char] = &[' ', '\t', '&', '|', '<', '>', '^', '(', ')', ',', ';', '='];

/// A shell program and the flag that makes it execute a command string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shell {
    pub program: String,
    pub flag: String,
}

impl Shell {
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// Build a `Command` that runs `line` through this shell.
    pub fn command(&self, line: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(&self.flag).arg(line);
        command
    }

    /// Quote a single word so this shell reads it back unchanged.
    ///
    /// `cmd` gets double quotes; any other program is treated as a POSIX shell.
    pub fn quote<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if !self.is_cmd() {
            return shell_words::quote(word);
        }
        if word.is_empty() || word.contains(CMD_SPECIAL) {
            Cow::Owned(format!("\"{}\"", word))
        } else {
            Cow::Borrowed(word)
        }
    }

    fn is_cmd(&self) -> bool {
        let base = self.program.rsplit(['/', '\\']).next().unwrap_or_default();
        base.eq_ignore_ascii_case("cmd") || base.eq_ignore_ascii_case("cmd.exe")
    }
}

impl Default for Shell {
    fn default() -> Self {
        if cfg!(windows) {
            Shell::new("cmd", "/C")
        } else {
            Shell::new("sh", "-c")
        }
    }
}
