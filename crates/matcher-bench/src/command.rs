//! Command line of the external matcher.
//!
//! The matcher is invoked as
//! `<matcher> <jsonl-file> --path <dotpath> --type <type> --value <text>
//! --threads <n> [--strict]` and prints each matching record to stdout.
//! Under `--strict` a malformed input line makes it exit with
//! [`STRICT_MALFORMED_EXIT_CODE`].

use corpus_generator::ValueType;
use std::path::PathBuf;
use std::process::Command;

/// Default location of the matcher binary in a debug build tree.
pub const DEFAULT_MATCHER: &str = "./build/debug/bin/jlq";

/// Exit code the matcher uses for malformed input in strict mode.
pub const STRICT_MALFORMED_EXIT_CODE: i32 = 3;

/// A fully specified matcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherCommand {
    pub program: PathBuf,
    pub file: PathBuf,
    /// Dot path, passed through unchecked so the matcher's own path
    /// handling can be exercised
    pub path: String,
    pub value_type: ValueType,
    pub value: String,
    pub strict: bool,
    pub threads: u64,
}

impl MatcherCommand {
    pub fn new(
        program: impl Into<PathBuf>,
        file: impl Into<PathBuf>,
        path: impl Into<String>,
        value_type: ValueType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            file: file.into(),
            path: path.into(),
            value_type,
            value: value.into(),
            strict: false,
            threads: 1,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_threads(mut self, threads: u64) -> Self {
        self.threads = threads;
        self
    }

    /// Arguments passed to the matcher, program excluded.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.file.display().to_string(),
            "--path".to_string(),
            self.path.clone(),
            "--type".to_string(),
            self.value_type.as_str().to_string(),
            "--value".to_string(),
            self.value.clone(),
            "--threads".to_string(),
            self.threads.to_string(),
        ];
        if self.strict {
            args.push("--strict".to_string());
        }
        args
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.program.display().to_string()];
        argv.extend(self.args());
        argv
    }

    /// Space-joined command line for logs and reports.
    pub fn display(&self) -> String {
        self.argv().join(" ")
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> MatcherCommand {
        MatcherCommand::new(
            "./jlq",
            "data.jsonl",
            "user.id",
            ValueType::Number,
            "42",
        )
    }

    #[test]
    fn test_argv_order() {
        assert_eq!(
            command().argv(),
            [
                "./jlq",
                "data.jsonl",
                "--path",
                "user.id",
                "--type",
                "number",
                "--value",
                "42",
                "--threads",
                "1"
            ]
        );
    }

    #[test]
    fn test_strict_is_last() {
        let argv = command().with_strict(true).with_threads(8).argv();
        assert_eq!(argv.last().unwrap(), "--strict");
        assert_eq!(argv[argv.len() - 2], "8");
    }

    #[test]
    fn test_path_passed_through_unchecked() {
        let command = MatcherCommand::new("./jlq", "f.jsonl", "a..b", ValueType::String, "x");
        assert_eq!(command.args()[2], "a..b");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            command().display(),
            "./jlq data.jsonl --path user.id --type number --value 42 --threads 1"
        );
    }
}
