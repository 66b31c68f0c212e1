//! Configuration for one run of the command-line tool.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// What the CLI should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Print the number of problematic characters
    Count,
    /// Print the text with problematic characters replaced
    Replace,
    /// Print the highlighted HTML fragment
    Annotate,
    /// Print character statistics
    #[default]
    Report,
    /// Print the character table
    Table,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "count" => Ok(Command::Count),
            "replace" => Ok(Command::Replace),
            "annotate" => Ok(Command::Annotate),
            "report" => Ok(Command::Report),
            "table" => Ok(Command::Table),
            other => Err(Error::InvalidArgument {
                name: "command".to_string(),
                reason: format!("unknown command '{}'", other),
            }),
        }
    }
}

/// Output encoding for `report` and `table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidArgument {
                name: "--format".to_string(),
                reason: format!("expected text or json, found '{}'", other),
            }),
        }
    }
}

/// Settings for a CLI run.
#[derive(Debug, Clone, Default)]
pub struct FixConfig {
    /// Operation to perform.
    pub command: Command,

    /// Output encoding.
    pub format: OutputFormat,

    /// Input file (None = stdin).
    pub input: Option<PathBuf>,

    /// Output file (None = stdout).
    pub output: Option<PathBuf>,

    /// Class prefix for annotations (None = Tailwind classes).
    pub class_prefix: Option<String>,

    /// Use the built-in sample text instead of reading input.
    pub use_sample: bool,

    /// Print progress to stderr.
    pub verbose: bool,
}

impl FixConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation.
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = command;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Read from a file instead of stdin.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Write to a file instead of stdout.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Use `{prefix}{category}` classes for annotations.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Use the built-in sample text.
    pub fn with_sample(mut self, enable: bool) -> Self {
        self.use_sample = enable;
        self
    }

    /// Enable verbose output.
    pub fn with_verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    /// Parse command-line arguments (without the program name).
    ///
    /// ```
    /// use llm_textfix::config::{Command, FixConfig, OutputFormat};
    ///
    /// let config = FixConfig::from_args(["replace", "--input", "in.txt"]).unwrap();
    /// assert_eq!(config.command, Command::Replace);
    /// assert_eq!(config.format, OutputFormat::Text);
    /// assert!(config.input.is_some());
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::new();
        let mut command_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--input" | "-i" => config.input = Some(PathBuf::from(required(arg, args.next())?)),
                "--output" | "-o" => config.output = Some(PathBuf::from(required(arg, args.next())?)),
                "--format" | "-f" => config.format = required(arg, args.next())?.parse()?,
                "--class-prefix" => config.class_prefix = Some(required(arg, args.next())?),
                "--sample" => config.use_sample = true,
                "--verbose" | "-v" => config.verbose = true,
                flag if flag.starts_with('-') => {
                    return Err(Error::InvalidArgument {
                        name: flag.to_string(),
                        reason: "unknown option".to_string(),
                    });
                },
                command if !command_seen => {
                    config.command = command.parse()?;
                    command_seen = true;
                },
                extra => {
                    return Err(Error::InvalidArgument {
                        name: extra.to_string(),
                        reason: "unexpected positional argument".to_string(),
                    });
                },
            }
        }

        Ok(config)
    }
}

fn required<S: AsRef<str>>(name: &str, value: Option<S>) -> Result<String> {
    value
        .map(|v| v.as_ref().to_string())
        .ok_or_else(|| Error::InvalidArgument {
            name: name.to_string(),
            reason: "missing value".to_string(),
        })
}
