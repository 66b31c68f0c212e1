//! Fix problematic characters in LLM output
//!
//! Reads text from a file or stdin and counts, replaces, annotates or reports
//! the smart quotes, dashes and invisible spaces it contains.
//!
//! Usage:
//!   llm_textfix [count|replace|annotate|report|table] [OPTIONS]
//!
//! Options:
//!   -i, --input PATH        read from PATH instead of stdin
//!   -o, --output PATH       write to PATH instead of stdout
//!   -f, --format FMT        text (default) or json, for report and table
//!       --class-prefix P    annotate with `{P}{category}` classes instead of Tailwind
//!       --sample            use the built-in sample text as input
//!   -v, --verbose           print a summary to stderr
//!
//! Logging is controlled with RUST_LOG (e.g. RUST_LOG=llm_textfix=debug).

use llm_textfix::config::{Command, FixConfig, OutputFormat};
use llm_textfix::sample::SAMPLE_TEXT;
use llm_textfix::{annotate, annotate_with, count, replace, table, ClassPrefixStyle, Result, TextReport};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::time::Instant;

fn read_input(config: &FixConfig) -> Result<String> {
    if config.use_sample {
        return Ok(SAMPLE_TEXT.to_string());
    }

    let bytes = match &config.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        },
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!(
                "Input is not valid UTF-8 (first bad byte at {}), decoding lossily",
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        },
    }
}

fn render_table(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = table::entries().collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        },
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in table::entries() {
                out.push_str(&format!(
                    "{}  {:<12} {:<42} {:?}\n",
                    entry.code_label(),
                    entry.category,
                    entry.name,
                    entry.replacement
                ));
            }
            Ok(out)
        },
    }
}

fn render(config: &FixConfig, text: &str) -> Result<String> {
    let output = match config.command {
        Command::Count => format!("{}\n", count(text)),
        Command::Replace => replace(text),
        Command::Annotate => match &config.class_prefix {
            Some(prefix) => annotate_with(text, &ClassPrefixStyle::new(prefix.as_str())),
            None => annotate(text),
        },
        Command::Report => {
            let report = TextReport::analyze(text);
            match config.format {
                OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => report.to_text(),
            }
        },
        Command::Table => render_table(config.format)?,
    };
    Ok(output)
}

fn write_output(config: &FixConfig, output: &str) -> Result<()> {
    match &config.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(output.as_bytes())?;
        },
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(output.as_bytes())?;
            handle.flush()?;
        },
    }
    Ok(())
}

fn run(config: &FixConfig) -> Result<()> {
    let start = Instant::now();

    let text = if config.command == Command::Table {
        String::new()
    } else {
        read_input(config)?
    };
    log::debug!("Read {} bytes of input", text.len());

    let output = render(config, &text)?;
    write_output(config, &output)?;

    if config.verbose {
        eprintln!(
            "{:?}: {} chars in, {} problematic, {} bytes out in {:?}",
            config.command,
            text.chars().count(),
            count(&text),
            output.len(),
            start.elapsed()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let config = match FixConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: llm_textfix [count|replace|annotate|report|table] [-i PATH] [-o PATH] [-f text|json] [--class-prefix P] [--sample] [-v]");
            std::process::exit(2);
        },
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
