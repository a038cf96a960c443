//! Highlight command implementation.
//!
//! Classifies Dylan source files and prints the result as a token listing,
//! a JSON report, or the source re-emitted with terminal colors.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use dylex_lex::{Category, Highlighter, LineTokens, Token};
use dylex_util::FxHashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_source, OutputFormat, STDIN_PATH};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{DylextError, Result};

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Files to classify; `-` reads standard input.
    pub files: Vec<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// List uncolored tokens too.
    pub all: bool,
    /// Emit no SGR escapes in `ansi` output.
    pub no_color: bool,
    /// Loaded configuration.
    pub config: Config,
}

/// One classified input.
struct FileReport {
    name: String,
    source: String,
    lines: Vec<LineTokens>,
}

impl FileReport {
    /// Source lines paired with their tokens.
    fn lines(&self) -> impl Iterator<Item = (&str, &LineTokens)> {
        self.source.lines().zip(&self.lines)
    }

    /// Source lines with their terminators kept, paired with their tokens.
    fn raw_lines(&self) -> impl Iterator<Item = (&str, &LineTokens)> {
        self.source.split_inclusive('\n').zip(&self.lines)
    }
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: &'a str,
    lines: Vec<JsonLine<'a>>,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    line: u32,
    tokens: Vec<JsonToken<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    start: usize,
    end: usize,
    category: Option<Category>,
    text: &'a str,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl HighlightCommand {
    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Execute the command, writing to `out`.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let start_time = Instant::now();
        self.validate_inputs()?;

        let reports = self
            .args
            .files
            .iter()
            .map(|path| self.classify(path))
            .collect::<Result<Vec<_>>>()?;

        match self.format() {
            OutputFormat::Text => self.write_text(out, &reports)?,
            OutputFormat::Json => self.write_json(out, &reports)?,
            OutputFormat::Ansi => self.write_ansi(out, &reports)?,
        }

        info!(
            files = reports.len(),
            format = %self.format(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "highlight finished"
        );
        Ok(())
    }

    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.highlight.format)
    }

    fn show_all(&self) -> bool {
        self.args.all || self.args.config.highlight.show_whitespace
    }

    fn validate_inputs(&self) -> Result<()> {
        let stdin_count = self
            .args
            .files
            .iter()
            .filter(|path| path.as_os_str() == STDIN_PATH)
            .count();
        if stdin_count > 1 {
            return Err(DylextError::Validation(
                error_messages::STDIN_REPEATED.to_string(),
            ));
        }
        self.args.config.validate()
    }

    fn classify(&self, path: &Path) -> Result<FileReport> {
        let source = read_source(path)?;
        let mut highlighter = Highlighter::new(self.args.config.analyzer_config());
        let lines = highlighter.highlight_document(&source);
        debug!(
            file = %path.display(),
            lines = lines.len(),
            body = highlighter.state().in_body(),
            "file classified"
        );
        Ok(FileReport {
            name: path.display().to_string(),
            source,
            lines,
        })
    }

    /// Tokens worth listing: all of them with `--all`, otherwise the colored
    /// ones.
    fn listed<'t>(&self, tokens: &'t [Token]) -> impl Iterator<Item = &'t Token> {
        let show_all = self.show_all();
        tokens
            .iter()
            .filter(move |token| show_all || token.category.is_some())
    }

    fn write_text(&self, out: &mut dyn Write, reports: &[FileReport]) -> Result<()> {
        for report in reports {
            if reports.len() > 1 {
                writeln!(out, "==> {} <==", report.name)?;
            }
            for (line, tokens) in report.lines() {
                for token in self.listed(&tokens.tokens) {
                    let category = token.category.map_or("-", Category::as_str);
                    let text = token.text(line).unwrap_or_default();
                    writeln!(out, "{}\t{}\t{}", token.span, category, text)?;
                }
            }
        }
        Ok(())
    }

    fn write_json(&self, out: &mut dyn Write, reports: &[FileReport]) -> Result<()> {
        let files: Vec<JsonFile<'_>> = reports
            .iter()
            .map(|report| JsonFile {
                file: &report.name,
                lines: report
                    .lines()
                    .map(|(line, tokens)| JsonLine {
                        line: tokens.line,
                        tokens: self
                            .listed(&tokens.tokens)
                            .map(|token| JsonToken {
                                start: token.span.start,
                                end: token.span.end,
                                category: token.category,
                                text: token.text(line).unwrap_or_default(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        serde_json::to_writer_pretty(&mut *out, &files)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_ansi(&self, out: &mut dyn Write, reports: &[FileReport]) -> Result<()> {
        let palette: FxHashMap<Category, &str> = if self.args.no_color {
            FxHashMap::default()
        } else {
            self.args.config.palette()?
        };

        for report in reports {
            for (raw, tokens) in report.raw_lines() {
                let body = raw.strip_suffix('\n').unwrap_or(raw);
                let line = body.strip_suffix('\r').unwrap_or(body);
                for token in &tokens.tokens {
                    let text = token.text(line).unwrap_or_default();
                    match token.category.and_then(|c| palette.get(&c)) {
                        Some(code) => write!(out, "\x1b[{}m{}\x1b[0m", code, text)?,
                        None => write!(out, "{}", text)?,
                    }
                }
                out.write_all(raw[line.len()..].as_bytes())?;
            }
        }
        Ok(())
    }
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    HighlightCommand::new(args).execute()
}
