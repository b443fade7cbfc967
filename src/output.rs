//! Report sinks: where the runner's two output streams go.
//!
//! The runner formats every line itself; a sink only routes finished lines
//! to an informational stream or an error stream. [`ConsoleSink`] maps the
//! streams onto stdout/stderr with optional color, [`ReportBuffer`]
//! collects lines for programmatic capture and for the crate's own tests.

/// Destination for finished report lines.
pub trait ReportSink {
    /// Informational stream: `ok` lines and the success summary.
    fn info(&mut self, line: &str);
    /// Error stream: `fail` lines, failure details, the failure summary.
    fn error(&mut self, line: &str);
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// Console sink: info lines to stdout, error lines to stderr, with the
/// `ok`/`fail` status words colorized when writing to a terminal.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn paint_status(&self, line: &str, status: &str, color: &str) -> String {
        match line.strip_prefix(status) {
            Some(rest) if rest.starts_with(' ') => {
                format!("{}{}", self.colorize(status, color), rest)
            }
            _ => line.to_string(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stderr))
    }
}

impl ReportSink for ConsoleSink {
    fn info(&mut self, line: &str) {
        println!("{}", self.paint_status(line, "ok", GREEN));
    }

    fn error(&mut self, line: &str) {
        eprintln!("{}", self.paint_status(line, "fail", RED));
    }
}

/// Which stream a captured line was emitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Info,
    Error,
}

/// ReportBuffer: collects report lines for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct ReportBuffer {
    lines: Vec<(Channel, String)>,
}

impl ReportBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured lines in emission order, tagged with their stream.
    pub fn lines(&self) -> &[(Channel, String)] {
        &self.lines
    }

    /// All captured text, both streams interleaved in emission order.
    pub fn as_text(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|(_, line)| line.as_str()).collect();
        texts.join("\n")
    }
}

impl ReportSink for ReportBuffer {
    fn info(&mut self, line: &str) {
        self.lines.push((Channel::Info, line.to_string()));
    }

    fn error(&mut self, line: &str) {
        self.lines.push((Channel::Error, line.to_string()));
    }
}
