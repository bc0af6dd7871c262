use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::{borrow::Cow, fmt::Write as _, time::Duration};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "   ";

pub struct TablePrint {
    headers: Vec<Cow<'static, str>>,
    rows: Vec<Vec<String>>,
}

impl TablePrint {
    pub fn new_with_headers<S: Into<Cow<'static, str>>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(|i| i.into()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Column widths ignore ANSI color codes so colored cells stay aligned.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();

        for row in &self.rows {
            for (width, item) in widths.iter_mut().zip(row) {
                *width = (*width).max(visible_width(item));
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        for row in std::iter::once(&header).chain(&self.rows) {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(item, width)| {
                    let padding = width.saturating_sub(visible_width(item));
                    format!("{item}{:padding$}", "")
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            let _ = writeln!(out, "{}", line.trim_end());
        }

        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi_escapes::strip_str(s).width()
}

/// Prints `label: value` lines, labels dimmed.
pub fn print_fields(fields: &[(&str, String)]) {
    for (label, value) in fields {
        println!("  {} {}", format!("{label}:").dimmed(), value);
    }
}

pub fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(50));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message);
    pb
}

pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
