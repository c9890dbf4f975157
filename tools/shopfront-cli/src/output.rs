//! Output formatting for the CLI.

use console::{pad_str, style, Alignment};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    rtl: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            rtl: false,
        }
    }

    /// Right-align table columns for right-to-left languages.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", self.format_row(cols, widths));
    }

    /// Pad each column to its width by visible length, ignoring ANSI styling.
    fn format_row(&self, cols: &[&str], widths: &[usize]) -> String {
        let align = if self.rtl {
            Alignment::Right
        } else {
            Alignment::Left
        };
        cols.iter()
            .zip(widths.iter())
            .map(|(col, width)| pad_str(col, *width, align, None).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price styled for terminal display.
pub fn price(amount: &str) -> String {
    style(amount).green().bold().to_string()
}

/// Capacity column value, `-` when unknown.
pub fn capacity(kw: Option<f64>) -> String {
    kw.map(|kw| format!("{} kW", kw)).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(capacity(Some(5.0)), "5 kW");
        assert_eq!(capacity(Some(2.5)), "2.5 kW");
        assert_eq!(capacity(None), "-");
    }

    #[test]
    fn test_styled_columns_align() {
        let output = Output::new(false, false);
        let styled = style("$10.00").green().bold().force_styling(true).to_string();
        assert!(styled.len() > "$10.00".len());

        let plain_row = output.format_row(&["A", "$10.00", "x"], &[4, 10, 1]);
        let styled_row = output.format_row(&["A", &styled, "x"], &[4, 10, 1]);
        assert_eq!(
            console::measure_text_width(&styled_row),
            console::measure_text_width(&plain_row)
        );
        assert_eq!(console::strip_ansi_codes(&styled_row), plain_row);
    }

    #[test]
    fn test_rtl_right_aligns() {
        let output = Output::new(false, false).with_rtl(true);
        assert_eq!(output.format_row(&["ab", "c"], &[4, 3]), "  ab    c");
    }

    #[test]
    fn test_modes() {
        assert!(!Output::new(true, false).is_json());
        assert!(Output::new(false, true).spinner("x").is_hidden());
    }
}
