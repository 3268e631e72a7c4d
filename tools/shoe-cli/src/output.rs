//! Output formatting for the CLI.

use console::{style, Term};

use shoe_catalog::Variant;

/// Output handler for CLI messages.
///
/// Status messages go to the terminal; rendered documents go to stdout
/// untouched so they can be piped.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    stdout: Term,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            stdout: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("✓").green(), msg);
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

    /// Write a rendered document to stdout as-is.
    pub fn raw(&self, text: &str) -> std::io::Result<()> {
        self.stdout.write_line(text)
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad columns to the given widths. Padding is applied before styling so
/// escape codes do not skew alignment.
pub fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Colored variant label.
pub fn variant_badge(variant: Variant) -> String {
    match variant {
        Variant::OnSale => style(variant.as_str()).magenta().to_string(),
        Variant::NewRelease => style(variant.as_str()).blue().to_string(),
        Variant::Default => style(variant.as_str()).dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["a", "bb"], &[3, 2]), "a    bb");
    }

    #[test]
    fn test_variant_badge_keeps_label() {
        console::set_colors_enabled(false);
        assert_eq!(variant_badge(Variant::OnSale), "on-sale");
        assert_eq!(variant_badge(Variant::Default), "default");
    }
}
