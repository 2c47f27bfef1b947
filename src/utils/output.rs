use colored::*;
use std::io::{self, Write};

pub struct OutputStyle;

impl OutputStyle {
    pub fn index(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn path(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn command(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn tag(text: &str) -> ColoredString {
        text.cyan().bold()
    }

    /// Per-item banner printed before an external process runs
    pub fn header(text: &str) -> ColoredString {
        text.bright_magenta().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn write_field<W: Write + ?Sized>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
        writeln!(out, "{:>12}: {}", Self::label(label), value)
    }
}

/// Write a `N: value` line, the numbering used by every listing
pub fn write_indexed<W: Write + ?Sized>(out: &mut W, index: usize, value: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", OutputStyle::index(&index.to_string()), OutputStyle::path(value))
}

pub fn write_warning<W: Write + ?Sized>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "⚠️  {}", OutputStyle::warning(message))
}

pub fn write_error<W: Write + ?Sized>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "❌ {}", OutputStyle::error(message))
}

pub fn write_notice<W: Write + ?Sized>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", OutputStyle::muted(message))
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

#[cfg(test)]
pub(crate) fn plain_output() {
    colored::control::set_override(false);
}
