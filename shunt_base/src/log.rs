//! Provides the types rendering diagnostics about an expression to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints an expression with the character at a given byte
/// offset highlighted.
///
/// The offset may equal the length of the expression, in which case the end of the expression is
/// pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The expression to be printed.
    pub source: &'a str,

    /// The byte offset of the highlighted character.
    pub offset: usize,

    /// The help message to be displayed under the highlighted character.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        // columns count characters and start at 1
        let column = self
            .source
            .char_indices()
            .take_while(|(index, _)| *index < self.offset)
            .count()
            + 1;

        writeln!(
            f,
            "  {} expression:1:{column}",
            Style::Bold.with(Color::Cyan.with("-->"))
        )?;
        writeln!(f, "  {pipe}")?;

        write!(f, "{} {pipe} ", Style::Bold.with(Color::Cyan.with(1)))?;
        for (index, char) in self.source.char_indices() {
            if index == self.offset {
                write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                )?;
            } else {
                write!(f, "{char}")?;
            }
        }
        writeln!(f)?;

        write!(f, "  {pipe} {:width$}", "", width = column - 1)?;
        write!(f, "{}", Style::Bold.with(Color::Red.with("^")))?;
        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }
        writeln!(f)
    }
}
