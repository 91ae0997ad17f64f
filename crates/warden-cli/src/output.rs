//! Output formatting: ordered key/value records rendered in one of three
//! selectable styles.

use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use warden_common::error::{Result, WardenError};

/// Rendering mode for command output, chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Field values only, space-separated, one record per line.
    Values,
    /// `name=value` pairs, space-separated, one record per line.
    Pairs,
    /// `name: value`, one field per line, blank line between records.
    Long,
}

impl FromStr for OutputStyle {
    type Err = WardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "values" => Ok(Self::Values),
            "pairs" => Ok(Self::Pairs),
            "long" => Ok(Self::Long),
            other => Err(WardenError::invalid_argument(format!(
                "invalid style '{other}': try 'values', 'long', or 'pairs'"
            ))),
        }
    }
}

/// One row of command output: field names and values in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRecord {
    fields: Vec<(String, String)>,
}

impl OutputRecord {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field, preserving insertion order.
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Display) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    /// Returns true if no fields have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Write sink handed to command handlers: renders records in the configured
/// style, or dumps raw bytes for binary output.
pub struct OutputSink<'w> {
    style: OutputStyle,
    out: &'w mut dyn Write,
}

impl<'w> OutputSink<'w> {
    /// Creates a sink rendering in `style` onto `out`.
    pub fn new(style: OutputStyle, out: &'w mut dyn Write) -> Self {
        Self { style, out }
    }

    /// Renders one record in the configured style.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn record(&mut self, record: &OutputRecord) -> Result<()> {
        match self.style {
            OutputStyle::Values => {
                let line = record
                    .fields
                    .iter()
                    .map(|(_, value)| value.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.out, "{line}").map_err(sink_error)
            }
            OutputStyle::Pairs => {
                let line = record
                    .fields
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.out, "{line}").map_err(sink_error)
            }
            OutputStyle::Long => {
                for (name, value) in &record.fields {
                    writeln!(self.out, "{name}: {value}").map_err(sink_error)?;
                }
                writeln!(self.out).map_err(sink_error)
            }
        }
    }

    /// Writes raw serialized bytes, bypassing the style entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes).map_err(sink_error)
    }
}

fn sink_error(source: std::io::Error) -> WardenError {
    WardenError::Io {
        path: PathBuf::from("<output>"),
        source,
    }
}
