//! Output formatting for CLI results.
//!
//! Rows are collected into a [`ResultSet`] and written as a table, bare
//! text, CSV, or JSON Lines.

use std::io::Write;

use clap::ValueEnum;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result values only, tab-separated, one row per line (default)
    Text,
    /// Pretty-printed table
    Table,
    /// Comma-separated values
    Csv,
    /// JSON Lines (one JSON object per row)
    Json,
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Number(u64),
    Bool(bool),
    /// Absent optional field
    Null,
}

impl Value {
    fn to_display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::Value::Number((*n).into()),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Null => serde_json::Value::Null,
        }
    }
}

/// Rows sharing one set of column names. The first column is the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    columns: &'static [&'static str],
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new(columns: &'static [&'static str]) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats CLI results for output.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a result set and write to the given writer.
    pub fn write<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(results, writer),
            OutputFormat::Table => self.write_table(results, writer),
            OutputFormat::Csv => self.write_csv(results, writer),
            OutputFormat::Json => self.write_json(results, writer),
        }
    }

    fn write_text<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        for row in &results.rows {
            // The input column is omitted; callers know what they passed in
            let values: Vec<String> = row.iter().skip(1).map(Value::to_display).collect();
            writeln!(writer, "{}", values.join("\t"))?;
        }
        Ok(())
    }

    fn write_table<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        use comfy_table::{Cell, Table};

        let mut table = Table::new();
        table.set_header(results.columns.iter().map(|name| Cell::new(name)));

        for row in &results.rows {
            table.add_row(row.iter().map(|value| Cell::new(value.to_display())));
        }

        writeln!(writer, "{table}")
    }

    fn write_csv<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", results.columns.join(","))?;

        for row in &results.rows {
            let values: Vec<String> = row
                .iter()
                .map(|value| {
                    let value = value.to_display();
                    // Escape commas and quotes
                    if value.contains(',') || value.contains('"') || value.contains('\n') {
                        format!("\"{}\"", value.replace('"', "\"\""))
                    } else {
                        value
                    }
                })
                .collect();
            writeln!(writer, "{}", values.join(","))?;
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        for row in &results.rows {
            let mut obj = serde_json::Map::new();
            for (name, value) in results.columns.iter().zip(row) {
                // Absent optional fields are left out rather than written as null
                if *value != Value::Null {
                    obj.insert((*name).to_string(), value.to_json());
                }
            }
            writeln!(writer, "{}", serde_json::Value::Object(obj))?;
        }
        Ok(())
    }
}
