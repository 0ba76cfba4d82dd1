use crate::emit::{join_declarations, Declaration};
use crate::errors::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Declaration text, blocks separated by blank lines
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// JSON array of `{ family, function, arity, declaration }`
    Json,
}

pub trait OutputWriter {
    fn write_declarations(&mut self, declarations: &[Declaration]) -> Result<()>;
}

pub struct TypeScriptWriter<W: Write> {
    writer: W,
}

impl<W: Write> TypeScriptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TypeScriptWriter<W> {
    fn write_declarations(&mut self, declarations: &[Declaration]) -> Result<()> {
        // Rendered up front so a failed write never leaves half a declaration.
        let text = join_declarations(declarations);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_declarations(&mut self, declarations: &[Declaration]) -> Result<()> {
        let mut json = serde_json::to_string_pretty(declarations)?;
        json.push('\n');
        self.writer.write_all(json.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::TypeScript => Box::new(TypeScriptWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
