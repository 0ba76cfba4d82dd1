use crate::config::load_config;
use crate::emit::emit;
use crate::io::{create_writer, open_destination, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct GenerateConfig {
    pub overloads: Option<i64>,
    pub families: Vec<String>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Validate everything, render everything, then write once.
pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    let generator = load_config(config.config.as_deref())?.with_max_arity(config.overloads);
    let families = generator.select(&config.families)?;
    let declarations = emit(generator.max_arity, &families)?;

    let destination = open_destination(config.output.as_deref()).with_context(|| {
        match &config.output {
            Some(path) => format!("failed to open {}", path.display()),
            None => "failed to open stdout".to_string(),
        }
    })?;
    create_writer(config.format, destination).write_declarations(&declarations)?;

    if let Some(path) = &config.output {
        tracing::info!(path = %path.display(), "wrote declarations");
    }
    Ok(())
}
