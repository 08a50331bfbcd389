use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod extract;
mod formatters;

use crate::core::CodebaseAnalyzer;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tracery",
    version = "0.1.0",
    author = "tracery developers",
    about = "Textual import dependency graph extraction for source trees"
)]
struct Cli {
    /// Input directory to analyze
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "TRACERY.md")]
    output: PathBuf,

    /// Comma-separated list of languages to analyze
    #[arg(
        short,
        long,
        value_name = "LANGS",
        value_delimiter = ',',
        default_value = "odin,go,zig,c"
    )]
    languages: Vec<String>,

    /// Output format: markdown, json-compact
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Markdown,
    JsonCompact,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::JsonCompact => "json-compact",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        languages,
        format,
    } = cli;

    let start_time = Instant::now();

    let normalized_languages: Vec<String> = languages
        .into_iter()
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
        .collect();
    let language_refs: Vec<&str> = normalized_languages.iter().map(String::as_str).collect();

    println!("TRACERY - Import Graph Extraction");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Format: {}", format.as_str());
    println!("Languages: {:?}", normalized_languages);

    let mut analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze(&input, &language_refs)?;

    let mut generated_output = output.clone();

    match format {
        OutputFormat::Markdown => {
            use crate::formatters::ReportFormatter;
            ReportFormatter::new().format_to_file(&graph, &output)?;
        }
        OutputFormat::JsonCompact => {
            use crate::formatters::JsonCompactFormatter;
            let formatter = JsonCompactFormatter::new();
            generated_output = output.with_extension("json");
            formatter.format_to_file(&graph, &generated_output)?;
        }
    }

    let total_time = start_time.elapsed();
    println!("Generated {}", generated_output.display());
    println!("Total execution time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
