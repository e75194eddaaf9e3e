//! Minimal CLI: JSON example → (ts-interface | go-struct)
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, Args};
use colored::Colorize;

use crate::generate::Options;
use crate::generator::Registry;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate type declarations from an example JSON object
#[derive(Parser, Debug)]
#[command(name = "json-iface", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer declarations from a JSON document
    Generate(GenerateOut),
    /// list the available generators
    List(ListOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON document given inline; stdin is read when neither this nor --file is set
    json: Option<String>,

    /// One or more input files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., conflicts_with = "json")]
    file: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// generator to run (see `list`)
    #[arg(long, short, default_value = "ts-interface")]
    template: String,

    /// top-level declaration name (generator default if omitted)
    #[arg(long)]
    root_name: Option<String>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// print `Error: ...` on stdout and exit 0 when generation fails
    #[arg(long)]
    plain_errors: bool,

    /// report progress on stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(clap::Parser, Debug)]
struct ListOut {
    /// print as a JSON array
    #[arg(long)]
    json: bool,
}

/// One loaded document and where it came from.
#[derive(Debug)]
struct Source {
    label: String,
    text: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

const EXIT_GENERATE_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

impl InputSettings {
    fn load(&self) -> Result<Vec<Source>> {
        if let Some(json) = self.json.as_ref() {
            return Ok(vec![Source { label: "<argument>".to_owned(), text: json.clone() }]);
        }
        if self.file.is_empty() {
            let text = std::io::read_to_string(std::io::stdin())
                .context("failed to read standard input")?;
            return Ok(vec![Source { label: "<stdin>".to_owned(), text }]);
        }
        let source_paths = resolve_file_path_patterns(&self.file)
            .context("failed to resolve input file paths")?;
        source_paths
            .into_iter()
            .map(|source_path| {
                let text = std::fs::read_to_string(&source_path)
                    .with_context(|| format!("failed to read source file {}", source_path.display()))?;
                Ok(Source { label: source_path.to_string_lossy().to_string(), text })
            })
            .collect()
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> ExitCode {
        match self.execute() {
            Ok(code) => code,
            Err(error) => {
                eprintln!("{} {error:#}", "error:".red().bold());
                ExitCode::from(EXIT_USAGE)
            }
        }
    }
    fn execute(&self) -> Result<ExitCode> {
        let registry = Registry::default();
        match &self.cmd {
            Command::List(target) => {
                if target.json {
                    println!("{}", serde_json::to_string_pretty(&registry.list())?);
                } else {
                    for info in registry.list() {
                        println!("{} - {}", info.name.bold(), info.description);
                    }
                }
                Ok(ExitCode::SUCCESS)
            }
            Command::Generate(target) => target.execute(&registry),
        }
    }
}

impl GenerateOut {
    fn execute(&self, registry: &Registry) -> Result<ExitCode> {
        let generator = registry.get(&self.template).ok_or_else(|| {
            anyhow!(
                "template '{}' not found. Available templates: {}",
                self.template,
                registry.names().join(", ")
            )
        })?;
        let options = Options { root_name: self.root_name.clone() };
        let sources = self.input_settings.load()?;
        if self.verbose {
            eprintln!("{} {} on {} input(s)", "generating".green().bold(), generator.name(), sources.len());
        }

        let mut outputs = Vec::with_capacity(sources.len());
        let mut failed = false;
        for source in &sources {
            match generator.generate(&source.text, &options) {
                Ok(out) => {
                    if self.verbose {
                        eprintln!("  {} {} ({} lines)", "✓".green(), source.label, out.lines().count());
                    }
                    outputs.push(out);
                }
                Err(error) if self.plain_errors => outputs.push(format!("Error: {error}")),
                Err(error) => {
                    eprintln!("{} {} ({})", "Error:".red().bold(), error, source.label);
                    failed = true;
                }
            }
        }

        let rendered = outputs.join("\n\n");
        match self.out.as_ref() {
            Some(out) => write_output(out, &rendered)?,
            None if !outputs.is_empty() => println!("{rendered}"),
            None => {}
        }

        if failed {
            Ok(ExitCode::from(EXIT_GENERATE_FAILED))
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
