//! CLI tool for compiling lesson markup into slide models.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slidemark_core::{Compilation, Compiler, CompilerConfig, SAMPLE_LESSON};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "slidemark.json";

/// Compile lesson markup files into slide models.
#[derive(Parser, Debug)]
#[command(name = "slidemark")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input lesson file(s)
    #[arg(required_unless_present = "sample")]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// JSON config file (default: slidemark.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Warn about image paths that do not exist
    #[arg(long)]
    check_images: bool,

    /// Print the sample lesson and exit
    #[arg(long)]
    sample: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON of the compiled model
    Json,
    /// Human-readable slide and diagnostic listing
    Summary,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "slides.json",
            OutputFormat::Summary => "summary.txt",
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.sample {
        print!("{}", SAMPLE_LESSON);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(args.config.as_deref())?;
    let compiler = Compiler::with_config(config);
    let mut failed = false;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &compiler) {
            Ok(compilation) => {
                for diagnostic in &compilation.diagnostics {
                    eprintln!("{}: {}", input_path.display(), diagnostic);
                }
                if compilation.has_errors() {
                    failed = true;
                }

                let output = render(&compilation, args.format)?;
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path =
                        get_output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Load the explicit config file, or the default one when it exists.
fn load_config(path: Option<&Path>) -> Result<CompilerConfig> {
    match path {
        Some(path) => CompilerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            log::debug!("Using {}", DEFAULT_CONFIG_FILE);
            CompilerConfig::load(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load config {}", DEFAULT_CONFIG_FILE))
        }
        None => Ok(CompilerConfig::default()),
    }
}

/// Compile a single lesson file.
fn process_file(input_path: &Path, args: &Args, compiler: &Compiler) -> Result<Compilation> {
    let bytes = fs::read(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let compilation = compiler
        .compile_bytes(&bytes)
        .with_context(|| format!("Failed to compile {}", input_path.display()))?;

    if args.verbose {
        eprintln!(
            "  Compiled {} slides, {} diagnostics",
            compilation.slide_count(),
            compilation.diagnostics.len()
        );
    }

    if args.check_images {
        let base = input_path.parent().unwrap_or_else(|| Path::new("."));
        for missing in missing_images(&compilation, base) {
            log::warn!("{}: image not found: {}", input_path.display(), missing);
        }
    }

    Ok(compilation)
}

/// Image paths referenced by the document that do not exist under `base`.
fn missing_images(compilation: &Compilation, base: &Path) -> Vec<String> {
    compilation
        .document
        .slides
        .iter()
        .flat_map(|slide| {
            slide
                .images
                .iter()
                .map(move |image| (slide.number, &image.path))
        })
        .filter(|(_, path)| !base.join(path).exists())
        .map(|(number, path)| format!("Slide {}: {}", number, path))
        .collect()
}

fn render(compilation: &Compilation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(compilation)
                .context("Failed to serialize compilation")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Summary => Ok(render_summary(compilation)),
    }
}

/// One line per slide, diagnostics indented beneath their slide.
fn render_summary(compilation: &Compilation) -> String {
    let mut out = String::new();

    for slide in &compilation.document.slides {
        let _ = writeln!(
            out,
            "Slide {} [{}] {}",
            slide.number, slide.layout, slide.title
        );
        for diagnostic in compilation
            .diagnostics
            .iter()
            .filter(|d| d.slide_number == Some(slide.number))
        {
            let _ = writeln!(out, "  {}", diagnostic);
        }
    }

    for diagnostic in compilation
        .diagnostics
        .iter()
        .filter(|d| d.slide_number.is_none())
    {
        let _ = writeln!(out, "{}", diagnostic);
    }

    let _ = writeln!(
        out,
        "{} slide(s), {} error(s), {} warning(s)",
        compilation.slide_count(),
        compilation.errors().count(),
        compilation.warnings().count()
    );

    out
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to {}", path.display()))
}
