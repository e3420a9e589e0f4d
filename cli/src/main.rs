//! unlexical CLI - rich-text document conversion tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use unlexical::convert::{builder_for, MarkdownOptions, SourceFormat};
use unlexical::{detect_input, DecodeOptions, InputKind, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "unlexical")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert between Lexical rich-text JSON, plain text, and Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract summary text from a rich-text field
    Text {
        /// Input JSON or text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a document as multi-line plain text
    Plain {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Separator between top-level blocks
        #[arg(long, default_value = "\n\n")]
        separator: String,

        /// Keep leading and trailing whitespace
        #[arg(long)]
        no_trim: bool,
    },

    /// Build a document from text
    Build {
        /// Source text ("-" reads stdin)
        #[arg(value_name = "TEXT")]
        text: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Source format
        #[arg(long, value_enum, default_value = "plain")]
        format: BuildFormat,

        /// Shorthand for --format paragraphs
        #[arg(long, conflicts_with = "format")]
        paragraphs: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert Markdown to a document
    #[command(alias = "md")]
    Markdown {
        /// Input Markdown file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefix for relative image paths
        #[arg(long, env = "UNLEXICAL_IMAGE_PREFIX")]
        image_prefix: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate a document and show statistics
    Check {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Skip malformed nodes instead of failing
        #[arg(long)]
        lenient: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BuildFormat {
    /// Whole input as one text run
    Plain,
    /// One paragraph per line
    Paragraphs,
    /// Markdown structure
    Markdown,
}

impl From<BuildFormat> for SourceFormat {
    fn from(format: BuildFormat) -> Self {
        match format {
            BuildFormat::Plain => SourceFormat::Plain,
            BuildFormat::Paragraphs => SourceFormat::Paragraphs,
            BuildFormat::Markdown => SourceFormat::Markdown,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Plain {
            input,
            output,
            separator,
            no_trim,
        } => cmd_plain(&input, output.as_deref(), &separator, !no_trim),
        Commands::Build {
            text,
            output,
            format,
            paragraphs,
            compact,
        } => {
            let format = if paragraphs {
                BuildFormat::Paragraphs
            } else {
                format
            };
            cmd_build(&text, output.as_deref(), format, compact)
        }
        Commands::Markdown {
            input,
            output,
            image_prefix,
            compact,
        } => cmd_markdown(&input, output.as_deref(), image_prefix, compact),
        Commands::Check {
            input,
            lenient,
            json,
        } => cmd_check(&input, lenient, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    let text = unlexical::extract_text_from_str(&content);
    write_output(output, &text)?;
    Ok(())
}

fn cmd_plain(
    input: &Path,
    output: Option<&Path>,
    separator: &str,
    trim: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;

    // Lenient so that one bad node does not hide the rest of the document
    let options = DecodeOptions::new().lenient();
    let doc = unlexical::parse_str_with_options(&content, options)?;

    let render_options = RenderOptions::new()
        .with_block_separator(separator)
        .with_trim(trim);
    let text = unlexical::render::to_text(&doc, &render_options);

    write_output(output, &text)?;
    Ok(())
}

fn cmd_build(
    text: &str,
    output: Option<&Path>,
    format: BuildFormat,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = if text == "-" {
        read_input(Path::new("-"))?
    } else {
        text.to_string()
    };

    let builder = builder_for(format.into(), &MarkdownOptions::default());
    log::debug!("building with {} builder", builder.name());
    let doc = builder.build(&source);

    let json = unlexical::render::to_json(&doc, json_format(compact))?;
    write_output(output, &json)?;
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    image_prefix: Option<String>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = read_input(input)?;

    let mut options = MarkdownOptions::new();
    if let Some(prefix) = image_prefix {
        options = options.with_image_prefix(prefix);
    }

    let doc = unlexical::markdown_to_document(&markdown, &options);
    let json = unlexical::render::to_json(&doc, json_format(compact))?;

    write_output(output, &json)?;
    Ok(())
}

fn cmd_check(input: &Path, lenient: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;

    let kind = detect_input(&content);
    if kind != InputKind::Document {
        return Err(format!("Input is {}, not a rich-text document", kind).into());
    }

    let options = if lenient {
        DecodeOptions::new().lenient()
    } else {
        DecodeOptions::new()
    };
    let doc = unlexical::parse_str_with_options(&content, options)?;

    let text = unlexical::render::extract_document_text(&doc);
    let words = text.split_whitespace().count();
    let chars = text.chars().count();

    if json {
        let stats = serde_json::json!({
            "input": input.display().to_string(),
            "blocks": doc.block_count(),
            "nodes": doc.node_count(),
            "words": words,
            "characters": chars,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Input".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Nodes".bold(), doc.node_count());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);

    println!("\n{}", "Valid".green().bold());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unlexical".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Lexical rich-text conversion tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/unlexical".dimmed()
    );
    println!("License: MIT");
}
