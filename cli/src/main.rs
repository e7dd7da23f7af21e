//! md2docx CLI - Markdown to DOCX conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use md2docx::detect::is_markdown_path;
use md2docx::{
    parse_file, save_docx, Block, ConversionStats, JsonFormat, LayoutMode, Metadata, ParseOptions,
    RenderOptions, StyleSheet,
};

#[derive(Parser)]
#[command(name = "md2docx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert structured Markdown to DOCX", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output DOCX file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more Markdown files to DOCX
    Convert {
        /// Input Markdown files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (single input) or directory (several inputs)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Show the classified block structure of a Markdown file
    Inspect {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Layout mode
        #[arg(long, value_enum, default_value = "auto")]
        mode: ModeArg,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default style sheet as JSON
    Styles {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct ConvertArgs {
    /// Layout mode
    #[arg(long, value_enum, default_value = "auto")]
    mode: ModeArg,

    /// Page-break marker for flat-pages mode
    #[arg(long, value_name = "MARKER")]
    delimiter: Option<String>,

    /// Drop text before the first numbered section (hierarchical mode)
    #[arg(long)]
    skip_preamble: bool,

    /// Add a cover page
    #[arg(long)]
    cover: bool,

    /// Add a table of contents page
    #[arg(long)]
    toc: bool,

    /// Style sheet JSON file
    #[arg(long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// Document title (defaults to the input file name)
    #[arg(long, env = "MD2DOCX_TITLE")]
    title: Option<String>,

    /// Document author
    #[arg(long, env = "MD2DOCX_AUTHOR")]
    author: Option<String>,

    /// Document version shown on the cover page
    #[arg(long = "doc-version", value_name = "VERSION")]
    doc_version: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Detect from content
    Auto,
    /// Split on the page-break marker
    Flat,
    /// Split on numbered section headings
    Hierarchical,
}

impl From<ModeArg> for Option<LayoutMode> {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => None,
            ModeArg::Flat => Some(LayoutMode::FlatPages),
            ModeArg::Hierarchical => Some(LayoutMode::Hierarchical),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            convert,
        }) => cmd_convert(&inputs, output.as_deref(), &convert),
        Some(Commands::Inspect { input, mode, json }) => cmd_inspect(&input, mode, json),
        Some(Commands::Styles { output }) => cmd_styles(output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&[input], cli.output.as_deref(), &cli.convert)
            } else {
                println!("{}", "Usage: md2docx <FILE> [OUTPUT]".yellow());
                println!("       md2docx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(mode: ModeArg, args: Option<&ConvertArgs>) -> ParseOptions {
    let mut options = ParseOptions::new();
    options.mode = mode.into();

    if let Some(args) = args {
        if let Some(ref delimiter) = args.delimiter {
            options = options.with_page_delimiter(delimiter.clone());
        }
        if args.skip_preamble {
            options = options.skip_preamble();
        }
    }
    options
}

fn render_options(args: &ConvertArgs) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new()
        .with_cover_page(args.cover)
        .with_table_of_contents(args.toc);

    if let Some(ref path) = args.styles {
        options = options.with_styles(StyleSheet::load(path)?);
    }
    Ok(options)
}

fn metadata_for(input: &Path, args: &ConvertArgs) -> Metadata {
    let title = args.title.clone().unwrap_or_else(|| {
        input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    });
    let mut metadata = Metadata::with_title(title).created_now();
    metadata.author = args.author.clone();
    metadata.version = args.doc_version.clone();
    metadata
}

/// Output path for `input`: an explicit file, a file inside an explicit
/// directory, or the input path with a `.docx` extension.
fn output_path(input: &Path, output: Option<&Path>, multiple: bool) -> PathBuf {
    let file_name = input.with_extension("docx");
    let file_name = file_name.file_name().unwrap_or_default();

    match output {
        Some(out) if multiple || out.is_dir() => out.join(file_name),
        Some(out) => out.to_path_buf(),
        None => input.with_extension("docx"),
    }
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let multiple = inputs.len() > 1;
    if multiple {
        if let Some(dir) = output {
            fs::create_dir_all(dir)?;
        }
    }

    let parse_opts = parse_options(args.mode, Some(args));
    let render_opts = render_options(args)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        pb.set_message(format!("Converting {}", input.display()));
        if !is_markdown_path(input) {
            log::warn!("{} does not look like a Markdown file", input.display());
        }

        let mut doc = parse_file(input, &parse_opts)?;
        doc.metadata = metadata_for(input, args);
        log::debug!(
            "{}: {} sections in {} mode",
            input.display(),
            doc.section_count(),
            doc.mode.name()
        );

        let target = output_path(input, output, multiple);
        save_docx(&doc, &target, &render_opts)?;
        written.push(target);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn cmd_inspect(input: &Path, mode: ModeArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input, &parse_options(mode, None))?;

    if json {
        println!("{}", md2docx::render::to_json(&doc, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Document Information".green().bold());
    println!("  {}: {}", "File".cyan(), input.display());
    println!("  {}: {}", "Mode".cyan(), doc.mode.name());
    println!();

    for (i, section) in doc.sections.iter().enumerate() {
        let title = section.title.as_deref().unwrap_or("(untitled)");
        println!("{} {} {}", "Section".green(), i + 1, title.bold());
        for block in section.iter_blocks() {
            println!("  {}", describe_block(block));
        }
    }

    println!();
    println!("{}", "Statistics".green().bold());
    for line in ConversionStats::from_document(&doc).to_string().lines() {
        println!("  {}", line);
    }

    Ok(())
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("{} {}", format!("H{}", level).cyan(), text),
        Block::Paragraph { runs } => {
            let text: String = runs
                .iter()
                .map(|r| {
                    if r.bold {
                        r.text.bold().to_string()
                    } else {
                        r.text.clone()
                    }
                })
                .collect();
            format!("{} {}", "P ".dimmed(), text)
        }
        Block::BulletItem { level, text, .. } => {
            format!("{}{} {}", "  ".repeat(usize::from(*level) - 1), "•".yellow(), text)
        }
        Block::Rule => "───".dimmed().to_string(),
        Block::PageBreak => "[page break]".dimmed().to_string(),
        Block::BlankLine => String::new(),
    }
}

fn cmd_styles(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = StyleSheet::default();
    if let Some(path) = output {
        sheet.save(path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", sheet.to_json()?);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "md2docx".green().bold(), env!("CARGO_PKG_VERSION"));
}
