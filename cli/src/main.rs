//! docsift CLI - PDF outline and relevance extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsift::{
    analyze_files, extract_outline_with_options, extract_outlines, find_pdfs, render, Error,
    JsonFormat, Outline, OutlineOptions, RelevanceOptions, RelevanceReport,
};

/// File the relevance report is written to.
const REPORT_FILE: &str = "analysis_result.json";

#[derive(Parser)]
#[command(name = "docsift")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract PDF outlines and rank sections for a persona", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract title and H1-H3 headings from PDFs
    Outline {
        /// Input PDF file or directory of PDFs
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process documents in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Rank document sections for a persona and job to be done
    Analyze {
        /// Directory of PDFs (may hold persona.txt and job.txt)
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Persona description (default: INPUT_DIR/persona.txt)
        #[arg(long, env = "DOCSIFT_PERSONA")]
        persona: Option<String>,

        /// Job to be done (default: INPUT_DIR/job.txt)
        #[arg(long, env = "DOCSIFT_JOB")]
        job: Option<String>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Number of sections to keep
        #[arg(long, default_value = "10")]
        top: usize,

        /// Maximum subsections per section
        #[arg(long, default_value = "3")]
        max_subsections: usize,

        /// Process documents in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            compact,
            parallel,
        } => cmd_outline(&input, &output, compact, parallel),
        Commands::Analyze {
            input,
            persona,
            job,
            output,
            top,
            max_subsections,
            parallel,
        } => cmd_analyze(
            &input,
            persona,
            job,
            &output,
            RelevanceOptions::new()
                .with_top_k(top)
                .with_max_subsections(max_subsections)
                .with_parallel(parallel),
        ),
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

/// A single PDF, or every PDF directly inside a directory.
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let files = if input.is_dir() {
        find_pdfs(input)?
    } else {
        vec![input.to_path_buf()]
    };

    if files.is_empty() {
        return Err(format!("No PDF files found in {}", input.display()).into());
    }
    log::debug!("{} input files from {}", files.len(), input.display());
    Ok(files)
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn cmd_outline(
    input: &Path,
    output: &Path,
    compact: bool,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = collect_inputs(input)?;
    fs::create_dir_all(output)?;

    let options = OutlineOptions::new().with_parallel(parallel);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let pb = progress_bar(files.len() as u64);
    let outlines: Vec<Outline> = if parallel {
        pb.set_message("Extracting outlines...");
        let outlines = extract_outlines(&files, &options);
        pb.set_position(files.len() as u64);
        outlines
    } else {
        files
            .iter()
            .map(|file| {
                pb.set_message(file_label(file));
                let outline = extract_outline_with_options(file, &options);
                pb.inc(1);
                outline
            })
            .collect()
    };
    pb.finish_with_message("Done!");

    println!("\n{}", "Outlines:".green().bold());
    for (file, outline) in files.iter().zip(&outlines) {
        let target = output.join(outline_file_name(file));
        render::write_json(outline, &target, format)?;

        if outline.is_error_placeholder() {
            println!("  {} {} {}", "✗".red(), file_label(file), "(unreadable)".red());
        } else {
            println!(
                "  {} {} {} {}",
                "✓".green(),
                file_label(file),
                "→".dimmed(),
                format!("{} headings", outline.headings.len()).cyan()
            );
        }
    }
    println!("\n{} {}", "Saved to".green(), output.display());

    Ok(())
}

/// `<stem>.json` for an input PDF.
fn outline_file_name(input: &Path) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}.json", stem)
}

fn cmd_analyze(
    input: &Path,
    persona: Option<String>,
    job: Option<String>,
    output: &Path,
    options: RelevanceOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("{} is not a directory", input.display()).into());
    }

    let persona = resolve_run_input(persona, input, "persona.txt", "persona")?;
    let job = resolve_run_input(job, input, "job.txt", "job to be done")?;

    let files = find_pdfs(input)?;
    if files.is_empty() {
        return Err(Error::NoDocuments.into());
    }
    log::debug!("persona={:?} job={:?}", persona, job);

    println!("{} {}", "Persona:".cyan().bold(), persona);
    println!("{} {}", "Job:".cyan().bold(), job);
    println!("{} {}", "Documents:".cyan().bold(), files.len());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Ranking sections...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let report = analyze_files(&files, &persona, &job, &options)?;
    pb.finish_and_clear();

    fs::create_dir_all(output)?;
    let target = output.join(REPORT_FILE);
    render::write_json(&report, &target, JsonFormat::Pretty)?;

    print_report(&report);
    println!("\n{} {}", "Saved to".green(), target.display());

    Ok(())
}

/// Explicit value if given, else the trimmed contents of `dir/file_name`.
fn resolve_run_input(
    explicit: Option<String>,
    dir: &Path,
    file_name: &str,
    what: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let value = match explicit {
        Some(value) => value,
        None => {
            let path = dir.join(file_name);
            if !path.is_file() {
                return Err(Error::MissingInput(format!(
                    "{} (pass it as a flag or add {})",
                    what, file_name
                ))
                .into());
            }
            fs::read_to_string(&path)?
        }
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingInput(what.to_string()).into());
    }
    Ok(value.to_string())
}

fn print_report(report: &RelevanceReport) {
    println!(
        "\n{} ({} of {} sections)",
        "Top sections:".green().bold(),
        report.extracted_sections.len(),
        report.metadata.total_sections_analyzed
    );
    println!("{}", "─".repeat(60).dimmed());

    for section in &report.extracted_sections {
        println!(
            "{:>3}. {} {}",
            section.importance_rank,
            section.section_title.bold(),
            format!("[{:.3}]", section.relevance_score).yellow()
        );
        println!(
            "     {} p{}",
            section.document.dimmed(),
            section.page_number
        );
    }
}

fn cmd_version() {
    println!("{} {}", "docsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF outline and relevance extraction tool");
    println!();
    println!("License: MIT");
}
