//! reqlint CLI - acronym and wording checks for requirements documents
//!
//! A command-line tool for auditing a directory of plain-text SRS documents.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use reqlint::corpus::read_document;
use reqlint::{
    list_documents, AnalyzerConfig, Corpus, CorpusReport, Document, DocumentAnalyzer,
    NoiseDecision, NoiseFilter, PrepareOptions,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Acronym and subjective-term checks for requirements documents
#[derive(Parser)]
#[command(
    name = "reqlint",
    author = "iyulab",
    version,
    about = "Check acronyms and wording in requirements documents",
    long_about = "reqlint - Acronym and wording checks for plain-text SRS corpora.\n\n\
                  Finds undefined acronyms, acronyms used before their definition,\n\
                  inconsistent definitions across documents, and subjective terms.\n\n\
                  Usage:\n  \
                  reqlint check <dir>           Check every .txt file, write JSON reports\n  \
                  reqlint file <file>           Print glossary and issues for one file\n  \
                  reqlint sentences <file>      Show segmentation and noise decisions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a directory of .txt documents
    Check {
        /// Input directory
        input: PathBuf,

        /// Output directory for JSON reports
        #[arg(short, long, default_value = "outputs")]
        output: PathBuf,

        /// Analyze documents one at a time
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,

        /// Collapse runs of whitespace before segmentation
        #[arg(long)]
        collapse_whitespace: bool,

        /// Minimum distinct sentences for an undefined acronym to be reported
        #[arg(long, default_value = "2")]
        min_sentences: usize,
    },

    /// Analyze a single document and print its glossary and issues as JSON
    File {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Print each sentence with its index and noise decision
    Sentences {
        /// Input file path
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check {
            input,
            output,
            sequential,
            compact,
            collapse_whitespace,
            min_sentences,
        } => {
            let mut prepare = PrepareOptions::default();
            if collapse_whitespace {
                prepare = prepare.with_collapse_whitespace();
            }
            let mut config = AnalyzerConfig::default()
                .with_prepare(prepare)
                .with_min_distinct_sentences(min_sentences);
            if sequential {
                config = config.sequential();
            }

            run_check(&input, &output, config, !compact)?;
        }

        Commands::File {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Analyzing document...");

            let (name, text) = read_document(&input)?;
            let report = DocumentAnalyzer::with_defaults().analyze(&name, &text);
            let value = serde_json::json!({
                "file": report.file,
                "glossary": report.glossary,
                "issues": report.issues,
                "subjective": report.subjective,
            });
            let json = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Wrote {} issues to {}",
                    "✓".green().bold(),
                    report.issues.len(),
                    path.display()
                );
            }
        }

        Commands::Sentences { input } => {
            let (name, text) = read_document(&input)?;
            let prepared = reqlint::prepare(&text, &PrepareOptions::default());
            let document = Document::new(name, &prepared);
            let filter = NoiseFilter::with_defaults();

            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for sentence in &document.sentences {
                let label = match filter.classify(&sentence.text) {
                    NoiseDecision::Prose => "prose".normal(),
                    NoiseDecision::Heading => "heading".yellow(),
                    NoiseDecision::Bibliography(signal) => {
                        format!("bibliography:{:?}", signal).to_lowercase().magenta()
                    }
                };
                writeln!(handle, "{:>5}  {:<24} {}", sentence.index, label, sentence.text)?;
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Run the corpus check and write the JSON reports
fn run_check(
    input: &Path,
    output: &Path,
    config: AnalyzerConfig,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = list_documents(input)?;
    if paths.is_empty() {
        println!("{} No .txt documents in {}", "!".yellow().bold(), input.display());
        return Ok(());
    }

    let pb = create_progress(paths.len() as u64);
    let mut corpus = Corpus::new(config);
    corpus.add_paths(&paths, |_| pb.inc(1));
    let report = corpus.finish();
    pb.finish_and_clear();

    let written = report.write_json(output, pretty)?;
    print_summary(&report, output, &written);
    Ok(())
}

fn print_summary(report: &CorpusReport, output: &Path, written: &[PathBuf]) {
    let stats = &report.stats;

    println!("{}", "Check Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Output".bold(), output.display());
    for path in written {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("  {} {}", "✓".green(), name);
    }

    println!("\n{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Documents".bold(), stats.total_files_processed);
    if stats.total_files_skipped > 0 {
        println!(
            "{}: {}",
            "Skipped".bold(),
            stats.total_files_skipped.to_string().yellow()
        );
    }
    println!("{}: {}", "Unique acronyms".bold(), stats.total_unique_acronyms);
    println!(
        "{}: {}",
        "Acronym occurrences".bold(),
        stats.total_acronym_occurrences_with_duplicates
    );
    println!("{}: {}", "Glossary entries".bold(), report.glossary.len());

    println!("\n{}", "Issues".cyan().bold());
    println!("{}", "─".repeat(40));
    print_count(
        "Undefined in document",
        stats.total_missing_definitions_with_duplicates,
    );
    print_count(
        "Used before definition",
        stats.total_first_use_before_definition_with_duplicates,
    );
    print_count(
        "Acronym, several expansions",
        stats.total_inconsistencies_acronym_multiple_expansions,
    );
    print_count(
        "Expansion, several acronyms",
        stats.total_inconsistencies_expansion_multiple_acronyms,
    );
    print_count("Subjective terms", stats.subjective_terms_with_duplicates);
    for (smell, count) in &stats.smells {
        print_count(&smell.to_string(), *count);
    }
}

fn print_count(label: &str, count: usize) {
    let value = if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().red()
    };
    println!("{}: {}", label.bold(), value);
}

fn print_version() {
    println!("{} {}", "reqlint".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Acronym and wording checks for requirements documents");
    println!();
    println!("Input: directories of plain-text (.txt) documents");
    println!("Repository: https://github.com/iyulab/reqlint");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn create_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.blue} [{bar:40.cyan/blue}] {pos}/{len} documents")
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["reqlint", "check", "data"]).unwrap();
        match cli.command {
            Commands::Check {
                output,
                sequential,
                min_sentences,
                ..
            } => {
                assert_eq!(output, PathBuf::from("outputs"));
                assert!(!sequential);
                assert_eq!(min_sentences, 2);
            }
            _ => panic!("expected check"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["reqlint", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
