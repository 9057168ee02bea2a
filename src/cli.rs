//! Command-line interface for the splitter.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::criteria::MatchCriteria;
use crate::error::{Result, SplitError};
use crate::splitter::split_file;

/// Split a large aggregate XML document into individual record documents.
#[derive(Parser)]
#[command(name = "xmlsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the aggregate XML file to split
    #[arg(short = 'i', long)]
    pub input_file_path: PathBuf,

    /// Target directory for split documents (default: working directory)
    #[arg(short = 'o', long)]
    pub output_directory_path: Option<PathBuf>,

    /// Local name of the element to split into documents
    #[arg(short = 'e', long)]
    pub aggregate_record_element: Option<String>,

    /// Namespace of the element to split into documents
    #[arg(short = 'n', long)]
    pub aggregate_record_namespace: Option<String>,

    /// Comma-separated alternating namespace,local-name pairs appended
    /// to the set of elements to split into documents
    #[arg(short = 'l', long)]
    pub aggregate_record_namespace_element_list: Option<String>,

    /// Depth below the root at which to split into documents
    #[arg(short = 'd', long)]
    pub aggregate_depth: Option<usize>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    split_command(&cli)
}

/// Execute the split with resolved criteria and progress feedback.
fn split_command(cli: &Cli) -> Result<()> {
    // Validate the output directory before any parsing starts
    if let Some(output_dir) = &cli.output_directory_path {
        if !output_dir.exists() {
            return Err(SplitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", output_dir.display()),
            )));
        }
        if !output_dir.is_dir() {
            return Err(SplitError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }

    let criteria = MatchCriteria::resolve(
        cli.aggregate_record_element.as_deref(),
        cli.aggregate_record_namespace.as_deref(),
        cli.aggregate_record_namespace_element_list.as_deref(),
        cli.aggregate_depth,
    )?;

    println!(
        "{} {}",
        style("Splitting").bold(),
        style(cli.input_file_path.display()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Scanning records...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match split_file(
        &cli.input_file_path,
        criteria,
        cli.output_directory_path.as_deref(),
    ) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "{} {}",
        style("Documents written:").green().bold(),
        report.documents_written
    );

    Ok(())
}
