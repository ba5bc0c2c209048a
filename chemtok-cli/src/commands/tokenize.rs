//! Tokenize command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use chemtok_core::ChemTokenizer;

use super::{init_logging, load_config, open_output};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;

/// One input file and its sentences
type Document = (PathBuf, Vec<Vec<String>>);

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Tokenizer configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tokenize the text exactly as written, without normalizing it first
    #[arg(long)]
    pub no_normalize: bool,

    /// Tokenize files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (default: number of CPUs)
    #[arg(short, long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line, tokens separated by spaces
    Text,
    /// JSON array of files with their tokenized sentences
    Json,
    /// Numbered markdown list of sentences
    Markdown,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let tokenizer = self.build_tokenizer()?;
        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Tokenizing {} file(s), {} bytes",
            files.len(),
            FileReader::total_size(&files)?
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let documents = if self.parallel {
            self.tokenize_parallel(&tokenizer, &files, &progress)?
        } else {
            files
                .iter()
                .map(|path| tokenize_file(&tokenizer, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        self.write_documents(&documents)
    }

    fn build_tokenizer(&self) -> Result<ChemTokenizer> {
        let mut config = load_config(self.config.as_deref())?;
        if self.no_normalize {
            config.normalization.enabled = false;
        }
        ChemTokenizer::from_config(&config)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn tokenize_parallel(
        &self,
        tokenizer: &ChemTokenizer,
        files: &[PathBuf],
        progress: &ProgressReporter,
    ) -> Result<Vec<Document>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        log::debug!("Using {} worker threads", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;
        pool.install(|| {
            files
                .par_iter()
                .map(|path| tokenize_file(tokenizer, path, progress))
                .collect()
        })
    }

    fn write_documents(&self, documents: &[Document]) -> Result<()> {
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format, writer);

        let mut sentence_count = 0;
        for (path, sentences) in documents {
            let source = path.display().to_string();
            formatter.start_document(&source)?;
            for sentence in sentences {
                formatter.format_sentence(&source, sentence)?;
            }
            sentence_count += sentences.len();
        }
        formatter.finish()?;

        log::info!("Wrote {} sentences", sentence_count);
        Ok(())
    }
}

fn tokenize_file(
    tokenizer: &ChemTokenizer,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<Document> {
    let text = FileReader::read_text(path)?;
    let sentences = tokenizer.tokenize(&text);
    log::debug!("{}: {} sentences", path.display(), sentences.len());

    progress.file_completed(&path.display().to_string());
    Ok((path.to_path_buf(), sentences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &Path, output: &Path) -> TokenizeArgs {
        TokenizeArgs {
            input: vec![input.display().to_string()],
            output: Some(output.to_path_buf()),
            format: OutputFormat::Text,
            config: None,
            no_normalize: false,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_tokenize_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Dissolved in NaOH(aq) first. Then Fe(III) was added.").unwrap();

        args(&input, &output).execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "Dissolved in NaOH ( aq ) first .\nThen Fe(III) was added .\n"
        );
    }

    #[test]
    fn test_parallel_keeps_file_order() {
        let temp_dir = TempDir::new().unwrap();
        for (name, text) in [("a.txt", "First."), ("b.txt", "Second."), ("c.txt", "Third.")] {
            fs::write(temp_dir.path().join(name), text).unwrap();
        }
        let output = temp_dir.path().join("out.log");

        let mut args = args(&temp_dir.path().join("*.txt"), &output);
        args.parallel = true;
        args.threads = Some(2);
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "First .\nSecond .\nThird .\n");
    }

    #[test]
    fn test_no_normalize() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Sulphur").unwrap();

        let mut args = args(&input, &output);
        args.no_normalize = true;
        args.execute().unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Sulphur\n");
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        fs::write(&input, "text").unwrap();

        let mut args = args(&input, &temp_dir.path().join("out.txt"));
        args.config = Some(temp_dir.path().join("absent.toml"));
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
