// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Every run starts the same way:
//   1. Load the JSON config (or defaults)        (Layer 6)
//   2. Apply the subcommand's flag overrides
//   3. Upload the document(s) into a fresh store  (Layer 2)
//   4. Run the use case and print the result
//
// Output is plain text unless `--json` is given.

pub mod commands;
pub mod render;
pub mod session;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::TextAnalyzer;
use crate::application::ask_use_case::AskUseCase;
use crate::application::challenge_use_case::ChallengeUseCase;
use crate::application::config::AssistantConfig;
use crate::application::evaluate_use_case::EvaluateUseCase;
use crate::application::upload_use_case::{UploadReceipt, UploadUseCase};
use crate::data::loader::FileSource;
use crate::domain::traits::DocumentStore;
use crate::infra::config_store::ConfigStore;
use crate::infra::document_store::InMemoryDocumentStore;
use crate::infra::report::EvaluationReport;
use crate::application::find_document;
use commands::{
    AskArgs, ChallengeArgs, Commands, ConceptsArgs, ConfigArgs, EvaluateArgs, SessionArgs, SummarizeArgs,
};
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "research-assistant",
    version,
    about = "Summarise documents, answer questions about them and quiz yourself on their content."
)]
pub struct Cli {
    /// JSON config file; fields it omits keep their defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as pretty JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the config, then dispatch to the subcommand.
    /// The CLI layer only routes and prints, never computes.
    pub fn run(self) -> Result<()> {
        let base = match &self.config {
            Some(path) => ConfigStore::new(path).load_or_default()?,
            None       => AssistantConfig::default(),
        };

        match &self.command {
            Commands::Summarize(args) => self.run_summarize(base.with_overrides(args.into()), args),
            Commands::Concepts(args)  => self.run_concepts(base, args),
            Commands::Ask(args)       => self.run_ask(base.with_overrides(args.into()), args),
            Commands::Challenge(args) => self.run_challenge(base.with_overrides(args.into()), args),
            Commands::Evaluate(args)  => self.run_evaluate(base.with_overrides(args.into()), args),
            Commands::Session(args)   => self.run_session(base.with_overrides(args.into()), args),
            Commands::Config(args)    => self.run_config(base, args),
        }
    }

    fn run_summarize(&self, config: AssistantConfig, args: &SummarizeArgs) -> Result<()> {
        let store    = InMemoryDocumentStore::new();
        let analyzer = config.analyzer();
        let receipt  = upload(&store, &analyzer, &config, &args.doc)?;

        self.emit(&receipt, render::receipt)
    }

    fn run_concepts(&self, config: AssistantConfig, args: &ConceptsArgs) -> Result<()> {
        let store    = InMemoryDocumentStore::new();
        let analyzer = config.analyzer();
        let receipt  = upload(&store, &analyzer, &config, &args.doc)?;

        let document = find_document(&store, &receipt.document_id)?;
        self.emit(&analyzer.extract_concepts(&document.text), render::concepts)
    }

    fn run_ask(&self, config: AssistantConfig, args: &AskArgs) -> Result<()> {
        let store    = InMemoryDocumentStore::new();
        let analyzer = config.analyzer();
        let receipt  = upload(&store, &analyzer, &config, &args.doc)?;

        let answer = AskUseCase::new(&store, &analyzer).answer(&receipt.document_id, &args.question)?;
        self.emit(&answer, render::answer)
    }

    fn run_challenge(&self, config: AssistantConfig, args: &ChallengeArgs) -> Result<()> {
        let store    = InMemoryDocumentStore::new();
        let analyzer = config.analyzer();
        let receipt  = upload(&store, &analyzer, &config, &args.doc)?;

        let set = ChallengeUseCase::new(&store, &analyzer, config.seed).generate(&receipt.document_id)?;
        self.emit(&set, render::challenge)
    }

    fn run_evaluate(&self, config: AssistantConfig, args: &EvaluateArgs) -> Result<()> {
        let store    = InMemoryDocumentStore::new();
        let analyzer = config.analyzer();
        let receipt  = upload(&store, &analyzer, &config, &args.doc)?;

        let rows = EvaluateUseCase::new(&store, &analyzer).evaluate(
            &receipt.document_id,
            &args.questions,
            &args.answers,
        )?;

        if let Some(path) = &args.report {
            EvaluationReport::new(path)?.append(&receipt.document_id, &rows)?;
        }
        self.emit(rows.as_slice(), render::feedback)
    }

    fn run_session(&self, config: AssistantConfig, args: &SessionArgs) -> Result<()> {
        let store    = InMemoryDocumentStore::new();
        let analyzer = config.analyzer();

        let documents = args
            .docs
            .iter()
            .map(|path| upload(&store, &analyzer, &config, path))
            .collect::<Result<Vec<_>>>()?;

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        Session::new(&store, &analyzer, config.seed, self.json, documents)
            .run(stdin.lock(), &mut stdout)
    }

    fn run_config(&self, config: AssistantConfig, args: &ConfigArgs) -> Result<()> {
        if let Some(path) = &args.write {
            ConfigStore::new(path).save(&config)?;
            tracing::info!("Config written to '{}'", path.display());
        }
        println!("{}", serde_json::to_string_pretty(&config)?);
        Ok(())
    }

    fn emit<T: Serialize + ?Sized>(&self, value: &T, plain: fn(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", plain(value));
        }
        Ok(())
    }
}

/// Extract, clean, summarise and store one file.
fn upload(
    store:    &dyn DocumentStore,
    analyzer: &TextAnalyzer,
    config:   &AssistantConfig,
    path:     &Path,
) -> Result<UploadReceipt> {
    let source = FileSource::new(path).with_max_bytes(config.max_file_bytes);
    UploadUseCase::new(store, analyzer).execute(&source)
}
