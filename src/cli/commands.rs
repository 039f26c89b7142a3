// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   summarize  — upload a document, print its summary
//   concepts   — list the key concepts of a document
//   ask        — answer one question about a document
//   challenge  — generate comprehension questions
//   evaluate   — grade answers to questions
//   session    — interactive loop over several documents
//   config     — print (and optionally save) the effective config
//
// Flags that tune the engine convert into `Overrides` through
// From impls, so Layer 2 never sees clap types.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::config::Overrides;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a document and print its summary
    Summarize(SummarizeArgs),

    /// List proper nouns, numbers, quotes and technical terms
    Concepts(ConceptsArgs),

    /// Answer a question from a document
    Ask(AskArgs),

    /// Generate comprehension questions about a document
    Challenge(ChallengeArgs),

    /// Grade answers to questions about a document
    Evaluate(EvaluateArgs),

    /// Interactive session over one or more documents
    Session(SessionArgs),

    /// Print the effective configuration
    Config(ConfigArgs),
}

/// Arguments for `summarize`
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Document to upload (.txt, .md, .docx or .pdf)
    #[arg(long)]
    pub doc: PathBuf,

    /// Word budget of the summary
    #[arg(long)]
    pub summary_max_words: Option<usize>,
}

impl From<&SummarizeArgs> for Overrides {
    fn from(a: &SummarizeArgs) -> Self {
        Overrides {
            summary_max_words: a.summary_max_words,
            ..Overrides::default()
        }
    }
}

/// Arguments for `concepts`
#[derive(Args, Debug)]
pub struct ConceptsArgs {
    #[arg(long)]
    pub doc: PathBuf,
}

/// Arguments for `ask`
#[derive(Args, Debug)]
pub struct AskArgs {
    #[arg(long)]
    pub doc: PathBuf,

    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// Number of top paragraphs combined into the answer context
    #[arg(long)]
    pub max_contexts: Option<usize>,
}

impl From<&AskArgs> for Overrides {
    fn from(a: &AskArgs) -> Self {
        Overrides {
            max_contexts: a.max_contexts,
            ..Overrides::default()
        }
    }
}

/// Arguments for `challenge`
#[derive(Args, Debug)]
pub struct ChallengeArgs {
    #[arg(long)]
    pub doc: PathBuf,

    /// Seed for question sampling; the same seed gives the same questions
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many questions to return
    #[arg(long)]
    pub max_questions: Option<usize>,
}

impl From<&ChallengeArgs> for Overrides {
    fn from(a: &ChallengeArgs) -> Self {
        Overrides {
            seed:          a.seed,
            max_questions: a.max_questions,
            ..Overrides::default()
        }
    }
}

/// Arguments for `evaluate`.
/// Questions and answers pair up by position:
///   --question Q1 --answer A1 --question Q2 --answer A2
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[arg(long)]
    pub doc: PathBuf,

    #[arg(long = "question", required = true)]
    pub questions: Vec<String>,

    #[arg(long = "answer", required = true)]
    pub answers: Vec<String>,

    /// Append the graded rows to this CSV file
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(long)]
    pub max_contexts: Option<usize>,
}

impl From<&EvaluateArgs> for Overrides {
    fn from(a: &EvaluateArgs) -> Self {
        Overrides {
            max_contexts: a.max_contexts,
            ..Overrides::default()
        }
    }
}

/// Arguments for `session`
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Documents to upload before the session starts
    #[arg(long = "doc", required = true)]
    pub docs: Vec<PathBuf>,

    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<&SessionArgs> for Overrides {
    fn from(a: &SessionArgs) -> Self {
        Overrides {
            seed: a.seed,
            ..Overrides::default()
        }
    }
}

/// Arguments for `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Save the effective configuration to this JSON file
    #[arg(long)]
    pub write: Option<PathBuf>,
}
