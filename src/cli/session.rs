// ============================================================
// Layer 1 — Interactive Session
// ============================================================
// A line-oriented loop over several uploaded documents. One
// document is "current" at a time; every command works on it.
//
//   docs               list documents, * marks the current one
//   use <n>            switch to document n (1-based)
//   summary            summary of the current document
//   concepts           key concepts of the current document
//   ask <question>     answer a question
//   challenge          generate comprehension questions
//   eval <q> || <a>    grade answer <a> to question <q>
//   status             health snapshot
//   help               this list
//   quit               leave the session
//
// A failing command prints its error and the loop goes on.
// Input and output are generic so tests can drive the loop
// with in-memory buffers.

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::analysis::TextAnalyzer;
use crate::application::ask_use_case::AskUseCase;
use crate::application::challenge_use_case::ChallengeUseCase;
use crate::application::evaluate_use_case::EvaluateUseCase;
use crate::application::{find_document, status};
use crate::application::upload_use_case::UploadReceipt;
use crate::cli::render;
use crate::domain::traits::DocumentStore;

const PROMPT: &str = "> ";

const HELP: &str = "Commands:
  docs               list documents
  use <n>            switch to document n
  summary            summary of the current document
  concepts           key concepts of the current document
  ask <question>     answer a question
  challenge          generate comprehension questions
  eval <q> || <a>    grade an answer
  status             health snapshot
  quit               leave the session";

enum Reply {
    Text(String),
    Quit,
}

pub struct Session<'a> {
    store:     &'a dyn DocumentStore,
    analyzer:  &'a TextAnalyzer,
    seed:      Option<u64>,
    json:      bool,
    documents: Vec<UploadReceipt>,
    current:   usize,
}

impl<'a> Session<'a> {
    pub fn new(
        store:     &'a dyn DocumentStore,
        analyzer:  &'a TextAnalyzer,
        seed:      Option<u64>,
        json:      bool,
        documents: Vec<UploadReceipt>,
    ) -> Self {
        Self { store, analyzer, seed, json, documents, current: 0 }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{} document(s) loaded. Type 'help' for commands.", self.documents.len())?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.handle(line.trim()) {
                Ok(Reply::Quit)       => break,
                Ok(Reply::Text(text)) => writeln!(out, "{text}")?,
                Err(err)              => writeln!(out, "Error: {err:#}")?,
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        writeln!(out)?;
        tracing::info!("Session ended");
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Result<Reply> {
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None                  => (line, ""),
        };

        let text = match command {
            ""               => String::new(),
            "quit" | "exit"  => return Ok(Reply::Quit),
            "help"           => HELP.to_string(),
            "docs"           => self.list(),
            "use"            => self.switch(rest)?,
            "summary"        => self.show(self.current_document()?, render::receipt)?,
            "concepts"       => {
                let document = find_document(self.store, &self.current_document()?.document_id)?;
                self.show(&self.analyzer.extract_concepts(&document.text), render::concepts)?
            }
            "ask"            => {
                let answer = AskUseCase::new(self.store, self.analyzer)
                    .answer(&self.current_document()?.document_id, rest)?;
                self.show(&answer, render::answer)?
            }
            "challenge"      => {
                let set = ChallengeUseCase::new(self.store, self.analyzer, self.seed)
                    .generate(&self.current_document()?.document_id)?;
                self.show(&set, render::challenge)?
            }
            "eval"           => {
                let (question, answer) = rest
                    .split_once("||")
                    .ok_or_else(|| anyhow!("Usage: eval <question> || <answer>"))?;
                let rows = EvaluateUseCase::new(self.store, self.analyzer).evaluate(
                    &self.current_document()?.document_id,
                    &[question.trim().to_string()],
                    &[answer.trim().to_string()],
                )?;
                self.show(rows.as_slice(), render::feedback)?
            }
            "status"         => self.show(&status::check(self.store), render::status)?,
            other            => bail!("Unknown command '{other}'. Type 'help' for commands."),
        };
        Ok(Reply::Text(text))
    }

    fn current_document(&self) -> Result<&UploadReceipt> {
        self.documents
            .get(self.current)
            .ok_or_else(|| anyhow!("No document loaded"))
    }

    fn list(&self) -> String {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let marker = if i == self.current { "*" } else { " " };
                format!("{marker} {}. {} ({})", i + 1, doc.filename, doc.document_id)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn switch(&mut self, arg: &str) -> Result<String> {
        let n: usize = arg
            .parse()
            .map_err(|_| anyhow!("Usage: use <document number>"))?;
        if n == 0 || n > self.documents.len() {
            bail!("No document number {n}");
        }
        self.current = n - 1;
        Ok(format!("Using document {n}: {}", self.documents[self.current].filename))
    }

    fn show<T: Serialize + ?Sized>(&self, value: &T, plain: fn(&T) -> String) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(plain(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{StaticSource, ESSAY, PARIS};
    use crate::application::upload_use_case::UploadUseCase;
    use crate::infra::document_store::InMemoryDocumentStore;
    use std::io::Cursor;

    fn run_script(script: &str, json: bool) -> String {
        let store    = InMemoryDocumentStore::new();
        let analyzer = TextAnalyzer::default();
        let upload   = UploadUseCase::new(&store, &analyzer);
        let docs     = vec![
            upload.execute(&StaticSource(PARIS)).unwrap(),
            upload.execute(&StaticSource(ESSAY)).unwrap(),
        ];

        let mut out = Vec::new();
        Session::new(&store, &analyzer, Some(3), json, docs)
            .run(Cursor::new(script), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_ask_uses_current_document() {
        let out = run_script("ask What is the capital of France?\n", false);
        assert!(out.starts_with("2 document(s) loaded."));
        assert!(out.contains("Answer: Paris is the capital of France."));
    }

    #[test]
    fn test_use_switches_document() {
        let out = run_script("use 2\ndocs\nsummary\n", false);
        assert!(out.contains("Using document 2"));
        assert!(out.contains("* 2. static.txt"));
        assert!(out.contains("The Industrial Revolution began in Britain around 1760."));
    }

    #[test]
    fn test_concepts_of_current_document() {
        let out = run_script("concepts\n", false);
        assert!(out.contains("Numbers: 2.1, 1889"));
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let out = run_script("use 7\nfrobnicate\neval no separator\nstatus\n", false);
        assert!(out.contains("Error: No document number 7"));
        assert!(out.contains("Error: Unknown command 'frobnicate'"));
        assert!(out.contains("Error: Usage: eval"));
        assert!(out.contains("Documents: 2"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run_script("quit\nask What is the capital of France?\n", false);
        assert!(!out.contains("Answer:"));
    }

    #[test]
    fn test_eval_grades_one_answer() {
        let out = run_script("eval What is the capital of France? || Paris is the capital of France\n", false);
        assert!(out.contains("(excellent)"));
    }

    #[test]
    fn test_json_output() {
        let out = run_script("challenge\n", true);
        assert!(out.contains("\"questions\""));
    }
}
