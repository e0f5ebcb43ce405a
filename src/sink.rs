// src/sink.rs
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::Result;

/// One completed (provider, prompt) pair, successful or not. A failed call
/// carries its error-marked text in `response_text` like any other answer.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRecord {
    pub prompt_id: String,
    pub model_name: String,
    pub response_text: String,
}

/// Append-only CSV log of provider responses.
///
/// The sink holds a path rather than an open handle: every `append` opens,
/// writes and closes the file, so each record is durable on its own and a
/// killed run keeps everything written so far.
pub struct ResultSink {
    path: PathBuf,
}

impl ResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncates the output file and writes the column header. Destructive:
    /// any previous run's log is discarded. Called exactly once per run,
    /// before the first provider call.
    pub fn initialize(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(["prompt_id", "model_name", "response_text"])?;
        writer.flush()?;
        Ok(())
    }

    /// Appends one record followed by a blank spacer row, then flushes and
    /// closes the file.
    pub fn append(&self, record: &ResponseRecord) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.write_record(["", "", ""])?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prompt_id: &str, model_name: &str, response_text: &str) -> ResponseRecord {
        ResponseRecord {
            prompt_id: prompt_id.to_string(),
            model_name: model_name.to_string(),
            response_text: response_text.to_string(),
        }
    }

    #[test]
    fn test_initialize_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ResultSink::new(dir.path().join("out.csv"));
        sink.initialize().unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "prompt_id,model_name,response_text\n");
    }

    #[test]
    fn test_append_writes_record_and_spacer_row() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ResultSink::new(dir.path().join("out.csv"));
        sink.initialize().unwrap();
        sink.append(&record("1", "ChatGPT", "Hello!")).unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(
            contents,
            "prompt_id,model_name,response_text\n1,ChatGPT,Hello!\n,,\n"
        );
    }

    #[test]
    fn test_appends_accumulate_across_sink_instances() {
        // A fresh sink over the same path must not clobber earlier records;
        // only initialize is destructive.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sink = ResultSink::new(&path);
        sink.initialize().unwrap();
        sink.append(&record("1", "ChatGPT", "first")).unwrap();

        let reopened = ResultSink::new(&path);
        reopened.append(&record("1", "Claude", "second")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "1,ChatGPT,first");
        assert_eq!(lines[3], "1,Claude,second");
    }

    #[test]
    fn test_reinitialize_discards_previous_log() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ResultSink::new(dir.path().join("out.csv"));

        sink.initialize().unwrap();
        sink.append(&record("1", "ChatGPT", "stale")).unwrap();
        sink.initialize().unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "prompt_id,model_name,response_text\n");
    }

    #[test]
    fn test_append_quotes_fields_containing_commas() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ResultSink::new(dir.path().join("out.csv"));
        sink.initialize().unwrap();
        sink.append(&record("1", "ChatGPT", "Yes, and no")).unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert!(contents.contains("1,ChatGPT,\"Yes, and no\"\n"));
    }
}
