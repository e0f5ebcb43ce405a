// src/prompts.rs
use std::path::Path;

use serde::Deserialize;

use crate::errors::{EvalError, Result};

/// One row of the prompt table. `prompt_id` is opaque — a string field keeps
/// numeric ids verbatim without reformatting them.
#[derive(Debug, Clone, Deserialize)]
pub struct Prompt {
    pub prompt_id: String,
    pub prompt_text: String,
}

/// Loads the ordered prompt table from a CSV file with `prompt_id` and
/// `prompt_text` columns. Iteration order equals row order in the file.
///
/// Fails with a configuration error if the file has no prompt rows or is
/// missing a required column. An empty input would otherwise produce a
/// silent no-op run, which is never what the operator wants.
pub fn load_prompts(path: impl AsRef<Path>) -> Result<Vec<Prompt>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in ["prompt_id", "prompt_text"] {
        if !headers.iter().any(|h| h == required) {
            return Err(EvalError::Config(format!(
                "Prompt file {} is missing required column '{}'",
                path.display(),
                required
            )));
        }
    }

    let prompts = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Prompt>, csv::Error>>()?;

    if prompts.is_empty() {
        return Err(EvalError::Config(format!(
            "Prompt file {} is empty - please add prompts before running",
            path.display()
        )));
    }

    Ok(prompts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_prompts_preserves_row_order() {
        let file = write_csv("prompt_id,prompt_text\n1,Say hello\n2,Say goodbye\n");
        let prompts = load_prompts(file.path()).unwrap();

        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].prompt_id, "1");
        assert_eq!(prompts[0].prompt_text, "Say hello");
        assert_eq!(prompts[1].prompt_id, "2");
    }

    #[test]
    fn test_load_prompts_rejects_empty_table() {
        let file = write_csv("prompt_id,prompt_text\n");
        let err = load_prompts(file.path()).unwrap_err();

        assert!(matches!(err, EvalError::Config(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_load_prompts_rejects_missing_column() {
        let file = write_csv("prompt_id,text\n1,Say hello\n");
        let err = load_prompts(file.path()).unwrap_err();

        assert!(matches!(err, EvalError::Config(_)));
        assert!(err.to_string().contains("prompt_text"));
    }

    #[test]
    fn test_load_prompts_handles_quoted_fields() {
        let file = write_csv("prompt_id,prompt_text\n1,\"Compare A, B, and C\"\n");
        let prompts = load_prompts(file.path()).unwrap();

        assert_eq!(prompts[0].prompt_text, "Compare A, B, and C");
    }

    #[test]
    fn test_load_prompts_missing_file_is_an_error() {
        assert!(load_prompts("/nonexistent/prompts.csv").is_err());
    }
}
