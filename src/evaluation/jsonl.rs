//! JSONL (JSON Lines) storage for ranking records.
//!
//! Each evaluator gets one file holding at most one ranking per headline.
//! Saving a headline again replaces its earlier records; the file is
//! rewritten through a sibling temporary file and a rename, so a failed save
//! leaves the previous contents intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::backend::FetchError;

use super::model::EvaluationRecord;

/// Writes records in JSONL format to the given writer.
///
/// # Errors
///
/// Returns [`FetchError::Io`] if writing or serialization fails.
pub fn write_jsonl<W: Write>(
    writer: &mut W,
    records: &[EvaluationRecord],
) -> Result<(), FetchError> {
    for record in records {
        serde_json::to_writer(&mut *writer, record).map_err(|e| FetchError::Io {
            message: format!("JSON serialization failed: {e}"),
        })?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Returns the results file for an evaluator inside `results_dir`.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced so the name cannot
/// escape the directory.
#[must_use]
pub fn results_file(results_dir: &Path, evaluator: &str) -> PathBuf {
    let safe_name: String = evaluator
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    results_dir.join(format!("{safe_name}.jsonl"))
}

/// Reads every record from a results file. A missing file holds none.
///
/// # Errors
///
/// Returns [`FetchError::Io`] if the file cannot be read or a line is not a
/// ranking record; the file is then left untouched by [`save_records`].
pub fn read_records(path: &Path) -> Result<Vec<EvaluationRecord>, FetchError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(io_error(&error)),
    };

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| FetchError::Io {
                message: format!(
                    "{} line {} is not a ranking record: {e}",
                    path.display(),
                    index.saturating_add(1)
                ),
            })
        })
        .collect()
}

/// Stores `records` in the evaluator's results file, replacing any earlier
/// records for the same headlines and keeping all others. Creates the
/// directory when needed and returns the file that was written.
///
/// # Errors
///
/// Returns [`FetchError::Io`] if the existing file is unreadable or the
/// directory or file cannot be written.
pub fn save_records(
    results_dir: &Path,
    evaluator: &str,
    records: &[EvaluationRecord],
) -> Result<PathBuf, FetchError> {
    fs::create_dir_all(results_dir).map_err(|e| io_error(&e))?;

    let path = results_file(results_dir, evaluator);
    let mut merged = read_records(&path)?;
    let replaced_before = merged.len();
    merged.retain(|kept| {
        !records
            .iter()
            .any(|record| record.headline_id == kept.headline_id)
    });
    let replaced = replaced_before.saturating_sub(merged.len());
    merged.extend_from_slice(records);

    let mut buffer = Vec::new();
    write_jsonl(&mut buffer, &merged)?;

    let staging = path.with_extension("jsonl.tmp");
    fs::write(&staging, &buffer).map_err(|e| io_error(&e))?;
    fs::rename(&staging, &path).map_err(|e| io_error(&e))?;

    tracing::info!(
        path = %path.display(),
        count = records.len(),
        replaced,
        "ranking saved"
    );
    Ok(path)
}

/// Converts an I/O error to a [`FetchError::Io`].
fn io_error(error: &std::io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn record(pun: &str, rank: usize) -> EvaluationRecord {
        EvaluationRecord {
            evaluator: "ana".to_owned(),
            headline_id: "7".to_owned(),
            headline: "News A".to_owned(),
            pun: pun.to_owned(),
            funniness_rank: rank,
            similarity_rank: rank,
        }
    }

    #[rstest]
    fn writes_one_object_per_line() {
        let mut buffer = Vec::new();
        write_jsonl(&mut buffer, &[record("pun1", 0), record("pun2", 1)])
            .expect("should write JSONL");
        let output = String::from_utf8(buffer).expect("valid UTF-8");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value =
            serde_json::from_str(lines.first().expect("first line")).expect("valid JSON");
        assert_eq!(first.get("pun"), Some(&serde_json::json!("pun1")));
        assert_eq!(first.get("funniness_rank"), Some(&serde_json::json!(0)));
        assert_eq!(first.get("headline_id"), Some(&serde_json::json!("7")));
    }

    #[rstest]
    #[case::plain("ana", "ana.jsonl")]
    #[case::traversal("../etc/passwd", "___etc_passwd.jsonl")]
    #[case::spaces("Ana Maria", "Ana_Maria.jsonl")]
    fn results_file_sanitises_evaluator(#[case] evaluator: &str, #[case] expected: &str) {
        let path = results_file(Path::new("results"), evaluator);
        assert_eq!(path, Path::new("results").join(expected));
    }

    fn ranked_pairs(path: &Path) -> Vec<(String, usize, usize)> {
        read_records(path)
            .expect("results file should parse")
            .into_iter()
            .map(|r| (r.pun, r.funniness_rank, r.similarity_rank))
            .collect()
    }

    #[test]
    fn saving_a_headline_again_replaces_its_records() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let results_dir = dir.path().join("nested/evaluation");

        save_records(&results_dir, "ana", &[record("pun1", 0), record("pun2", 1)])
            .expect("first save");
        let path = save_records(&results_dir, "ana", &[record("pun2", 0), record("pun1", 1)])
            .expect("second save");

        assert_eq!(
            ranked_pairs(&path),
            vec![("pun2".to_owned(), 0, 0), ("pun1".to_owned(), 1, 1)]
        );
        assert!(!path.with_extension("jsonl.tmp").exists());
    }

    #[test]
    fn saving_keeps_records_for_other_headlines() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let other = EvaluationRecord {
            headline_id: "8".to_owned(),
            headline: "News B".to_owned(),
            ..record("other", 0)
        };

        save_records(dir.path(), "ana", &[other]).expect("first save");
        let path = save_records(dir.path(), "ana", &[record("pun1", 0)]).expect("second save");

        let headlines: Vec<_> = read_records(&path)
            .expect("results file should parse")
            .into_iter()
            .map(|r| r.headline_id)
            .collect();
        assert_eq!(headlines, vec!["8", "7"]);
    }

    #[test]
    fn unreadable_results_file_is_left_untouched() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let path = results_file(dir.path(), "ana");
        fs::write(&path, "not json\n").expect("seed file");

        let result = save_records(dir.path(), "ana", &[record("pun1", 0)]);

        assert!(matches!(result, Err(FetchError::Io { .. })), "got {result:?}");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "not json\n");
    }

    #[test]
    fn missing_results_file_reads_as_empty() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        assert_eq!(read_records(&dir.path().join("nobody.jsonl")), Ok(Vec::new()));
    }
}
