//! Batch normalization of a raw word list
//!
//! Reads a raw list, keeps the folded five-letter words, removes duplicates,
//! sorts and writes one word per line.

use super::fold::normalize_word;
use crate::error::{SourceError, read_source};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Sorted, deduplicated result of normalizing a raw list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedWords {
    pub words: Vec<String>,
    pub lines_read: usize,
    pub lines_kept: usize,
}

impl NormalizedWords {
    /// Number of kept lines that collapsed into an existing word
    #[must_use]
    pub fn duplicates_removed(&self) -> usize {
        self.lines_kept - self.words.len()
    }
}

/// Summary of a normalizer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    pub lines_read: usize,
    pub lines_kept: usize,
    pub unique_words: usize,
}

/// Normalize every line of `content`
///
/// Deduplication goes through a hash set and the final order is ascending
/// byte order, so the result is deterministic.
///
/// # Examples
/// ```
/// use termo::normalize::normalize_words;
///
/// let result = normalize_words("Lápis\nLAPIS\nRápido\nroupa\n");
/// assert_eq!(result.words, ["lapis", "roupa"]);
/// assert_eq!(result.duplicates_removed(), 1);
/// ```
#[must_use]
pub fn normalize_words(content: &str) -> NormalizedWords {
    let kept: Vec<String> = content.lines().filter_map(normalize_word).collect();
    let lines_kept = kept.len();

    let unique: FxHashSet<String> = kept.into_iter().collect();
    let mut words: Vec<String> = unique.into_iter().collect();
    words.sort_unstable();

    NormalizedWords {
        words,
        lines_read: content.lines().count(),
        lines_kept,
    }
}

/// Write words one per line, replacing any previous file content
///
/// # Errors
///
/// Returns `SourceError::Io` if the file cannot be created or written.
pub fn write_words(path: &Path, words: &[String]) -> Result<(), SourceError> {
    let io_err = |e| SourceError::Io(path.to_path_buf(), e);

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    for word in words {
        writeln!(out, "{word}").map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    Ok(())
}

/// Normalize the word list at `input` into `output`
///
/// An input with no qualifying words still produces an (empty) output file.
///
/// # Errors
///
/// Returns `MissingInputFile` or `UnreadableEncoding` for a bad input and `Io`
/// for any other read or write failure.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn normalize_file(input: &Path, output: &Path) -> Result<NormalizeReport, SourceError> {
    let content = read_source(input)?;
    debug!(bytes = content.len(), "Read raw word list");

    let result = normalize_words(&content);
    info!(
        lines = result.lines_read,
        kept = result.lines_kept,
        unique = result.words.len(),
        duplicates = result.duplicates_removed(),
        "Normalized word list"
    );

    write_words(output, &result.words)?;
    info!("Wrote normalized word list");

    Ok(NormalizeReport {
        lines_read: result.lines_read,
        lines_kept: result.lines_kept,
        unique_words: result.words.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn normalize_filters_dedupes_and_sorts() {
        let result = normalize_words("Roupa\nLápis\nrápido\nLAPIS\n\ncasa\nAbrir\n");

        assert_eq!(result.words, ["abrir", "lapis", "roupa"]);
        assert_eq!(result.lines_read, 7);
        assert_eq!(result.lines_kept, 4);
        assert_eq!(result.duplicates_removed(), 1);
    }

    #[test]
    fn normalize_skips_decomposed_six_code_point_lines() {
        let result = normalize_words("la\u{301}pis\nlápis\n");
        assert_eq!(result.words, ["lapis"]);
        assert_eq!(result.lines_kept, 1);
    }

    #[test]
    fn normalize_handles_crlf_lines() {
        let result = normalize_words("Lápis\r\nRoupa\r\n");
        assert_eq!(result.words, ["lapis", "roupa"]);
    }

    #[test]
    fn normalize_empty_input() {
        let result = normalize_words("");
        assert!(result.words.is_empty());
        assert_eq!(result.lines_read, 0);
    }

    #[test]
    fn normalize_file_writes_sorted_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("palavras.txt");
        let output = dir.path().join("palavras_5letras.txt");
        fs::write(&input, "Zebra\nÁrvore\nMaçãs\nlápis\n").unwrap();

        let report = normalize_file(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "lapis\nmacas\nzebra\n");
        assert_eq!(report.unique_words, 3);
        assert_eq!(report.lines_read, 4);
    }

    #[test]
    fn normalize_file_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("palavras.txt");
        let output = dir.path().join("palavras_5letras.txt");
        fs::write(&input, "roupa\n").unwrap();
        fs::write(&output, "velha\nlista\nantes\n").unwrap();

        normalize_file(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "roupa\n");
    }

    #[test]
    fn normalize_file_empty_result_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("palavras.txt");
        let output = dir.path().join("palavras_5letras.txt");
        fs::write(&input, "sol\nrápido\n").unwrap();

        let report = normalize_file(&input, &output).unwrap();

        assert_eq!(report.unique_words, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn normalize_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("palavras.txt");
        let output = dir.path().join("palavras_5letras.txt");

        let err = normalize_file(&input, &output).unwrap_err();

        assert!(matches!(err, SourceError::MissingInputFile(_)));
        assert!(!output.exists());
    }
}
