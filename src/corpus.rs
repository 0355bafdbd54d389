//! Reading workload files into a statement corpus.

use std::path::Path;

use crate::types::TfidfResult;

/// Split workload text into statements.
///
/// Line mode: one statement per `'\n'`-terminated line. A single trailing
/// newline does not add a statement; blank lines elsewhere are empty
/// statements. A `'\r'` before the newline stays in the statement, so CRLF
/// files tokenize exactly as the raw text would.
///
/// JSON mode: the text must be a JSON array of strings.
pub fn parse_corpus(text: &str, json: bool) -> TfidfResult<Vec<String>> {
    if json {
        return Ok(serde_json::from_str(text)?);
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    Ok(body.split('\n').map(str::to_string).collect())
}

/// Read and parse a workload file.
pub fn read_corpus(path: impl AsRef<Path>, json: bool) -> TfidfResult<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let corpus = parse_corpus(&text, json)?;
    log::info!("read {} statements from {}", corpus.len(), path.display());
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_statements() {
        assert!(parse_corpus("", false).unwrap().is_empty());
    }

    #[test]
    fn lone_newline_is_one_empty_statement() {
        assert_eq!(parse_corpus("\n", false).unwrap(), vec![String::new()]);
    }

    #[test]
    fn missing_final_newline() {
        assert_eq!(
            parse_corpus("SELECT a\nSELECT b", false).unwrap(),
            vec!["SELECT a", "SELECT b"]
        );
    }
}
