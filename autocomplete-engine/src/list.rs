//! In-memory option list source
//!
//! Filters a fixed list of strings against the query. Matching is
//! case-insensitive and NFKC-normalized; results keep list order.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, SourceError};
use crate::normalize::fold_for_match;
use crate::source::{OptionSource, Reply};

/// How a query is matched against list entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Query may appear anywhere in the entry
    #[default]
    Substring,
    /// Entry must start with the query
    Prefix,
}

/// Synchronous source over a fixed list of strings
#[derive(Debug, Clone)]
pub struct ListSource {
    entries: Vec<String>,
    /// Folded form of each entry, index-aligned with `entries`
    keys: Vec<String>,
    mode: MatchMode,
    limit: Option<usize>,
}

impl ListSource {
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let keys = entries.iter().map(|e| fold_for_match(e)).collect();
        Self {
            entries,
            keys,
            mode: MatchMode::default(),
            limit: None,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Cap the number of results returned per query.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Parse a JSON array of strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Parse newline-delimited entries. Blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Load a list from disk: `.json` files as a JSON array, anything else
    /// as newline-delimited text.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let list = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_lines(&content)
        };
        debug!("Loaded {} options from {:?}", list.len(), path);
        Ok(list)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching `query`, in list order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<String> {
        let needle = fold_for_match(query);
        let matches = self
            .entries
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| match self.mode {
                MatchMode::Substring => key.contains(&needle),
                MatchMode::Prefix => key.starts_with(&needle),
            })
            .map(|(entry, _)| entry.clone());
        match self.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }
}

impl OptionSource<String> for ListSource {
    fn request(&mut self, query: &str, reply: Reply<String>) {
        reply.send(self.filter(query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn countries() -> ListSource {
        ListSource::new(["France", "Germany", "United Kingdom", "United States"])
    }

    #[test]
    fn test_substring_match() {
        let list = countries();
        assert_eq!(list.filter("an"), vec!["France", "Germany"]);
        assert_eq!(list.filter("UNITED").len(), 2);
        assert!(list.filter("xyz").is_empty());
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(countries().filter("").len(), 4);
    }

    #[test]
    fn test_prefix_mode() {
        let list = countries().with_mode(MatchMode::Prefix);
        assert_eq!(list.filter("un"), vec!["United Kingdom", "United States"]);
        assert!(list.filter("kingdom").is_empty());
    }

    #[test]
    fn test_limit() {
        let list = countries().with_limit(1);
        assert_eq!(list.filter("united"), vec!["United Kingdom"]);
    }

    #[test]
    fn test_full_width_query() {
        assert_eq!(countries().filter("ｆｒａ"), vec!["France"]);
    }

    #[test]
    fn test_from_lines_skips_comments() {
        let list = ListSource::from_lines("# countries\nFrance\n\n  Spain  \n");
        assert_eq!(list.entries(), ["France", "Spain"]);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"["Peru", "Portugal"]"#).unwrap();
        let list = ListSource::load(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.filter("po"), vec!["Portugal"]);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"not": "a list"}}"#).unwrap();
        assert!(matches!(
            ListSource::load(file.path()),
            Err(SourceError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ListSource::load(Path::new("/nonexistent/list.txt")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }
}
