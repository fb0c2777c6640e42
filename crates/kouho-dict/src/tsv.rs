use std::io::BufRead;

use kouho_core::dictionary::{Dictionary, DictionaryMetadata, MatchType, SearchOptions};
use kouho_core::preprocess::normalize;
use kouho_types::Candidate;

/// Tab-separated dictionary: `source<TAB>translation` per line, kept in
/// file order. Loaded once, never mutated afterwards.
pub struct TsvDictionary {
    name: String,
    entries: Vec<Candidate>,
}

impl Default for TsvDictionary {
    fn default() -> Self {
        Self {
            name: "empty".to_string(),
            entries: Vec::new(),
        }
    }
}

impl TsvDictionary {
    pub fn new(name: impl Into<String>, entries: Vec<Candidate>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Parse line by line. A read error mid-stream keeps everything parsed
    /// so far; the error is logged and the scan stops.
    pub fn from_reader<R: BufRead>(name: impl Into<String>, reader: R) -> Self {
        let name = name.into();
        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("read error in dictionary {}: {}", name, e);
                    break;
                }
            };
            match parse_line(&line) {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!("dictionary {}: skipped {} malformed lines", name, skipped);
        }
        Self { name, entries }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }
}

impl Dictionary for TsvDictionary {
    fn search(&self, query: &str, options: SearchOptions) -> Vec<Candidate> {
        let matches = self.entries.iter().filter(|entry| match options.match_type {
            MatchType::Prefix => entry.source.starts_with(query),
            MatchType::Exact => entry.source == query,
        });
        match options.max_results {
            Some(max) => matches.take(max).cloned().collect(),
            None => matches.cloned().collect(),
        }
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            language: "ja".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

/// `None` for records without two non-empty tab-separated fields; fields
/// past the second are ignored. Keys are normalized the same way queries
/// are so both sides of the prefix match agree.
fn parse_line(line: &str) -> Option<Candidate> {
    let mut fields = line.split('\t');
    let source = fields.next()?;
    let translation = fields.next()?;
    if source.is_empty() || translation.is_empty() {
        return None;
    }
    Some(Candidate::new(normalize(source), translation.trim()))
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use super::*;

    fn dict(data: &str) -> TsvDictionary {
        TsvDictionary::from_reader("test", data.as_bytes())
    }

    fn prefix() -> SearchOptions {
        SearchOptions {
            max_results: None,
            match_type: MatchType::Prefix,
        }
    }

    #[test]
    fn parses_records_in_order() {
        let d = dict("あか\t赤\nあき\t秋\nあさ\t朝\n");
        assert_eq!(d.entry_count(), 3);
        assert_eq!(d.entries()[0], Candidate::new("あか", "赤"));
        assert_eq!(d.entries()[2], Candidate::new("あさ", "朝"));
    }

    #[test]
    fn skips_short_records() {
        let d = dict("あか\t赤\nmalformed\n\nかさ\t傘\nひとつ\t\n");
        assert_eq!(d.entry_count(), 2);
        assert_eq!(d.entries()[1], Candidate::new("かさ", "傘"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let d = dict("あか\t赤\tnoun\tcommon\n");
        assert_eq!(d.entries()[0], Candidate::new("あか", "赤"));
    }

    #[test]
    fn prefix_search_returns_all_matches_in_order() {
        let d = dict("あか\t赤\nあかい\t赤い\nあき\t秋\nかき\t柿\nあかじ\t赤字\n");
        let results = d.search("あか", prefix());
        let translations: Vec<&str> = results.iter().map(|c| c.translation.as_str()).collect();
        // あかじ sits after a non-match; an unsorted file still yields it
        assert_eq!(translations, ["赤", "赤い", "赤字"]);
    }

    #[test]
    fn exact_search_matches_whole_key() {
        let d = dict("あか\t赤\nあかい\t赤い\n");
        let results = d.search(
            "あか",
            SearchOptions {
                max_results: None,
                match_type: MatchType::Exact,
            },
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].translation, "赤");
    }

    #[test]
    fn max_results_caps_output() {
        let d = dict("あか\t赤\nあかい\t赤い\nあかじ\t赤字\n");
        let results = d.search(
            "あか",
            SearchOptions {
                max_results: Some(2),
                match_type: MatchType::Prefix,
            },
        );
        assert_eq!(results.len(), 2);
    }

    struct FailingReader<'a> {
        good: &'a [u8],
        served: usize,
    }

    impl Read for FailingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served < self.good.len() {
                let n = buf.len().min(self.good.len() - self.served);
                buf[..n].copy_from_slice(&self.good[self.served..self.served + n]);
                self.served += n;
                Ok(n)
            } else {
                Err(io::Error::other("disk on fire"))
            }
        }
    }

    #[test]
    fn read_error_keeps_partial_dictionary() {
        let reader = BufReader::new(FailingReader {
            good: "あか\t赤\nあき\t秋\n".as_bytes(),
            served: 0,
        });
        let d = TsvDictionary::from_reader("partial", reader);
        assert_eq!(d.entry_count(), 2);
    }

    #[test]
    fn keys_are_nfc_normalized() {
        // decomposed が in the file, composed が in the query
        let d = dict("か\u{3099}き\t垣\n");
        let results = d.search("が", prefix());
        assert_eq!(results.len(), 1);
    }
}
