use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use kouho_core::dictionary::LoadError;

use crate::tsv::TsvDictionary;

pub struct TsvLoader;

impl TsvLoader {
    /// Load the bundled dictionary data
    pub fn load_embedded() -> TsvDictionary {
        let data = include_str!("../data/dic.txt");
        tracing::info!("loading embedded dictionary");
        let dict = TsvDictionary::from_reader("embedded", data.as_bytes());
        tracing::info!("loaded {} embedded dictionary entries", dict.entry_count());
        dict
    }

    /// Load a dictionary from a TSV file. Open failures are the caller's to
    /// deal with; read failures mid-file keep the partial result.
    pub fn load_from_file(path: &Path) -> Result<TsvDictionary, LoadError> {
        tracing::info!("loading dictionary from {}", path.display());
        let file = File::open(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dictionary");
        let dict = TsvDictionary::from_reader(name, BufReader::new(file));
        tracing::info!(
            "loaded {} dictionary entries from {}",
            dict.entry_count(),
            path.display()
        );
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_parses() {
        let dict = TsvLoader::load_embedded();
        assert!(dict.entry_count() > 0);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let result = TsvLoader::load_from_file(Path::new("/no/such/dic.txt"));
        assert!(result.is_err());
    }
}
