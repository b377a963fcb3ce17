//! Data file format detection shared by catalog and config loading.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}

impl DataFormat {
    /// Format named by the file extension, if it names one.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(DataFormat::Json),
            Some("toml") | Some("tml") => Some(DataFormat::Toml),
            _ => None,
        }
    }

    /// Guess the format from the document itself.
    ///
    /// A leading `{` is a JSON object. A leading `[` is a JSON array only
    /// when it opens on `{` or `]`; otherwise it is a TOML table header such
    /// as `[[registries]]` or `[search]`.
    pub fn sniff(contents: &str) -> Self {
        let mut chars = contents.trim_start().chars();
        match chars.next() {
            Some('{') => DataFormat::Json,
            Some('[') => {
                match chars.find(|c| !c.is_whitespace()) {
                    Some('{') | Some(']') => DataFormat::Json,
                    _ => DataFormat::Toml,
                }
            }
            _ => DataFormat::Toml,
        }
    }

    /// Extension first, contents otherwise.
    pub fn detect(path: &Path, contents: &str) -> Self {
        Self::from_extension(path).unwrap_or_else(|| Self::sniff(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_wins_over_contents() {
        let path = Path::new("catalog.json");
        assert_eq!(
            DataFormat::detect(path, "[[registries]]"),
            DataFormat::Json
        );
        assert_eq!(
            DataFormat::from_extension(Path::new("regdex.tml")),
            Some(DataFormat::Toml)
        );
        assert_eq!(DataFormat::from_extension(Path::new("catalog")), None);
    }

    #[test]
    fn table_arrays_are_not_json_arrays() {
        assert_eq!(DataFormat::sniff("[[registries]]\n"), DataFormat::Toml);
        assert_eq!(DataFormat::sniff("\n[search]\n"), DataFormat::Toml);
        assert_eq!(DataFormat::sniff("slug = \"a\""), DataFormat::Toml);
        assert_eq!(DataFormat::sniff("  [ {\"slug\": 1} ]"), DataFormat::Json);
        assert_eq!(DataFormat::sniff("[]"), DataFormat::Json);
        assert_eq!(DataFormat::sniff("{}"), DataFormat::Json);
    }
}
