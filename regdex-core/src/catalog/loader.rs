//! Reading catalog items from data files.
//!
//! JSON documents are either a bare array of items or an object with a
//! `registries` array. TOML documents use `[[registries]]` tables.

use regdex_model::CatalogItem;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;

use crate::Result;
use crate::format::DataFormat;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    registries: Vec<CatalogItem>,
}

/// Read a catalog file, choosing the parser by extension and falling back
/// to [`DataFormat::sniff`] for extensionless files.
pub fn load_from_file(path: &Path) -> Result<Vec<CatalogItem>> {
    let contents = fs::read_to_string(path)?;
    let format = DataFormat::detect(path, &contents);
    let items = parse_str(&contents, format)?;

    debug!(
        path = %path.display(),
        ?format,
        items = items.len(),
        "loaded catalog file"
    );
    Ok(items)
}

pub fn parse_str(raw: &str, format: DataFormat) -> Result<Vec<CatalogItem>> {
    match format {
        DataFormat::Json => parse_json(raw),
        DataFormat::Toml => parse_toml(raw),
    }
}

pub fn parse_json(raw: &str) -> Result<Vec<CatalogItem>> {
    if raw.trim_start().starts_with('[') {
        Ok(serde_json::from_str(raw)?)
    } else {
        Ok(serde_json::from_str::<CatalogDocument>(raw)?.registries)
    }
}

pub fn parse_toml(raw: &str) -> Result<Vec<CatalogItem>> {
    Ok(toml::from_str::<CatalogDocument>(raw)?.registries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;
    use std::io::Write;

    const TOML_DOC: &str = r#"
[[registries]]
slug = "origin-ui"
title = "Origin UI"
tags = ["react", "tailwind"]
searchDescription = "Copy-paste components"
createdAt = "2024-06-01"

[[registries.authors]]
name = "origin"

[[registries]]
slug = "park-ui"
title = "Park UI"
"#;

    #[test]
    fn parses_bare_and_wrapped_json() {
        let bare = parse_json(r#"[{ "slug": "a", "title": "A" }]"#).unwrap();
        assert_eq!(bare.len(), 1);

        let wrapped = parse_json(
            r#"{ "registries": [
                { "slug": "a", "title": "A" },
                { "slug": "b", "title": "B" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(wrapped[1].slug, "b");
    }

    #[test]
    fn parses_toml_tables() {
        let items = parse_toml(TOML_DOC).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].authors[0].name, "origin");
        assert!(items[0].created_at.is_some());
        assert!(items[1].tags.is_empty());
    }

    #[test]
    fn malformed_created_at_fails_the_load() {
        let raw =
            r#"[{ "slug": "a", "title": "A", "createdAt": "31/12/2024" }]"#;
        let err = parse_json(raw).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }

    #[test]
    fn extensionless_toml_starting_with_table_array_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registries");
        std::fs::write(&path, TOML_DOC.trim_start()).unwrap();

        let items = load_from_file(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].slug, "park-ui");
    }

    #[test]
    fn sniffs_format_without_extension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{TOML_DOC}").unwrap();
        assert_eq!(load_from_file(file.path()).unwrap().len(), 2);

        let mut json = tempfile::NamedTempFile::new().unwrap();
        write!(json, r#"  [{{ "slug": "a", "title": "A" }}]"#).unwrap();
        assert_eq!(load_from_file(json.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err =
            load_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
