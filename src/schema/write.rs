// src/schema/write.rs

use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use super::layout::CatalogSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Json,
    Yaml,
}

/// Serialize a schema for inspection, pretty-printed with a trailing
/// newline.
pub fn dump_schema(schema: &CatalogSchema, format: DumpFormat) -> Result<String> {
    let mut text = match format {
        DumpFormat::Json => {
            serde_json::to_string_pretty(schema).context("serializing schema to JSON")?
        }
        DumpFormat::Yaml => serde_yaml::to_string(schema).context("serializing schema to YAML")?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Write `text` to `path` atomically: to a dot-prefixed tmp file in the same
/// directory, then rename over the target.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let tmp_path: PathBuf = dir.join(format!(".{}.tmp", file_name));

    let mut tmp = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {:?}", tmp_path))?;
    tmp.write_all(text.as_bytes())
        .with_context(|| format!("writing {:?}", tmp_path))?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::allwise;

    #[test]
    fn json_dump_carries_labels_and_codes() {
        let text = dump_schema(allwise::layout(), DumpFormat::Json).unwrap();
        assert!(text.contains("\"RAdeg\""));
        assert!(text.contains("\"F11.7\""));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn yaml_dump_round_trips() {
        let text = dump_schema(allwise::layout(), DumpFormat::Yaml).unwrap();
        let back: CatalogSchema = serde_yaml::from_str(&text).unwrap();
        assert_eq!(&back, allwise::layout());
    }

    #[test]
    fn write_atomic_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        write_atomic(&path, "first\n").unwrap();
        write_atomic(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        // no tmp leftovers
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
