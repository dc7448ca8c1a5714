// src/catalog/kind.rs

use serde::Serialize;
use std::path::Path;

/// Which of the two published catalog files a path refers to. Both share
/// the same record layout; only the selection differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CatalogKind {
    #[serde(rename = "Class I/II")]
    ClassOneTwo,
    #[serde(rename = "Class III")]
    ClassThree,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::ClassOneTwo, CatalogKind::ClassThree];

    /// File name the catalog was published under.
    pub fn file_name(self) -> &'static str {
        match self {
            CatalogKind::ClassOneTwo => "clasi-ii.dat",
            CatalogKind::ClassThree => "clasiii.dat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::ClassOneTwo => "Class I/II",
            CatalogKind::ClassThree => "Class III",
        }
    }

    /// Recognize a catalog by its published file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_str()?;
        Self::ALL.into_iter().find(|k| k.file_name() == name)
    }
}
