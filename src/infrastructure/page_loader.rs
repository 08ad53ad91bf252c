use crate::domain::models::PageDocument;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PageLoadError {
    #[error("cannot read page {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse page {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_page(path: &Path) -> Result<PageDocument, PageLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| PageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let page = toml::from_str::<PageDocument>(&content).map_err(|source| {
        PageLoadError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(path = %path.display(), elements = page.elements.len(), "page loaded");
    Ok(page)
}
