use std::fs;
use std::io::{self, Write};
use std::path::Path;

use newsdesk_core::{Locale, ThemeMode};
use newsdesk_logging::{newsdesk_error, newsdesk_info, newsdesk_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SavedPreferences {
    pub locale: Locale,
    pub theme: ThemeMode,
}

pub(crate) fn load_preferences(path: &Path) -> SavedPreferences {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return SavedPreferences::default();
        }
        Err(err) => {
            newsdesk_warn!("Failed to read preferences from {:?}: {}", path, err);
            return SavedPreferences::default();
        }
    };

    match ron::from_str(&content) {
        Ok(saved) => {
            newsdesk_info!("Loaded preferences from {:?}", path);
            saved
        }
        Err(err) => {
            newsdesk_warn!("Failed to parse preferences from {:?}: {}", path, err);
            SavedPreferences::default()
        }
    }
}

pub(crate) fn save_preferences(path: &Path, saved: &SavedPreferences) {
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(saved, pretty) {
        Ok(text) => text,
        Err(err) => {
            newsdesk_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomic(path, &content) {
        newsdesk_error!("Failed to write preferences to {:?}: {}", path, err);
    }
}

/// Writes a sibling temp file, then renames it over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
