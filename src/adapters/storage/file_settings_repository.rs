//! File-based Settings Repository
//!
//! Stores the settings record as a YAML file. Saves write a uniquely named
//! sibling temp file and persist it over the target, so a crash mid-write
//! leaves the old record intact and concurrent saves never share a temp file.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

use crate::domain::newsletter::NewsletterSettings;
use crate::ports::{SettingsRepository, SettingsStoreError};

/// File-based storage for the newsletter settings
#[derive(Debug, Clone)]
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Create a repository backed by the given YAML file
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileSettingsRepository::new("./data/newsletter-settings.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<(), SettingsStoreError> {
        fs::create_dir_all(self.parent_dir()).await.map_err(io_error)
    }
}

fn io_error(e: std::io::Error) -> SettingsStoreError {
    SettingsStoreError::IoError(e.to_string())
}

/// Blocking write of `contents` to a fresh temp file in `dir`, then an
/// atomic rename onto `path`.
fn write_atomically(dir: &Path, path: &Path, contents: &[u8]) -> Result<(), SettingsStoreError> {
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(contents).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load(&self) -> Result<NewsletterSettings, SettingsStoreError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(NewsletterSettings::default());
            }
            Err(e) => return Err(SettingsStoreError::IoError(e.to_string())),
        };

        if yaml.trim().is_empty() {
            return Ok(NewsletterSettings::default());
        }

        serde_yaml::from_str(&yaml)
            .map_err(|e| SettingsStoreError::DeserializationFailed(e.to_string()))
    }

    async fn save(&self, settings: &NewsletterSettings) -> Result<(), SettingsStoreError> {
        self.ensure_parent_dir().await?;

        let yaml = serde_yaml::to_string(settings)
            .map_err(|e| SettingsStoreError::SerializationFailed(e.to_string()))?;

        let dir = self.parent_dir().to_path_buf();
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, yaml.as_bytes()))
            .await
            .map_err(|e| SettingsStoreError::IoError(e.to_string()))??;

        tracing::debug!(path = %self.path.display(), "Newsletter settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_settings() -> NewsletterSettings {
        NewsletterSettings {
            organization_host: "foo.ngo.tools".to_string(),
            encrypted_bearer_token: "c2VjcmV0".to_string(),
            segment_id: "12".to_string(),
            confirmation_message: "Check [email]".to_string(),
            updated_at: Some(chrono::Utc::now()),
        }
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.yaml"));

        let settings = repo.load().await.unwrap();
        assert_eq!(settings, NewsletterSettings::default());
    }

    #[tokio::test]
    async fn save_then_load_returns_same_record() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("nested/settings.yaml"));
        let settings = sample_settings();

        repo.save(&settings).await.unwrap();
        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.yaml"));

        repo.save(&sample_settings()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("settings.yaml")]);
    }

    #[tokio::test]
    async fn concurrent_saves_all_succeed() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.yaml"));

        let save = |segment: &str| {
            let repo = repo.clone();
            let mut settings = sample_settings();
            settings.segment_id = segment.to_string();
            async move { repo.save(&settings).await }
        };
        let results = tokio::join!(save("1"), save("2"), save("3"), save("4"));

        assert!(results.0.is_ok());
        assert!(results.1.is_ok());
        assert!(results.2.is_ok());
        assert!(results.3.is_ok());
        let stored = repo.load().await.unwrap().segment_id;
        assert!(["1", "2", "3", "4"].contains(&stored.as_str()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.yaml"));

        repo.save(&sample_settings()).await.unwrap();
        let mut updated = sample_settings();
        updated.segment_id = "99".to_string();
        repo.save(&updated).await.unwrap();

        assert_eq!(repo.load().await.unwrap().segment_id, "99");
    }

    #[tokio::test]
    async fn persisted_keys_are_stable() {
        let dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.yaml"));
        repo.save(&sample_settings()).await.unwrap();

        let yaml = std::fs::read_to_string(repo.path()).unwrap();
        for key in [
            "organization_host:",
            "encrypted_bearer_token:",
            "segment_id:",
            "confirmation_message:",
        ] {
            assert!(yaml.contains(key), "missing {} in {}", key, yaml);
        }
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "segment_id: [unterminated").unwrap();
        let repo = FileSettingsRepository::new(&path);

        assert!(matches!(
            repo.load().await,
            Err(SettingsStoreError::DeserializationFailed(_))
        ));
    }

    #[tokio::test]
    async fn empty_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "").unwrap();
        let repo = FileSettingsRepository::new(&path);

        assert_eq!(repo.load().await.unwrap(), NewsletterSettings::default());
    }
}
