use crate::{PersistentStore, StoreError, StoreResult};

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

type Entries = BTreeMap<String, String>;

/// Key-value store kept in a single JSON object file.
///
/// Every mutation rewrites the whole file with the atomic pattern:
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
///
/// so a multi-key write is observed entirely or not at all, even across a crash.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. Missing file = empty store.
    async fn load(&self) -> StoreResult<Entries> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store file at {:?}", self.path);
                return Ok(Entries::new());
            }
            Err(e) => return Err(StoreError::read(self.path.clone(), e)),
        };

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Like `load`, but a corrupted file is moved aside so the write can proceed.
    async fn load_for_update(&self) -> StoreResult<Entries> {
        match self.load().await {
            Err(StoreError::Corrupted { message, .. }) => {
                warn!("Store file corrupted at {:?}: {message}", self.path);
                self.backup_corrupted().await?;
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn save(&self, entries: &Entries) -> StoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, self.path.clone(), e));
        }

        debug!("Saved {} store entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    /// Renames the store file to `<file>.corrupted.{timestamp}`.
    pub async fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        if fs::metadata(&self.path).await.is_err() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".corrupted.{timestamp}"));
        let backup_path = self.path.with_file_name(name);

        fs::rename(&self.path, &backup_path)
            .await
            .map_err(StoreError::backup_failed)?;

        info!("Backed up corrupted store to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

#[async_trait]
impl PersistentStore for FileStore {
    async fn get_many(&self, keys: &[&str]) -> StoreResult<HashMap<String, Option<String>>> {
        let entries = self.load().await?;
        Ok(keys
            .iter()
            .map(|key| (key.to_string(), entries.get(*key).cloned()))
            .collect())
    }

    async fn set_many(&self, new_entries: &[(&str, &str)]) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_for_update().await?;
        for (key, value) in new_entries {
            entries.insert(key.to_string(), value.to_string());
        }
        self.save(&entries).await
    }

    async fn remove_many(&self, keys: &[&str]) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_for_update().await?;
        let before = entries.len();
        for key in keys {
            entries.remove(*key);
        }

        if entries.len() == before {
            return Ok(());
        }
        self.save(&entries).await
    }
}
