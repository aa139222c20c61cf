use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::non_blank;
use crate::packaging::archive::to_archive;
use crate::packaging::{sanitize_filename_component, PackagedDocument};

/// Every PDF produced in one session, keyed (and ordered) by filename.
#[derive(Debug, Clone, Default)]
pub struct ProjectFolder {
    pub client_name: String,
    pub files: BTreeMap<String, Bytes>,
}

impl ProjectFolder {
    pub fn archive_filename(&self) -> String {
        let client = non_blank(&self.client_name).unwrap_or("client");
        format!("{}_project.zip", sanitize_filename_component(client))
    }
}

/// In-memory session folders. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct ProjectStore {
    folders: Arc<RwLock<HashMap<Uuid, ProjectFolder>>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, ProjectFolder>>, AppError> {
        self.folders
            .read()
            .map_err(|_| AppError::Internal(anyhow!("project store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, ProjectFolder>>, AppError> {
        self.folders
            .write()
            .map_err(|_| AppError::Internal(anyhow!("project store lock poisoned")))
    }

    /// Adds a document to the session folder, replacing any file of the same name.
    pub fn insert(
        &self,
        session_id: Uuid,
        client_name: &str,
        document: PackagedDocument,
    ) -> Result<(), AppError> {
        let mut folders = self.write()?;
        let folder = folders.entry(session_id).or_default();
        folder.client_name = client_name.trim().to_string();
        let replaced = folder
            .files
            .insert(document.filename.clone(), document.bytes)
            .is_some();
        info!(
            "Stored {} in session {} ({} files{})",
            document.filename,
            session_id,
            folder.files.len(),
            if replaced { ", replaced" } else { "" }
        );
        Ok(())
    }

    pub fn list(&self, session_id: Uuid) -> Result<Vec<String>, AppError> {
        let folders = self.read()?;
        let folder = folders
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
        Ok(folder.files.keys().cloned().collect())
    }

    pub fn file(&self, session_id: Uuid, filename: &str) -> Result<Bytes, AppError> {
        let folders = self.read()?;
        folders
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?
            .files
            .get(filename)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("File {filename} not found")))
    }

    /// Zips the whole folder. Returns the download filename and the archive bytes.
    pub fn archive(&self, session_id: Uuid) -> Result<(String, Vec<u8>), AppError> {
        let folder = {
            let folders = self.read()?;
            folders
                .get(&session_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?
        };
        let bytes = to_archive(
            folder
                .files
                .iter()
                .map(|(name, bytes)| (name.as_str(), &bytes[..])),
        )?;
        Ok((folder.archive_filename(), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use zip::ZipArchive;

    fn doc(name: &str, body: &'static [u8]) -> PackagedDocument {
        PackagedDocument {
            filename: name.to_string(),
            bytes: Bytes::from_static(body),
        }
    }

    #[test]
    fn test_insert_then_list_is_sorted() {
        let store = ProjectStore::new();
        let session = Uuid::new_v4();
        store.insert(session, "Bloom", doc("Bloom_brand_voice_guide.pdf", b"v")).unwrap();
        store.insert(session, "Bloom", doc("Bloom_brand_style_guide.pdf", b"s")).unwrap();
        assert_eq!(
            store.list(session).unwrap(),
            vec!["Bloom_brand_style_guide.pdf", "Bloom_brand_voice_guide.pdf"]
        );
    }

    #[test]
    fn test_same_filename_overwrites() {
        let store = ProjectStore::new();
        let session = Uuid::new_v4();
        store.insert(session, "Bloom", doc("a.pdf", b"first")).unwrap();
        store.insert(session, "Bloom", doc("a.pdf", b"second")).unwrap();
        assert_eq!(store.list(session).unwrap().len(), 1);
        assert_eq!(store.file(session, "a.pdf").unwrap(), Bytes::from_static(b"second"));
    }

    #[test]
    fn test_unknown_session_and_file_are_not_found() {
        let store = ProjectStore::new();
        let session = Uuid::new_v4();
        assert!(matches!(store.list(session), Err(AppError::NotFound(_))));
        assert!(matches!(store.archive(session), Err(AppError::NotFound(_))));

        store.insert(session, "Bloom", doc("a.pdf", b"x")).unwrap();
        assert!(matches!(store.file(session, "b.pdf"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_archive_contains_every_file() {
        let store = ProjectStore::new();
        let session = Uuid::new_v4();
        store.insert(session, "Bloom Co", doc("a.pdf", b"a")).unwrap();
        store.insert(session, "Bloom Co", doc("b.pdf", b"b")).unwrap();

        let (filename, bytes) = store.archive(session).unwrap();
        assert_eq!(filename, "Bloom Co_project.zip");
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn test_archive_filename_defaults_to_client() {
        let folder = ProjectFolder::default();
        assert_eq!(folder.archive_filename(), "client_project.zip");
    }
}
