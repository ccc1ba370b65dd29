// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use super::{DocumentPatch, DocumentStore, StoreError};
use crate::model::{ArchitectureDocument, DocumentId};

const DOCUMENT_FILE_SUFFIX: &str = ".architecture.json";

/// How hard a document write tries to reach the disk.
///
/// Both modes replace the file through a temp file and a rename, so readers never see a
/// half-written document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// No fsync. An OS crash may lose the most recent write.
    #[default]
    BestEffort,

    /// Fsync the temp file before the rename and, on unix, the directory after it.
    Durable,
}

/// Stores each document as `<root>/<id>.architecture.json`.
///
/// Blocking file I/O runs on tokio's blocking pool. Read-merge-write of an update is not
/// serialized across processes; latest write wins.
#[derive(Debug, Clone)]
pub struct FolderStore {
    root: PathBuf,
    durability: WriteDurability,
}

impl FolderStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, id: &DocumentId) -> PathBuf {
        self.root.join(format!("{id}{DOCUMENT_FILE_SUFFIX}"))
    }

    /// Ids of all documents in the folder, sorted.
    pub fn list(&self) -> Result<Vec<DocumentId>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(io_error(&self.root)(source)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error(&self.root))?;
            let name = entry.file_name();
            let Some(stem) = name
                .to_str()
                .and_then(|n| n.strip_suffix(DOCUMENT_FILE_SUFFIX))
            else {
                continue;
            };
            if let Ok(id) = DocumentId::new(stem) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Writes `doc` in full, creating the folder if needed.
    pub fn save_document(&self, doc: &ArchitectureDocument) -> Result<(), StoreError> {
        let path = self.document_path(&doc.id);
        write_document(&self.root, &path, doc, self.durability)
    }

    pub fn load_document(
        &self,
        id: &DocumentId,
    ) -> Result<Option<ArchitectureDocument>, StoreError> {
        read_document(&self.document_path(id))
    }

    fn update_blocking(&self, id: &DocumentId, patch: DocumentPatch) -> Result<(), StoreError> {
        let path = self.document_path(id);
        let Some(mut doc) = read_document(&path)? else {
            return Err(StoreError::NotFound { id: id.clone() });
        };
        patch.apply_to(&mut doc);
        write_document(&self.root, &path, &doc, self.durability)
    }
}

#[async_trait]
impl DocumentStore for FolderStore {
    async fn get(&self, id: &DocumentId) -> Result<Option<ArchitectureDocument>, StoreError> {
        let store = self.clone();
        let id = id.clone();
        tokio::task::spawn_blocking(move || store.load_document(&id))
            .await
            .map_err(|err| StoreError::Backend(format!("blocking read task failed: {err}")))?
    }

    async fn update(&self, id: &DocumentId, patch: DocumentPatch) -> Result<(), StoreError> {
        let store = self.clone();
        let id = id.clone();
        tokio::task::spawn_blocking(move || store.update_blocking(&id, patch))
            .await
            .map_err(|err| StoreError::Backend(format!("blocking write task failed: {err}")))?
    }
}

fn read_document(path: &Path) -> Result<Option<ArchitectureDocument>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(io_error(path)(source)),
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn write_document(
    root: &Path,
    path: &Path,
    doc: &ArchitectureDocument,
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let mut json = serde_json::to_vec_pretty(doc).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    json.push(b'\n');

    fs::create_dir_all(root).map_err(io_error(root))?;
    write_atomic(path, &json, durability)
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Err(io_error(path)(io::Error::other("not a file path")));
    };

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = dir.join(format!(
        ".wayfinder.tmp.{}.{}.{stamp}",
        name.to_string_lossy(),
        std::process::id()
    ));

    let written = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .and_then(|mut file| {
            file.write_all(contents)?;
            if durability == WriteDurability::Durable {
                file.sync_all()?;
            }
            Ok(())
        })
        .and_then(|()| rename_overwrite(&tmp_path, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(path)(source));
    }

    #[cfg(unix)]
    {
        if durability == WriteDurability::Durable {
            fs::File::open(dir)
                .and_then(|handle| handle.sync_all())
                .map_err(io_error(dir))?;
        }
    }

    Ok(())
}
