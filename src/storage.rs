// storage.rs - One JSON file per board under the user data directory

use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::board::{Board, BoardData};

const BOARDS_DIR: &str = "boards";
const BOARD_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to parse board file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid board name: {0:?}")]
    InvalidName(String),
}

/// Reads and writes boards as `<data_dir>/boards/<name>.json`.
///
/// Saving overwrites whatever file has the same name; there is no locking,
/// so concurrent saves of one board must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct BoardStore {
    data_dir: PathBuf,
}

impl BoardStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn boards_dir(&self) -> PathBuf {
        self.data_dir.join(BOARDS_DIR)
    }

    pub fn board_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_name(name)?;
        Ok(self
            .boards_dir()
            .join(format!("{}.{}", name, BOARD_EXTENSION)))
    }

    pub async fn save(&self, board: &Board) -> Result<PathBuf, StorageError> {
        let path = self.board_path(board.name())?;
        tokio::fs::create_dir_all(self.boards_dir()).await?;

        let json = serde_json::to_string(&board.data())?;
        tokio::fs::write(&path, json).await?;

        info!(
            "saved board {:?} ({} notes) to {}",
            board.name(),
            board.notes().len(),
            path.display()
        );
        Ok(path)
    }

    /// Loads every `*.json` board, sorted by file name.
    ///
    /// A missing boards directory means nothing was saved yet. Any unreadable
    /// or malformed file fails the whole call.
    pub async fn load_all(&self) -> Result<Vec<Board>, StorageError> {
        let dir = self.boards_dir();
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no boards directory at {}", dir.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == BOARD_EXTENSION)
                && entry.file_type().await?.is_file()
            {
                paths.push(path);
            }
        }
        paths.sort();

        let mut boards = Vec::with_capacity(paths.len());
        for path in paths {
            let json = tokio::fs::read_to_string(&path).await?;
            let data: BoardData = serde_json::from_str(&json)
                .map_err(|source| StorageError::Parse { path: path.clone(), source })?;
            boards.push(Board::load(data));
        }

        debug!("loaded {} boards from {}", boards.len(), dir.display());
        Ok(boards)
    }
}

/// Board names become file names, so they must not be empty or reach
/// outside the boards directory.
fn validate_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        Err(StorageError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}
