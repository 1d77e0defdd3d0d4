//! MessagePack implementation of the value table repository.

use std::{fs::File, path::Path};

use crate::{Result, agent::ValueTable, error::Error, ports::ValueTableRepository};

/// MessagePack-based value table repository.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_rl::adapters::MsgPackRepository;
/// use tictactoe_rl::agent::ValueTable;
/// use tictactoe_rl::ports::ValueTableRepository;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let table = ValueTable::default();
///
/// repo.save(&table, Path::new("table.msgpack"))?;
/// let loaded = repo.load(Path::new("table.msgpack"))?;
/// # Ok::<(), tictactoe_rl::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl ValueTableRepository for MsgPackRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: "serialize value table to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table = rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
            operation: "deserialize value table from MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::types::Fingerprint;

    fn sample_table() -> ValueTable {
        let mut table = ValueTable::default();
        let a: Fingerprint = "X........".parse().unwrap();
        let b: Fingerprint = "X...O...X".parse().unwrap();
        table.set(a, 0.125);
        table.set(b, -0.5);
        table
    }

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("table.msgpack");

        let repo = MsgPackRepository::new();
        let table = sample_table();

        repo.save(&table, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, table);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new();
        let result = repo.load(&temp_dir.path().join("missing.msgpack"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("corrupt.msgpack");
        std::fs::write(&file_path, b"definitely not msgpack").unwrap();

        let repo = MsgPackRepository::new();
        assert!(matches!(
            repo.load(&file_path),
            Err(Error::SerializationContext { .. })
        ));

        let table = repo.load_or_empty(&file_path, 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new();
        let result = repo.save(
            &sample_table(),
            &temp_dir.path().join("no_such_dir").join("table.msgpack"),
        );
        assert!(result.is_err());
    }
}
