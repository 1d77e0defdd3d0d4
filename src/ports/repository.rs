//! Repository port for value table persistence.

use std::path::Path;

use crate::{Result, agent::ValueTable};

/// Port for persisting and loading value tables.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_rl::{agent::ValueTable, ports::ValueTableRepository};
/// use std::path::Path;
///
/// fn save_table<R: ValueTableRepository>(
///     repo: &R,
///     table: &ValueTable,
///     path: &Path,
/// ) -> tictactoe_rl::Result<()> {
///     repo.save(table, path)
/// }
/// ```
pub trait ValueTableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or corrupted.
    fn load(&self, path: &Path) -> Result<ValueTable>;

    /// Load a table, falling back to an empty one when loading fails.
    fn load_or_empty(&self, path: &Path, default_value: f64) -> ValueTable {
        match self.load(path) {
            Ok(table) => table,
            Err(err) => {
                log::warn!(
                    "could not load value table from {}: {err}; starting empty",
                    path.display()
                );
                ValueTable::new(default_value)
            }
        }
    }
}
