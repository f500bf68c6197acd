//! Reads and writes the ledger document as a single JSON file.
//!
//! The whole document is read at the start of each request and written back
//! in full after each successful change. There is no locking, so concurrent
//! writers race and the last one wins, but each write replaces the file
//! atomically so readers never see a partial document.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Error, ledger::LedgerState};

/// The default location of the ledger file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "finance_data.json";

/// A ledger document stored as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store for the file at `path`.
    ///
    /// The file does not need to exist yet, it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger document.
    ///
    /// A missing file gives an empty ledger. So does a file that cannot be
    /// read or does not hold a valid ledger, in which case a warning is logged
    /// and the file is left untouched until the next save overwrites it.
    pub fn load(&self) -> LedgerState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No ledger file at {}, starting with an empty ledger",
                    self.path.display()
                );
                return LedgerState::default();
            }
            Err(error) => {
                tracing::warn!(
                    "Could not read ledger file {}, using an empty ledger: {error}",
                    self.path.display()
                );
                return LedgerState::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|error| {
            tracing::warn!(
                "Ledger file {} is not a valid ledger, using an empty ledger: {error}",
                self.path.display()
            );
            LedgerState::default()
        })
    }

    /// Replace the ledger file with `state`.
    ///
    /// # Errors
    ///
    /// Returns [Error::StorageWrite] if the file could not be written. The
    /// previous contents of the file are kept in that case.
    pub fn save(&self, state: &LedgerState) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        write_atomic(&self.path, &json).map_err(|error| {
            tracing::error!(
                "Could not save ledger file {}: {error}",
                self.path.display()
            );
            Error::StorageWrite(error.to_string())
        })
    }
}

/// Write `data` to a sibling temporary file and rename it over `path`.
fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file path", path.display()),
        )
    })?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = OsString::from(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = File::create(&tmp_path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp_path);
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{
        Error,
        ledger::{
            LedgerState, TransactionType, add_goal, add_transaction, compute_totals,
            contribute_to_goal,
        },
        storage::JsonStore,
    };

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::default();
        add_transaction(&mut state, TransactionType::Income, "Salary", 1000.0, "Work");
        add_transaction(&mut state, TransactionType::Expense, "Café", 4.5, "Food");
        let goal = add_goal(&mut state, "Viaje", 500.0, "✈️");
        let balance = compute_totals(&state).balance;
        contribute_to_goal(&mut state, &goal.id, 150.0, balance).unwrap();
        state
    }

    #[test]
    fn load_missing_file_gives_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("finance_data.json"));

        assert_eq!(store.load(), LedgerState::default());
    }

    #[test]
    fn load_malformed_file_gives_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("finance_data.json");
        fs::write(&path, "{ this is not json").unwrap();
        let store = JsonStore::new(&path);

        assert_eq!(store.load(), LedgerState::default());
    }

    #[test]
    fn load_wrong_shape_gives_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("finance_data.json");
        fs::write(&path, r#"{"transactions": {}, "goals": []}"#).unwrap();
        let store = JsonStore::new(&path);

        assert_eq!(store.load(), LedgerState::default());
    }

    #[test]
    fn load_reads_legacy_ledger_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("finance_data.json");
        fs::write(
            &path,
            r#"{
  "transactions": [
    {
      "id": "tx_1767323045123",
      "type": "income",
      "description": "Salary",
      "amount": 1000.0,
      "category": "General",
      "date": "2026-01-02T03:04:05.123456"
    }
  ],
  "goals": [
    {
      "id": "goal_1767323046000",
      "name": "Viaje",
      "emoji": "✈️",
      "target": 500.0,
      "saved": 150.0
    }
  ]
}"#,
        )
        .unwrap();
        let store = JsonStore::new(&path);

        let state = store.load();

        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.transactions[0].description, "Salary");
        assert_eq!(state.goals.len(), 1);
        assert_eq!(compute_totals(&state).balance, 850.0);
    }

    #[test]
    fn legacy_ledger_survives_next_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("finance_data.json");
        fs::write(
            &path,
            r#"{"transactions": [{"id": "tx_1", "type": "income", "description": "Salary",
                "amount": 1000.0, "category": "General", "date": "2026-01-02T03:04:05"}],
                "goals": []}"#,
        )
        .unwrap();
        let store = JsonStore::new(&path);

        let mut state = store.load();
        add_transaction(&mut state, TransactionType::Expense, "Rent", 400.0, "");
        store.save(&state).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Salary"));
        assert_eq!(store.load().transactions.len(), 2);
    }

    #[test]
    fn save_then_load_reproduces_state() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("finance_data.json"));
        let state = sample_state();

        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
    }

    #[test]
    fn save_keeps_non_ascii_text() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("finance_data.json"));

        store.save(&sample_state()).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("Café"));
        assert!(text.contains("✈️"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("nested").join("ledger.json"));

        store.save(&sample_state()).unwrap();

        assert!(store.path().is_file());
        assert!(!dir.path().join("nested").join("ledger.json.tmp").exists());
    }

    #[test]
    fn save_overwrites_whole_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("finance_data.json"));
        store.save(&sample_state()).unwrap();

        store.save(&LedgerState::default()).unwrap();

        assert_eq!(store.load(), LedgerState::default());
    }

    #[test]
    fn save_to_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let result = store.save(&LedgerState::default());

        assert!(
            matches!(result, Err(Error::StorageWrite(_))),
            "want storage write error, got {result:?}"
        );
    }
}
