//! File-based fleet repository implementation

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use haulfleet_domain::model::Fleet;
use haulfleet_domain::repository::FleetRepository;
use haulfleet_types::{Error, Result};
use tracing::debug;

/// Stores the fleet list as a JSON file on disk.
pub struct FileFleetRepository {
    store_path: PathBuf,
}

impl FileFleetRepository {
    /// Use `fleet.json` inside a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("fleet.json"),
        })
    }

    /// Use an explicit file path
    pub fn at_path(store_path: PathBuf) -> Result<Self> {
        if let Some(parent) = store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { store_path })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl FleetRepository for FileFleetRepository {
    fn load(&self) -> std::result::Result<Option<Fleet>, Error> {
        if !self.store_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        let fleet: Fleet = serde_json::from_reader(reader)?;
        fleet.validate()?;
        debug!(path = %self.store_path.display(), trucks = fleet.len(), "loaded fleet");
        Ok(Some(fleet))
    }

    fn save(&self, fleet: &Fleet) -> std::result::Result<(), Error> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, fleet)?;
        debug!(path = %self.store_path.display(), trucks = fleet.len(), "saved fleet");
        Ok(())
    }
}
