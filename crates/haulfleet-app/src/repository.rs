//! Repository adapters for persistence layer

use haulfleet_infra::persistence::FileFleetRepository;
use haulfleet_types::Result;

use crate::config::Config;

/// Open the file-based fleet repository named by the config
pub fn open_fleet_repo(config: &Config) -> Result<FileFleetRepository> {
    match &config.fleet_file {
        Some(path) => FileFleetRepository::at_path(path.clone()),
        None => FileFleetRepository::open(config.store_dir()?),
    }
}
