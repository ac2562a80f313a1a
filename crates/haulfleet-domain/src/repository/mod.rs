//! Repository trait definitions for fleet persistence

use haulfleet_types::Error;

use crate::model::Fleet;

/// Storage for a session's fleet list
pub trait FleetRepository {
    /// Load the stored fleet, or `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<Fleet>, Error>;

    /// Replace the stored fleet
    fn save(&self, fleet: &Fleet) -> Result<(), Error>;
}
