pub mod dashboard;
pub mod directory;
pub mod ledger;

use std::sync::Arc;

use crate::store::Store;
use dashboard::{Clock, Dashboard};
use directory::Directory;
use ledger::Ledger;

/// The three components, all sharing one store handle.
#[derive(Clone)]
pub struct Services {
    pub directory: Directory,
    pub ledger: Ledger,
    pub dashboard: Dashboard,
}

impl Services {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        let directory = Directory::new(store.clone());
        let ledger = Ledger::new(directory.clone(), store.clone());
        let dashboard = Dashboard::new(store, clock);

        Self {
            directory,
            ledger,
            dashboard,
        }
    }
}
