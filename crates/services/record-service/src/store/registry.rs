//! The user and item collections behind one reset gate.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use domain::{Item, User};

use crate::id::{IdGenerator, UuidGenerator};

use super::Collection;

/// Both collections of the process.
///
/// Ordinary operations hold the gate shared while they touch a collection;
/// [`RecordStore::reset`] holds it exclusively, so a reset never interleaves
/// with anything else. The gate is not reentrant: closures passed to the
/// accessors must not call back into the store.
pub struct RecordStore {
    gate: RwLock<()>,
    users: Collection<User>,
    items: Collection<Item>,
}

impl RecordStore {
    /// Create empty collections sharing one identifier source
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            gate: RwLock::new(()),
            users: Collection::new(ids.clone()),
            items: Collection::new(ids),
        }
    }

    /// Run `f` against the user collection
    pub fn users<T>(&self, f: impl FnOnce(&Collection<User>) -> T) -> T {
        let _gate = self.gate.read();
        f(&self.users)
    }

    /// Run `f` against the item collection
    pub fn items<T>(&self, f: impl FnOnce(&Collection<Item>) -> T) -> T {
        let _gate = self.gate.read();
        f(&self.items)
    }

    /// Run `f` against both collections without a reset in between
    pub fn both<T>(&self, f: impl FnOnce(&Collection<User>, &Collection<Item>) -> T) -> T {
        let _gate = self.gate.read();
        f(&self.users, &self.items)
    }

    /// Empty both collections.
    pub fn reset(&self) {
        let _gate = self.gate.write();
        self.users.clear();
        self.items.clear();
        info!("All collections cleared");
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}
