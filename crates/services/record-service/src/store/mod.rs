//! In-memory storage for the two record collections.

mod collection;
mod registry;

pub use collection::Collection;
pub use registry::RecordStore;
