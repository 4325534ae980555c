pub mod entry;
pub mod error;
pub mod inventory;
pub mod storage;

pub use entry::Entry;
pub use error::Error;
pub use inventory::Inventory;
