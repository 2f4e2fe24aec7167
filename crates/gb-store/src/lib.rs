//! Device-local persistence for the session record.
//!
//! [`PersistentStore`] is the raw key-value contract; [`SessionRecordStore`]
//! layers the token/user pairing on top of it.

mod error;
mod file_store;
mod memory_store;
mod persistent_store;
mod session_record;


pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use persistent_store::PersistentStore;
pub use session_record::{SessionRecordStore, TOKEN_KEY, USER_KEY};
