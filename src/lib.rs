//! Locator registry for the web client UI automation harness.
//!
//! Test code locates on-screen elements by symbolic name instead of embedding
//! raw locator strings, so a UI redesign only touches the declarations here.
//! Two registries ship: [`ids`] holds element identifiers, [`test_constants`]
//! holds the UI label strings a few identifiers are composed from. Both are
//! built once, in a single pass over the declarations, and frozen.

pub mod error;
pub mod ids;
pub mod registry;
pub mod snapshot;
pub mod test_constants;

pub use error::RegistryError;
pub use registry::{Fragment, Registry, RegistryBuilder};
