//! The identifier registry: every symbolic locator name the harness exports,
//! declared section by section in dependency order and frozen once.
//!
//! Declaration order is load-bearing. The extension section declares the
//! `vsphere.core.` prefix and the entity fragments; every later section may
//! derive from anything declared before it, and from the companion
//! [`crate::test_constants`] registry, never from anything declared later.

mod actions;
mod datagrid;
mod dialogs;
mod extension;
mod login;
mod navigation;
mod tabs;
mod views;

use std::sync::LazyLock;

use crate::error::RegistryError;
use crate::registry::{Registry, RegistryBuilder};
use crate::test_constants;

static ID_CONSTANTS: LazyLock<Registry> = LazyLock::new(|| {
    build().unwrap_or_else(|e| panic!("identifier registry failed to initialize: {e}"))
});

/// The frozen identifier registry. First call forces initialization; an
/// authoring defect (duplicate name, recipe referencing an undeclared name)
/// aborts the process rather than serving a partial registry.
pub fn registry() -> &'static Registry {
    &ID_CONSTANTS
}

fn build() -> Result<Registry, RegistryError> {
    let mut b = RegistryBuilder::with_collaborator("id-constants", test_constants::registry());

    extension::declare(&mut b)?;
    navigation::declare(&mut b)?;
    views::declare(&mut b)?;
    datagrid::declare(&mut b)?;
    dialogs::declare(&mut b)?;
    tabs::declare(&mut b)?;
    actions::declare(&mut b)?;
    login::declare(&mut b)?;

    Ok(b.freeze())
}
