use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::RegistryError;

/// One component of a derivation recipe. `Ref` names an entry that must
/// already be declared (in this registry or its collaborator) when the
/// derived entry is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Lit(&'static str),
    Ref(&'static str),
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub name: &'static str,
    pub value: String,
    /// `None` for literals; the ordered recipe for derived entries.
    pub recipe: Option<Vec<Fragment>>,
}

/// Frozen name-to-locator mapping. Built once via [`RegistryBuilder`],
/// read-only afterwards; safe to share across threads without locking.
pub struct Registry {
    label: &'static str,
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Returns the locator string declared under `name`.
    pub fn get(&self, name: &str) -> Result<&str, RegistryError> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].value.as_str())
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Symbolic names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }
}

/// Single-pass, order-preserving construction. Declaration order must match
/// dependency order: a derived entry may only reference names declared before
/// it (or names in the collaborator, which is already frozen).
pub struct RegistryBuilder {
    label: &'static str,
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
    collaborator: Option<&'static Registry>,
}

impl RegistryBuilder {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: Vec::new(),
            index: HashMap::new(),
            collaborator: None,
        }
    }

    /// A builder whose derived entries may also reference names exported by
    /// `collaborator`, the companion registry.
    pub fn with_collaborator(label: &'static str, collaborator: &'static Registry) -> Self {
        Self {
            label,
            entries: Vec::new(),
            index: HashMap::new(),
            collaborator: Some(collaborator),
        }
    }

    pub fn literal(&mut self, name: &'static str, value: &str) -> Result<(), RegistryError> {
        self.insert(Entry {
            name,
            value: value.to_string(),
            recipe: None,
        })
    }

    /// Adds a derived entry: the ordered concatenation of `parts`, where each
    /// `Ref` resolves against this registry first, then the collaborator.
    pub fn derived(
        &mut self,
        name: &'static str,
        parts: &[Fragment],
    ) -> Result<(), RegistryError> {
        let mut value = String::new();
        for part in parts {
            match part {
                Fragment::Lit(s) => value.push_str(s),
                Fragment::Ref(r) => value.push_str(self.resolve(r)?),
            }
        }
        self.insert(Entry {
            name,
            value,
            recipe: Some(parts.to_vec()),
        })
    }

    fn resolve(&self, name: &str) -> Result<&str, RegistryError> {
        if let Some(&i) = self.index.get(name) {
            return Ok(self.entries[i].value.as_str());
        }
        match self.collaborator {
            Some(reg) => reg.get(name),
            None => Err(RegistryError::UnknownName(name.to_string())),
        }
    }

    fn insert(&mut self, entry: Entry) -> Result<(), RegistryError> {
        if self.index.contains_key(entry.name) {
            return Err(RegistryError::DuplicateName(entry.name.to_string()));
        }
        self.index.insert(entry.name, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Number of entries declared so far. Used by the declaration modules to
    /// log per-section counts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn freeze(self) -> Registry {
        let derived = self
            .entries
            .iter()
            .filter(|e| e.recipe.is_some())
            .count();
        info!(
            "{} registry frozen: {} entries ({} derived)",
            self.label,
            self.entries.len(),
            derived
        );
        Registry {
            label: self.label,
            entries: self.entries,
            index: self.index,
        }
    }
}

/// Logs how many entries a declaration section contributed.
pub(crate) fn section_declared(builder: &RegistryBuilder, section: &str, before: usize) {
    debug!(
        "{}: section {} declared {} entries",
        builder.label,
        section,
        builder.len() - before
    );
}

/// Maps one declaration-macro token to a [`Fragment`]: bare idents become
/// `Ref`s on their own spelling, string literals become `Lit`s.
macro_rules! fragment {
    ($lit:literal) => {
        $crate::registry::Fragment::Lit($lit)
    };
    ($name:ident) => {
        $crate::registry::Fragment::Ref(stringify!($name))
    };
}

macro_rules! entry {
    ($b:ident, $name:ident, [ $($part:tt),+ $(,)? ]) => {
        $b.derived(stringify!($name), &[ $($crate::registry::fragment!($part)),+ ])?
    };
    ($b:ident, $name:ident, $value:literal) => {
        $b.literal(stringify!($name), $value)?
    };
}

/// Declaration DSL for the constant tables. One entry per line; a bare string
/// is a literal entry, a bracketed list is a derived entry whose idents
/// reference earlier entries (or collaborator names):
///
/// ```ignore
/// declare_entries!(b;
///     EXTENSION_PREFIX = "vsphere.core.";
///     ID_VM_POWER_ON_ACTION = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "powerOnAction"];
/// );
/// ```
macro_rules! declare_entries {
    ($b:ident; $( $name:ident = $rhs:tt ; )+ ) => {
        $( $crate::registry::entry!($b, $name, $rhs); )+
    };
}

pub(crate) use {declare_entries, entry, fragment};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_local_over_collaborator() {
        // A collaborator entry with the same name as a local one must not
        // shadow the local declaration.
        let mut companion = RegistryBuilder::new("companion");
        companion.literal("SHARED", "from-companion").unwrap();
        let companion: &'static Registry = Box::leak(Box::new(companion.freeze()));

        let mut b = RegistryBuilder::with_collaborator("main", companion);
        b.literal("SHARED", "from-main").unwrap();
        b.derived("USES_SHARED", &[Fragment::Ref("SHARED")]).unwrap();
        let reg = b.freeze();

        assert_eq!(reg.get("USES_SHARED").unwrap(), "from-main");
    }

    #[test]
    fn derived_recipe_is_recorded_in_order() {
        let mut b = RegistryBuilder::new("main");
        b.literal("A", "a").unwrap();
        b.derived("AB", &[Fragment::Ref("A"), Fragment::Lit("b")])
            .unwrap();
        let reg = b.freeze();

        let entry = reg.entries().find(|e| e.name == "AB").unwrap();
        assert_eq!(
            entry.recipe.as_deref(),
            Some(&[Fragment::Ref("A"), Fragment::Lit("b")][..])
        );
    }
}
