use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::registry::{Fragment, Registry};

/// Serializable dump of one registry entry, in authoring terms: the recipe is
/// rendered the way the declaration reads, not as the resolved value.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySnapshot {
    pub name: &'static str,
    pub value: String,
    pub derived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub registry: &'static str,
    pub generated_at: DateTime<Utc>,
    pub entry_count: usize,
    pub entries: Vec<EntrySnapshot>,
}

fn render_recipe(parts: &[Fragment]) -> String {
    let rendered: Vec<String> = parts
        .iter()
        .map(|p| match p {
            Fragment::Lit(s) => format!("{:?}", s),
            Fragment::Ref(name) => (*name).to_string(),
        })
        .collect();
    rendered.join(" + ")
}

/// Snapshot of `registry` in declaration order, for authoring review and the
/// `locator-dump` tool.
pub fn snapshot(registry: &Registry) -> RegistrySnapshot {
    let entries = registry
        .entries()
        .map(|e| EntrySnapshot {
            name: e.name,
            value: e.value.clone(),
            derived: e.recipe.is_some(),
            recipe: e.recipe.as_deref().map(render_recipe),
        })
        .collect::<Vec<_>>();

    RegistrySnapshot {
        registry: registry.label(),
        generated_at: Utc::now(),
        entry_count: entries.len(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;

    #[test]
    fn recipe_renders_like_the_declaration() {
        let mut b = RegistryBuilder::new("test");
        b.literal("PREFIX", "vsphere.core.").unwrap();
        b.derived(
            "ACTION",
            &[Fragment::Ref("PREFIX"), Fragment::Lit("powerOnAction")],
        )
        .unwrap();
        let snap = snapshot(&b.freeze());

        assert_eq!(snap.entry_count, 2);
        assert_eq!(snap.entries[0].recipe, None);
        assert_eq!(
            snap.entries[1].recipe.as_deref(),
            Some("PREFIX + \"powerOnAction\"")
        );
        assert_eq!(snap.entries[1].value, "vsphere.core.powerOnAction");
    }
}
