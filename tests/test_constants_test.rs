use pretty_assertions::assert_eq;

use vcui_locators::{ids, test_constants};

#[test]
fn test_companion_registry_labels() {
    let reg = test_constants::registry();
    assert_eq!(reg.get("EQUALS_SIGN").unwrap(), "=");
    assert_eq!(reg.get("MANAGE_TAB").unwrap(), "Manage");
    assert_eq!(reg.get("RELATED_ITEMS_TAB").unwrap(), "Related Objects");
    assert_eq!(reg.get("INV_TREE_NODE_ID_NAME_PROPERTY").unwrap(), "data.name");
    assert_eq!(reg.get("UPGRADE_VDS_VERSION_51").unwrap(), "Version 5.1.0");
    assert_eq!(
        reg.get("DETERMINE_NICS_TO_USE_LABEL").unwrap(),
        "Select network adapter tasks"
    );
}

#[test]
fn test_ha_labels_are_distinct_entries_even_when_equal() {
    // RESTART_PRIORITY_DISABLED and VM_MONITORING_DISABLED share the caption
    // "Disabled" but remain separate keys.
    let reg = test_constants::registry();
    assert_eq!(reg.get("RESTART_PRIORITY_DISABLED").unwrap(), "Disabled");
    assert_eq!(reg.get("VM_MONITORING_DISABLED").unwrap(), "Disabled");
}

#[test]
fn test_registries_stay_separate() {
    // Identifier names are not visible through the companion registry and
    // companion names are not re-exported by the identifier registry.
    assert!(test_constants::registry().get("ID_LOGIN_BUTTON").is_err());
    assert!(ids::registry().get("MANAGE_TAB").is_err());
}

#[test]
fn test_companion_values_are_stable_across_lookups() {
    let reg = test_constants::registry();
    let first = reg.get("STRING_SELECT_ALL").unwrap();
    for _ in 0..10 {
        assert_eq!(reg.get("STRING_SELECT_ALL").unwrap(), first);
    }
    assert_eq!(first, "Select All");
}
