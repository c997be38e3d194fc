use pretty_assertions::assert_eq;

use vcui_locators::{Fragment, Registry, RegistryBuilder, RegistryError};

fn leak(registry: Registry) -> &'static Registry {
    Box::leak(Box::new(registry))
}

#[test]
fn test_literal_lookup() {
    let mut b = RegistryBuilder::new("test");
    b.literal("ID_LOGIN_BUTTON", "loginButton").unwrap();
    let reg = b.freeze();

    assert_eq!(reg.get("ID_LOGIN_BUTTON").unwrap(), "loginButton");
    assert!(reg.contains("ID_LOGIN_BUTTON"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn test_unknown_name_fails_fast() {
    let reg = RegistryBuilder::new("test").freeze();

    assert_eq!(
        reg.get("nonexistent_name_xyz"),
        Err(RegistryError::UnknownName("nonexistent_name_xyz".to_string()))
    );
}

#[test]
fn test_duplicate_name_is_a_construction_error() {
    let mut b = RegistryBuilder::new("test");
    b.literal("ID_OK", "okButton").unwrap();

    assert_eq!(
        b.literal("ID_OK", "okButton2"),
        Err(RegistryError::DuplicateName("ID_OK".to_string()))
    );
    // A derived redeclaration is rejected the same way.
    assert_eq!(
        b.derived("ID_OK", &[Fragment::Lit("ok")]),
        Err(RegistryError::DuplicateName("ID_OK".to_string()))
    );
}

#[test]
fn test_derived_concatenates_in_declaration_order() {
    let mut b = RegistryBuilder::new("test");
    b.literal("EXTENSION_PREFIX", "vsphere.core.").unwrap();
    b.literal("EXTENSION_ENTITY_VM", "vm.").unwrap();
    b.derived(
        "ID_VM_POWER_ON",
        &[
            Fragment::Ref("EXTENSION_PREFIX"),
            Fragment::Ref("EXTENSION_ENTITY_VM"),
            Fragment::Lit("powerOnAction"),
        ],
    )
    .unwrap();
    let reg = b.freeze();

    assert_eq!(reg.get("ID_VM_POWER_ON").unwrap(), "vsphere.core.vm.powerOnAction");
}

#[test]
fn test_derived_may_reference_a_derived_entry() {
    let mut b = RegistryBuilder::new("test");
    b.literal("A", "a.").unwrap();
    b.derived("AB", &[Fragment::Ref("A"), Fragment::Lit("b.")])
        .unwrap();
    b.derived("ABC", &[Fragment::Ref("AB"), Fragment::Lit("c")])
        .unwrap();
    let reg = b.freeze();

    assert_eq!(reg.get("ABC").unwrap(), "a.b.c");
}

#[test]
fn test_forward_reference_only() {
    // Declaration order is dependency order: referencing a name that has not
    // been declared yet fails at construction time.
    let mut b = RegistryBuilder::new("test");
    assert_eq!(
        b.derived("EARLY", &[Fragment::Ref("LATE")]),
        Err(RegistryError::UnknownName("LATE".to_string()))
    );
}

#[test]
fn test_distinct_names_may_share_a_value() {
    let mut b = RegistryBuilder::new("test");
    b.literal("EXTENSION_ENTITY_FOLDER", "folder.").unwrap();
    b.literal("EXTENSION_ENTITY_VC", "folder.").unwrap();
    let reg = b.freeze();

    assert_eq!(reg.get("EXTENSION_ENTITY_FOLDER").unwrap(), "folder.");
    assert_eq!(
        reg.get("EXTENSION_ENTITY_FOLDER").unwrap(),
        reg.get("EXTENSION_ENTITY_VC").unwrap()
    );
}

#[test]
fn test_collaborator_names_resolve_in_recipes() {
    let mut companion = RegistryBuilder::new("companion");
    companion.literal("EQUALS_SIGN", "=").unwrap();
    companion.literal("VERSION_LABEL", "Version 5.1.0").unwrap();
    let companion = leak(companion.freeze());

    let mut b = RegistryBuilder::with_collaborator("main", companion);
    b.literal("AUTOMATIONNAME", "automationName").unwrap();
    b.derived(
        "ID_VERSION_RADIO",
        &[
            Fragment::Ref("AUTOMATIONNAME"),
            Fragment::Ref("EQUALS_SIGN"),
            Fragment::Ref("VERSION_LABEL"),
        ],
    )
    .unwrap();
    let reg = b.freeze();

    assert_eq!(
        reg.get("ID_VERSION_RADIO").unwrap(),
        "automationName=Version 5.1.0"
    );
    // Collaborator names are consumed during construction, not re-exported.
    assert!(!reg.contains("EQUALS_SIGN"));
}

#[test]
fn test_lookup_is_idempotent() {
    let mut b = RegistryBuilder::new("test");
    b.literal("ID_OK", "okButton").unwrap();
    let reg = b.freeze();

    let first = reg.get("ID_OK").unwrap();
    for _ in 0..100 {
        assert_eq!(reg.get("ID_OK").unwrap(), first);
    }
}

#[test]
fn test_names_iterate_in_declaration_order() {
    let mut b = RegistryBuilder::new("test");
    b.literal("C", "3").unwrap();
    b.literal("A", "1").unwrap();
    b.literal("B", "2").unwrap();
    let reg = b.freeze();

    let names: Vec<&str> = reg.names().collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_snapshot_reports_every_entry() {
    let mut b = RegistryBuilder::new("test");
    b.literal("PREFIX", "vsphere.core.").unwrap();
    b.derived("ACTION", &[Fragment::Ref("PREFIX"), Fragment::Lit("x")])
        .unwrap();
    let reg = b.freeze();

    let snap = vcui_locators::snapshot::snapshot(&reg);
    assert_eq!(snap.registry, "test");
    assert_eq!(snap.entry_count, 2);
    assert!(!snap.entries[0].derived);
    assert!(snap.entries[1].derived);
    assert_eq!(snap.entries[1].value, "vsphere.core.x");
}
