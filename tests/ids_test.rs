use pretty_assertions::assert_eq;

use vcui_locators::registry::Fragment;
use vcui_locators::{ids, test_constants};

#[test]
fn test_registry_initializes_once_and_is_nonempty() {
    let reg = ids::registry();
    assert!(reg.len() > 200, "expected a full registry, got {}", reg.len());

    // Same frozen instance on every access.
    assert!(std::ptr::eq(reg, ids::registry()));
}

#[test]
fn test_literal_worked_example() {
    assert_eq!(ids::registry().get("ID_LOGIN_BUTTON").unwrap(), "loginButton");
}

#[test]
fn test_derived_worked_example() {
    let reg = ids::registry();
    assert_eq!(reg.get("EXTENSION_PREFIX").unwrap(), "vsphere.core.");
    assert_eq!(reg.get("EXTENSION_ENTITY_VM").unwrap(), "vm.");
    assert_eq!(
        reg.get("ID_ACTION_POWER_ON").unwrap(),
        "vsphere.core.vm.powerOnAction"
    );
}

#[test]
fn test_folder_and_vc_entities_alias_the_same_fragment() {
    let reg = ids::registry();
    assert_eq!(reg.get("EXTENSION_ENTITY_FOLDER").unwrap(), "folder.");
    assert_eq!(reg.get("EXTENSION_ENTITY_VC").unwrap(), "folder.");
}

#[test]
fn test_summary_status_chrome_is_prefixed_per_entity() {
    let reg = ids::registry();
    assert_eq!(
        reg.get("ID_VM_SUMMARY_STATUS_CHROME").unwrap(),
        "vsphere.core.vm.summary.statusView.chrome"
    );
    assert_eq!(
        reg.get("ID_CLUSTER_SUMMARY_STATUS_CHROME").unwrap(),
        "vsphere.core.cluster.summary.statusView.chrome"
    );
}

#[test]
fn test_primary_tab_views_are_declared_per_entity() {
    let reg = ids::registry();
    assert_eq!(
        reg.get("ID_VM_GETTING_STARTED_VIEW").unwrap(),
        "vsphere.core.vm.gettingStartedView"
    );
    assert_eq!(
        reg.get("ID_HOST_MONITOR_VIEW").unwrap(),
        "vsphere.core.host.monitorView"
    );
    assert_eq!(
        reg.get("ID_DVS_MANAGE_VIEW").unwrap(),
        "vsphere.core.dvs.manageView"
    );
    // The whole family ships for every entity that declares one of them.
    for entity in ["VM", "HOST", "CLUSTER", "DATACENTER", "DATASTORE", "DVS"] {
        for tab in ["GETTING_STARTED", "MONITOR", "MANAGE"] {
            let name = format!("ID_{entity}_{tab}_VIEW");
            assert!(reg.contains(&name), "{name} is missing");
        }
    }
}

#[test]
fn test_collection_view_ids() {
    let reg = ids::registry();
    assert_eq!(
        reg.get("VMS_ID_VMS_VIEW").unwrap(),
        "vsphere.core.viVms.itemsView/list"
    );
    assert_eq!(
        reg.get("HOSTS_DATAPROVIDER_ID_HOSTS_VIEW").unwrap(),
        "vsphere.core.viHosts.itemsView/list.dataProvider"
    );
}

#[test]
fn test_storage_view_dataproviders_alias_the_collection_ones() {
    // Distinct symbolic names resolving to equal strings, on purpose.
    let reg = ids::registry();
    assert_eq!(
        reg.get("DATASTORES_DATAPROVIDER_ID_STORAGE_VIEW").unwrap(),
        reg.get("DATASTORES_DATAPROVIDER_ID_DATASTORES_VIEW").unwrap()
    );
    assert_eq!(
        reg.get("DATASTORE_CLUSTERS_DATAPROVIDER_ID_STORAGE_VIEW").unwrap(),
        reg.get("DATASTORE_CLUSTERS_DATAPROVIDER_ID_DATASTORE_CLUSTERS_VIEW")
            .unwrap()
    );
}

#[test]
fn test_navigator_node_items_carry_the_tree_prefix() {
    let reg = ids::registry();
    assert_eq!(
        reg.get("OBJ_NAV_ADMINISTRATION_NODE_ITEM").unwrap(),
        "treeNodeItem_vsphere.core.navigator.administration"
    );
    assert_eq!(
        reg.get("SELECTED_SET_DATAGRID").unwrap(),
        "selectedSetDataGrid"
    );
}

#[test]
fn test_cross_registry_derivations_splice_companion_labels() {
    let reg = ids::registry();
    assert_eq!(
        reg.get("ID_UPGRADE_VDS_VERSION_51_RADIO").unwrap(),
        "automationName=Version 5.1.0"
    );
    assert_eq!(
        reg.get("ID_WIZARD_PAGE_DETERMINE_NICS").unwrap(),
        "automationName=Select network adapter tasks"
    );
    assert_eq!(
        reg.get("ID_MANAGE_MAIN_TAB_CONTAINER").unwrap(),
        "tabNavigator/automationName=Manage"
    );
}

#[test]
fn test_context_menu_entries_route_through_the_menu_id() {
    assert_eq!(
        ids::registry()
            .get("ID_CONTEXTMENU_EDIT_DEFAULT_VM_COMPATIBILITY")
            .unwrap(),
        "afContextMenu.vsphere.core.vm.editDefaultVmCompatibilityAction"
    );
}

#[test]
fn test_unknown_name_is_rejected() {
    assert!(ids::registry().get("nonexistent_name_xyz").is_err());
}

#[test]
fn test_every_value_is_nonempty() {
    let reg = ids::registry();
    for entry in reg.entries() {
        assert!(!entry.value.is_empty(), "{} is empty", entry.name);
    }
}

#[test]
fn test_every_derived_recipe_round_trips() {
    // The stored value of each derived entry must equal the ordered
    // concatenation of its recipe, resolving refs against this registry
    // first and the companion registry second.
    let reg = ids::registry();
    let companion = test_constants::registry();

    let mut derived = 0usize;
    for entry in reg.entries() {
        let Some(recipe) = &entry.recipe else { continue };
        derived += 1;

        let mut expected = String::new();
        for part in recipe {
            match part {
                Fragment::Lit(s) => expected.push_str(s),
                Fragment::Ref(name) => {
                    let resolved = reg
                        .get(name)
                        .or_else(|_| companion.get(name))
                        .unwrap_or_else(|_| panic!("{}: unresolved ref {}", entry.name, name));
                    expected.push_str(resolved);
                }
            }
        }
        assert_eq!(expected, entry.value, "recipe mismatch for {}", entry.name);
    }
    assert!(derived > 100, "expected many derived entries, got {derived}");
}
