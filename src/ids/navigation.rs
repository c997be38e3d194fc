//! Object navigator locators: the tree node items on the left-hand navigator
//! and the selected-set datagrid below it.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    declare_entries!(b;
        OBJ_NAV_NODE_ITEM_PREFIX = "treeNodeItem_";
        NAVIGATOR_PREFIX = [EXTENSION_PREFIX, "navigator."];
        SELECTED_SET_DATAGRID = "selectedSetDataGrid";
        OBJ_NAV_BACK_BUTTON = "navBackButton";
        OBJ_NAV_FORWARD_BUTTON = "navForwardButton";
        OBJ_NAV_HOME_BUTTON = "navHomeButton";
    );

    // Home screen nodes.
    declare_entries!(b;
        OBJ_NAV_HOME_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "home"];
        OBJ_NAV_VIRTUAL_INFRASTRUCTURE_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "virtualInfrastructure"];
        OBJ_NAV_MANAGE_MONITOR_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "manageMonitor"];
        OBJ_NAV_ADMINISTRATION_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "administration"];
        OBJ_NAV_TASKS_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "tasks"];
        OBJ_NAV_EVENTS_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "events"];
        OBJ_NAV_SEARCH_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "search"];
        OBJ_NAV_SAVEDSEARCH_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "savedSearch"];
        OBJ_NAV_TAG_MANAGER_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "tagManager"];
        OBJ_NAV_RULES_PROFILE_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "rulesProfiles"];
    );

    // Administration nodes.
    declare_entries!(b;
        OBJ_NAV_ROLE_MANAGER_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "roleManager"];
        OBJ_NAV_LICENSES_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "licenses"];
        OBJ_NAV_LICENSE_REPORTS_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "licenseReports"];
        OBJ_NAV_SOLUTION_PLUGIN_MANAGER_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "solutionPluginManager"];
        OBJ_NAV_SSO_USERS_GROUPS_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "ssoUsersGroups"];
        OBJ_NAV_SSO_CONFIGURATION_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "ssoConfiguration"];
    );

    // Inventory tree nodes, one per top-level inventory type.
    declare_entries!(b;
        OBJ_NAV_VCENTER_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "vCenter"];
        OBJ_NAV_HOSTS_CLUSTERS_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "hostsClusters"];
        OBJ_NAV_VMS_TEMPLATES_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "vmsTemplates"];
        OBJ_NAV_STORAGE_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "storage"];
        OBJ_NAV_NETWORKING_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "networking"];
        OBJ_NAV_HOST_PROFILES_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "hostProfiles"];
        OBJ_NAV_VM_STORAGE_PROFILES_NODE_ITEM = [OBJ_NAV_NODE_ITEM_PREFIX, NAVIGATOR_PREFIX, "vmStorageProfiles"];
    );

    section_declared(b, "navigation", before);
    Ok(())
}
