//! Companion registry of UI label strings and locator property names.
//!
//! The identifier registry in [`crate::ids`] links to this one as its
//! collaborator: a few derived locators splice these label values into
//! compound paths (wizard page titles, versioned action labels). Test code
//! also reads it directly when asserting on visible text.

use std::sync::LazyLock;

use crate::error::RegistryError;
use crate::registry::{declare_entries, Registry, RegistryBuilder};

static TEST_CONSTANTS: LazyLock<Registry> = LazyLock::new(|| {
    build().unwrap_or_else(|e| panic!("test-constants registry failed to initialize: {e}"))
});

/// The frozen companion registry. First call forces initialization; an
/// authoring defect aborts the process.
pub fn registry() -> &'static Registry {
    &TEST_CONSTANTS
}

fn build() -> Result<Registry, RegistryError> {
    let mut b = RegistryBuilder::new("test-constants");

    // Generic lexical fragments used when composing locator expressions.
    declare_entries!(b;
        EQUALS_SIGN = "=";
        COMMA_SIGN = ",";
        FORWARD_SLASH = "/";
        STRING_SELECT_ALL = "Select All";
        FILTER = "Filter";
    );

    // Inventory tree node properties. Tree nodes are addressed as
    // "<property><EQUALS_SIGN><value>" appended to the navigator path.
    declare_entries!(b;
        INV_TREE_NODE_ID_NAME_PROPERTY = "data.name";
        INV_TREE_NODE_ID_TYPE_PROPERTY = "data.type";
        DATA_PROVIDER_LIST_LABEL = "dataProvider.list.source";
    );

    // Main navigation tab captions.
    declare_entries!(b;
        GETTING_STARTED_TAB = "Getting Started";
        SUMMARY_TAB = "Summary";
        MONITOR_TAB = "Monitor";
        MANAGE_TAB = "Manage";
        RELATED_ITEMS_TAB = "Related Objects";
    );

    // Cluster HA labels: VM restart priority.
    declare_entries!(b;
        RESTART_PRIORITY_CLUSTER_DEFAULT = "Cluster default";
        RESTART_PRIORITY_DISABLED = "Disabled";
        RESTART_PRIORITY_LOW = "Low";
        RESTART_PRIORITY_MEDIUM = "Medium";
        RESTART_PRIORITY_HIGH = "High";
    );

    // Cluster HA labels: host isolation response.
    declare_entries!(b;
        ISOLATION_RESPONSE_CLUSTER_DEFAULT = "Use cluster setting";
        ISOLATION_RESPONSE_LEAVE_POWERED_ON = "Leave powered on";
        ISOLATION_RESPONSE_POWER_OFF = "Power off";
        ISOLATION_RESPONSE_SHUT_DOWN = "Shut down";
    );

    // Cluster HA labels: VM monitoring.
    declare_entries!(b;
        VM_MONITORING_DISABLED = "Disabled";
        VM_MONITORING_ONLY = "VM Monitoring Only";
        VM_MONITORING_AND_APP = "VM and Application Monitoring";
    );

    // Wizard page titles consumed by derived locators in the identifier
    // registry.
    declare_entries!(b;
        DETERMINE_NICS_TO_USE_LABEL = "Select network adapter tasks";
        SELECT_HOSTS_LABEL = "Select hosts";
        READY_TO_COMPLETE_LABEL = "Ready to complete";
    );

    // Distributed switch upgrade wizard version captions.
    declare_entries!(b;
        UPGRADE_VDS_VERSION_50 = "Version 5.0.0";
        UPGRADE_VDS_VERSION_51 = "Version 5.1.0";
        UPGRADE_VDS_VERSION_55 = "Version 5.5.0";
    );

    Ok(b.freeze())
}
