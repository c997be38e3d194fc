//! Extension namespace fragments and the per-entity composite identifiers
//! built from them. Everything else in the registry leans on this section, so
//! it declares first.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    // Locator property names used when composing expression locators.
    declare_entries!(b;
        AUTOMATIONNAME = "automationName";
        CLASS_NAME = "className";
        TEXT_PROPERTY = "text";
        NAME_PROPERTY = "name";
    );

    // Every client extension identifier starts with this prefix.
    declare_entries!(b;
        EXTENSION_PREFIX = "vsphere.core.";
    );

    // Entity fragments. Each ends with a trailing dot so derived recipes can
    // append a bare suffix.
    //
    // EXTENSION_ENTITY_HOST_PROFILE and EXTENSION_ENTITY_HOST_PROFILE_CAMEL
    // are both live: the compliance checker plugin registered its actions
    // under the camel-case spelling while the rest of the host profile
    // bundle uses lower case. Keep both.
    declare_entries!(b;
        EXTENSION_ENTITY_VM = "vm.";
        EXTENSION_ENTITY_VM_TEMPLATE = "template.";
        EXTENSION_ENTITY_HOST = "host.";
        EXTENSION_ENTITY_CLUSTER = "cluster.";
        EXTENSION_ENTITY_DATACENTER = "datacenter.";
        EXTENSION_ENTITY_DATASTORE = "datastore.";
        EXTENSION_ENTITY_DATASTORE_CLUSTER = "dscluster.";
        EXTENSION_ENTITY_NETWORK = "network.";
        EXTENSION_ENTITY_DVS = "dvs.";
        EXTENSION_ENTITY_DVPORTGROUP = "dvPortgroup.";
        EXTENSION_ENTITY_RESOURCE_POOL = "resourcePool.";
        EXTENSION_ENTITY_VAPP = "vApp.";
        EXTENSION_ENTITY_FOLDER = "folder.";
        EXTENSION_ENTITY_VC = "folder.";
        EXTENSION_ENTITY_HOST_PROFILE = "hostprofile.";
        EXTENSION_ENTITY_HOST_PROFILE_CAMEL = "hostProfile.";
        EXTENSION_ENTITY_STORAGE_PROFILE = "storageProfile.";
    );

    // Summary tab status portlet chrome, per entity.
    declare_entries!(b;
        ID_VM_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "summary.statusView.chrome"];
        ID_HOST_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "summary.statusView.chrome"];
        ID_CLUSTER_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "summary.statusView.chrome"];
        ID_DATACENTER_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "summary.statusView.chrome"];
        ID_DATASTORE_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "summary.statusView.chrome"];
        ID_DVS_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "summary.statusView.chrome"];
        ID_DVPORTGROUP_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVPORTGROUP, "summary.statusView.chrome"];
        ID_RESOURCE_POOL_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "summary.statusView.chrome"];
        ID_VAPP_SUMMARY_STATUS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "summary.statusView.chrome"];
    );

    // Primary tab views per entity: getting started, monitor, manage. The
    // summary tab is covered by the status chrome ids above.
    declare_entries!(b;
        ID_VM_GETTING_STARTED_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "gettingStartedView"];
        ID_VM_MONITOR_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "monitorView"];
        ID_VM_MANAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "manageView"];
        ID_HOST_GETTING_STARTED_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "gettingStartedView"];
        ID_HOST_MONITOR_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "monitorView"];
        ID_HOST_MANAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "manageView"];
        ID_CLUSTER_GETTING_STARTED_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "gettingStartedView"];
        ID_CLUSTER_MONITOR_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "monitorView"];
        ID_CLUSTER_MANAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "manageView"];
        ID_DATACENTER_GETTING_STARTED_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "gettingStartedView"];
        ID_DATACENTER_MONITOR_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "monitorView"];
        ID_DATACENTER_MANAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "manageView"];
        ID_DATASTORE_GETTING_STARTED_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "gettingStartedView"];
        ID_DATASTORE_MONITOR_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "monitorView"];
        ID_DATASTORE_MANAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "manageView"];
        ID_DVS_GETTING_STARTED_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "gettingStartedView"];
        ID_DVS_MONITOR_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "monitorView"];
        ID_DVS_MANAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "manageView"];
    );

    // Other per-entity summary portlets.
    declare_entries!(b;
        ID_VM_HARDWARE_SUMMARY_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "hardwareSummaryView.chrome"];
        ID_VM_ANNOTATIONS_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "summary.annotationsView.chrome"];
        ID_HOST_HARDWARE_SUMMARY_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "hardwareSummaryView.chrome"];
        ID_CLUSTER_RESOURCES_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "summary.resourcesView.chrome"];
        ID_DATASTORE_CAPACITY_CHROME = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "summary.capacityView.chrome"];
    );

    // Host graphics settings views.
    declare_entries!(b;
        ID_HOST_GRAPHICS_TAB_NAVIGATOR = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "manage.settings.graphicsTabs/tabNavigator"];
        ID_HOST_GRAPHICS_DEVICE_LIST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "manage.settings.graphics.vgaList/list"];
        ID_HOST_GRAPHICS_DEVICE_TITLE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "manage.settings.graphics.vgaList/titleLabel"];
        ID_HOST_GRAPHICS_VM_LIST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "manage.settings.graphics.vmList/list"];
        ID_HOST_GRAPHICS_VM_TITLE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "manage.settings.graphics.vmList/titleLabel"];
    );

    section_declared(b, "extension", before);
    Ok(())
}
