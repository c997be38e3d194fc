//! Inventory list views and their dataprovider handles.
//!
//! Two families: collection views (`vsphere.core.viVms.itemsView/list` and
//! friends, the flat lists reached from the navigator) and related-objects
//! views (`vsphere.core.<entity>.related/<collection>List`, the lists shown
//! on an object's Related Objects tab). A dataprovider id is always the view
//! id plus `.dataProvider`.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    declare_entries!(b;
        VIEW_LIST_SUFFIX = "itemsView/list";
        DATAPROVIDER_SUFFIX = ".dataProvider";
        RELATED_VIEW_INFIX = "related/";
    );

    // Collection views.
    declare_entries!(b;
        VMS_ID_VMS_VIEW = [EXTENSION_PREFIX, "viVms.", VIEW_LIST_SUFFIX];
        VM_TEMPLATES_ID_VM_TEMPLATES_VIEW = [EXTENSION_PREFIX, "viVmTemplates.", VIEW_LIST_SUFFIX];
        HOSTS_ID_HOSTS_VIEW = [EXTENSION_PREFIX, "viHosts.", VIEW_LIST_SUFFIX];
        CLUSTERS_ID_CLUSTERS_VIEW = [EXTENSION_PREFIX, "viClusters.", VIEW_LIST_SUFFIX];
        DATACENTERS_ID_DATACENTERS_VIEW = [EXTENSION_PREFIX, "viDatacenters.", VIEW_LIST_SUFFIX];
        DATASTORES_ID_DATASTORES_VIEW = [EXTENSION_PREFIX, "viDatastores.", VIEW_LIST_SUFFIX];
        DATASTORE_CLUSTERS_ID_DATASTORE_CLUSTERS_VIEW = [EXTENSION_PREFIX, "viDsClusters.", VIEW_LIST_SUFFIX];
        STANDARD_NETWORKS_ID_NETWORKS_VIEW = [EXTENSION_PREFIX, "viNetworks.", VIEW_LIST_SUFFIX];
        DISTRIBUTED_SWITCHES_ID_DISTRIBUTED_SWITCHES_VIEW = [EXTENSION_PREFIX, "viDvSwitches.", VIEW_LIST_SUFFIX];
        DISTRIBUTED_PORT_GROUPS_ID_DISTRIBUTED_PORT_GROUPS_VIEW = [EXTENSION_PREFIX, "viDvPortgroups.", VIEW_LIST_SUFFIX];
        RESOURCE_POOLS_ID_RESOURCE_POOLS_VIEW = [EXTENSION_PREFIX, "viResourcePools.", VIEW_LIST_SUFFIX];
        VAPPS_ID_VAPPS_VIEW = [EXTENSION_PREFIX, "viVApps.", VIEW_LIST_SUFFIX];
        HOST_PROFILES_ID_HOST_PROFILES_VIEW = [EXTENSION_PREFIX, "viHostProfiles.", VIEW_LIST_SUFFIX];
    );

    // Related-objects views.
    declare_entries!(b;
        VMS_ID_VIRTUAL_CENTER_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VC, RELATED_VIEW_INFIX, "vmsList"];
        VM_ID_DATACENTER_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, RELATED_VIEW_INFIX, "vmsList"];
        VM_ID_DATASTORE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, RELATED_VIEW_INFIX, "vmsList"];
        VM_ID_HOST_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, RELATED_VIEW_INFIX, "vmsList"];
        VMS_ID_VM_NETWORK_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_NETWORK, RELATED_VIEW_INFIX, "vmsList"];
        HOSTS_ID_VM_NETWORK_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_NETWORK, RELATED_VIEW_INFIX, "hostsList"];
        VM_TEMPLATE_ID_VIRTUAL_CENTER_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VC, RELATED_VIEW_INFIX, "vmTemplatesList"];
        VAPPS_ID_VIRTUAL_CENTER_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VC, RELATED_VIEW_INFIX, "vAppsList"];
        DV_PORT_GROUP_ID_VIRTUAL_CENTER_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VC, RELATED_VIEW_INFIX, "dvPortgroupsList"];
        UPLINK_PORTGROUP_ID_VDS_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, RELATED_VIEW_INFIX, "uplinkPortgroupsList"];
    );

    // Dataproviders on collection views.
    declare_entries!(b;
        VC_DATAPROVIDER_ID = [EXTENSION_PREFIX, "viVcServers.", VIEW_LIST_SUFFIX, DATAPROVIDER_SUFFIX];
        HOSTS_DATAPROVIDER_ID_HOSTS_VIEW = [HOSTS_ID_HOSTS_VIEW, DATAPROVIDER_SUFFIX];
        CLUSTERS_DATAPROVIDER_ID_CLUSTERS_VIEW = [CLUSTERS_ID_CLUSTERS_VIEW, DATAPROVIDER_SUFFIX];
        DATACENTERS_DATAPROVIDER_ID_DATACENTERS_VIEW = [DATACENTERS_ID_DATACENTERS_VIEW, DATAPROVIDER_SUFFIX];
        DATASTORES_DATAPROVIDER_ID_DATASTORES_VIEW = [DATASTORES_ID_DATASTORES_VIEW, DATAPROVIDER_SUFFIX];
        RESOURCE_POOLS_DATAPROVIDER_ID_RESOURCE_POOLS_VIEW = [RESOURCE_POOLS_ID_RESOURCE_POOLS_VIEW, DATAPROVIDER_SUFFIX];
    );

    // The Storage tree shows the same lists as the collection views, so the
    // storage-view dataproviders resolve to the same strings as the ones
    // above. Distinct names on purpose: test code written against the Storage
    // tree keeps reading its own constants.
    declare_entries!(b;
        DATASTORES_DATAPROVIDER_ID_STORAGE_VIEW = [DATASTORES_ID_DATASTORES_VIEW, DATAPROVIDER_SUFFIX];
        DATASTORE_CLUSTERS_DATAPROVIDER_ID_DATASTORE_CLUSTERS_VIEW = [DATASTORE_CLUSTERS_ID_DATASTORE_CLUSTERS_VIEW, DATAPROVIDER_SUFFIX];
        DATASTORE_CLUSTERS_DATAPROVIDER_ID_STORAGE_VIEW = [DATASTORE_CLUSTERS_ID_DATASTORE_CLUSTERS_VIEW, DATAPROVIDER_SUFFIX];
    );

    // Dataproviders on related-objects views.
    declare_entries!(b;
        VMS_DATAPROVIDER_ID_HOST_VIEW = [VM_ID_HOST_VIEW, DATAPROVIDER_SUFFIX];
        VMS_DATAPROVIDER_ID_STORAGE_VIEW = [VM_ID_DATASTORE_VIEW, DATAPROVIDER_SUFFIX];
        VM_TEMPLATES_DATAPROVIDER_ID_STORAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, RELATED_VIEW_INFIX, "vmTemplatesList", DATAPROVIDER_SUFFIX];
        VAPPS_DATAPROVIDER_ID_STORAGE_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, RELATED_VIEW_INFIX, "vAppsList", DATAPROVIDER_SUFFIX];
        DATASTORES_DATAPROVIDER_ID_HOST_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, RELATED_VIEW_INFIX, "datastoresList", DATAPROVIDER_SUFFIX];
        CHILD_RPS_DATAPROVIDER_ID_HOST_VIEW = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, RELATED_VIEW_INFIX, "childResourcePoolsList", DATAPROVIDER_SUFFIX];
    );

    // Dataproviders on the hosts-and-clusters and networking trees.
    declare_entries!(b;
        HOSTS_DATAPROVIDER_ID_COMPUTE_VIEW = [EXTENSION_PREFIX, "viCompute.hostsList", DATAPROVIDER_SUFFIX];
        CLUSTERS_DATAPROVIDER_ID_COMPUTE_VIEW = [EXTENSION_PREFIX, "viCompute.clustersList", DATAPROVIDER_SUFFIX];
        HOSTS_DATAPROVIDER_ID_NETWORKING_VIEW = [EXTENSION_PREFIX, "viNetworking.hostsList", DATAPROVIDER_SUFFIX];
        STANDARD_NETWORKS_DATAPROVIDER_ID_NETWORKING_VIEW = [EXTENSION_PREFIX, "viNetworking.networksList", DATAPROVIDER_SUFFIX];
        DISTRIBUTED_SWITCHES_DATAPROVIDER_ID_NETWORKING_VIEW = [EXTENSION_PREFIX, "viNetworking.dvsList", DATAPROVIDER_SUFFIX];
        DISTRIBUTED_PORT_GROUPS_DATAPROVIDER_ID_NETWORKING_VIEW = [EXTENSION_PREFIX, "viNetworking.dvPortgroupsList", DATAPROVIDER_SUFFIX];
        UPLINK_PORT_GROUPS_DATAPROVIDER_ID_NETWORKING_VIEW = [EXTENSION_PREFIX, "viNetworking.uplinkPortgroupsList", DATAPROVIDER_SUFFIX];
    );

    section_declared(b, "views", before);
    Ok(())
}
