//! Action framework identifiers: the ids the action invoker and context
//! menus resolve when a test fires an action against an inventory object.
//!
//! Almost everything here derives from the extension prefix plus an entity
//! fragment; the few literal entries are plain toolbar buttons that never
//! went through the action framework.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    // VM power and guest lifecycle. ID_ACTION_SHUTDOWN_SINGLE_GUEST predates
    // ID_ACTION_SHUTDOWN_GUEST and resolves to the same action id; both names
    // are still referenced by suites.
    declare_entries!(b;
        ID_ACTION_POWER_ON = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "powerOnAction"];
        ID_ACTION_POWER_OFF = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "powerOffAction"];
        ID_ACTION_SUSPEND = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "suspendAction"];
        ID_ACTION_RESET = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "resetAction"];
        ID_ACTION_SHUTDOWN_GUEST = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "shutdownGuestAction"];
        ID_ACTION_SHUTDOWN_SINGLE_GUEST = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "shutdownGuestAction"];
        ID_ACTION_RESTART_GUEST = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "restartGuestAction"];
        ID_ACTION_OPEN_CONSOLE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "openConsoleAction"];
    );

    // VM provisioning, cloning and templates.
    declare_entries!(b;
        ID_ACTION_CREATE_VM = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "createVmAction"];
        ID_ACTION_CREATE_VM_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "createVmAction"];
        ID_ACTION_CREATE_VM_VMFolder = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createVmAction"];
        ID_ACTION_CLONE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "cloneVmAction"];
        ID_ACTION_VM_CLONE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "cloneVmAction"];
        ID_ACTION_VM_CLONE_TO_TEMPLATE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "cloneVmToTemplateAction"];
        ID_ACTION_TEMPLATE_CLONE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM_TEMPLATE, "cloneTemplateAction"];
        ID_ACTION_CONVERT_TO_TEMPLATE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "convertToTemplateAction"];
        ID_ACTION_CONVERT_TEMPLATE_TO_VM = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM_TEMPLATE, "convertToVmAction"];
        ID_ACTION_DEPLOY_VIRTUAL_MACHINE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM_TEMPLATE, "deployVmAction"];
        ID_ACTION_REGISTER_VM = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "registerVmAction"];
        ID_ACTION_UNREGISTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "unregisterAction"];
        ID_ACTION_DEPLOY_OVF = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "deployOvfAction"];
        ID_ACTION_EXPORT_OVF = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "exportOvfAction"];
    );

    // VM snapshots, migration and fault tolerance.
    declare_entries!(b;
        ID_ACTION_TAKE_SNAPSHOT = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "takeSnapshotAction"];
        ID_ACTION_SNAPSHOT_MANAGER = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "snapshotManagerAction"];
        ID_ACTION_REVERT_CURRENT_SNAPSHOT = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "revertToCurrentSnapshotAction"];
        ID_ACTION_CONSOLIDATE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "consolidateAction"];
        ID_ACTION_MIGRATE = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "migrateAction"];
        ID_ACTION_ENABLE_FT = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "turnOnFtAction"];
        ID_ACTION_DISABLE_FT = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "turnOffFtAction"];
        ID_ACTION_TURN_FT_ON = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "turnOnFtAction"];
        ID_ACTION_TURN_FT_OFF = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "turnOffFtAction"];
        ID_ACTION_TEST_FAILOVER = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "testFailoverAction"];
        ID_ACTION_TEST_RESTART_SECONDARY = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "testRestartSecondaryAction"];
        ID_ACTION_MIGRATE_SECONDARY = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "migrateSecondaryAction"];
    );

    // VM tools, hardware and configuration.
    declare_entries!(b;
        ID_ACTION_INSTALL_UPGRADE_TOOLS = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "installToolsAction"];
        ID_ACTION_UNMOUNT_TOOLS = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "unmountToolsAction"];
        ID_ACTION_UPGRADE_VIRTUAL_HW = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "upgradeVirtualHardwareAction"];
        ID_ACTION_EDIT_SETTINGS = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "editAction"];
        ID_ACTION_ANNOTATION = [EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "editAnnotationAction"];
        ID_EDIT_VM_START_SHUTDOWN_CONFIG = "editVmStartupShutdownButton";
    );

    // Host lifecycle and connection state.
    declare_entries!(b;
        ID_ACTION_ADDHOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "addAction"];
        ID_ACTION_ENTER_MAINTENANCE_MODE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "enterMaintenanceAction"];
        ID_ACTION_EXIT_MAINTENANCE_MODE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "exitMaintenanceAction"];
        ID_ACTION_ENTER_STANDBY_MODE_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "enterStandbyAction"];
        ID_ACTION_POWER_ON_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "powerOnAction"];
        ID_ACTION_REBOOT = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "rebootAction"];
        ID_ACTION_SHUTDOWN = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "shutdownAction"];
        ID_ACTION_SHUTDOWN_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "shutdownAction"];
        ID_ACTION_DISCONNECT = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "disconnectAction"];
        ID_ACTION_RECONNECT = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "reconnectAction"];
    );

    // Host storage and networking configuration.
    declare_entries!(b;
        ID_ACTION_ADD_NETWORKING = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "addNetworkingAction"];
        ID_ACTION_ADD_STORAGE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "addStorageAction"];
        ID_ACTION_ADD_DIAGNOSTIC_PARTITION = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "addDiagnosticPartitionAction"];
        ID_ACTION_RESCAN_STORAGE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "rescanStorageAction"];
        ID_ACTION_RESCAN_ADAPTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "rescanAdapterAction"];
        ID_ACTION_REFRESH_ADAPTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST, "refreshAdapterAction"];
        ID_BUTTON_ADD_ISCSI = "addIscsiAdapterButton";
        ID_HOST_STORAGE_IO_CONTROL = "storageIOControlPanel";
    );

    // Cluster.
    declare_entries!(b;
        ID_ACTION_CREATE_CLUSTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "createAction"];
        ID_ACTION_RECONFIGURE_HA = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "reconfigureHaAction"];
        ID_ACTION_EDIT_GENERAL_SETTINGS = [EXTENSION_PREFIX, EXTENSION_ENTITY_CLUSTER, "editGeneralSettingsAction"];
    );

    // Datacenter and folders.
    declare_entries!(b;
        ID_ACTION_NEW_DC = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "createAction"];
        ID_ACTION_UNREGISTER_DC = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "removeAction"];
        ID_REMOVE_DATACENTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATACENTER, "removeAction"];
        ID_NEW_DATACENTER_BUTTON = "newDatacenterButton";
        ID_ACTION_NEW_FOLDER = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createAction"];
        ID_ACTION_NEW_VMFOLDER = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createVmFolderAction"];
        ID_ACTION_NEW_VMSUBFOLDER = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createVmFolderAction"];
        ID_ACTION_HOSTANDCLUSTER_FOLDER = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createHostFolderAction"];
        ID_ACTION_NETWORK_FOLDER = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createNetworkFolderAction"];
        ID_ACTION_STORAGE_FOLDER = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "createStorageFolderAction"];
        ID_ACTION_DC_FOLDERS_RENAME = [EXTENSION_PREFIX, EXTENSION_ENTITY_FOLDER, "renameAction"];
    );

    // Datastores.
    declare_entries!(b;
        ID_ACTION_PROVISION_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "createAction"];
        ID_ACTION_MOUNT_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "mountAction"];
        ID_ACTION_UNMOUNT_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "unmountAction"];
        ID_ACTION_UNMOUNT_NFS_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "unmountAction"];
        ID_ACTION_REMOVE_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "removeAction"];
        ID_ACTION_RENAME_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "renameAction"];
        ID_ACTION_INCREASE_DATASTORE_CAPACITY = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "increaseCapacityAction"];
        ID_ACTION_UPGRADE_VMFS5_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "upgradeVmfsAction"];
        ID_ACTION_FILE_BROWSER = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "browseFilesAction"];
        ID_ACTION_CONFIGURE_STORAGE_IO_CONTROL = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "configureSiocAction"];
        ID_ACTION_RESCAN_DATASTORE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "rescanAction"];
        ID_ACTION_SDRS_ENTER_MAINTENANCE_MODE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "enterMaintenanceAction"];
        ID_ACTION_SDRS_EXIT_MAINTENANCE_MODE = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE, "exitMaintenanceAction"];
    );

    // Datastore clusters.
    declare_entries!(b;
        ID_ACTION_NEW_DS_CLUSTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE_CLUSTER, "createAction"];
        ID_ACTION_REMOVE_DS_CLUSTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE_CLUSTER, "removeAction"];
        ID_ACTION_RENAME_DS_CLUSTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE_CLUSTER, "renameAction"];
        ID_ACTION_MOVE_OUT_OF_DATASTORE_CLUSTER = [EXTENSION_PREFIX, EXTENSION_ENTITY_DATASTORE_CLUSTER, "moveOutAction"];
    );

    // Networking.
    declare_entries!(b;
        ID_ACTION_CREATE_VDS = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "createAction"];
        ID_ACTION_EDIT_SETTINGS_VDS = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "editAction"];
        ID_ACTION_EDIT_NETFLOW_VDS = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "editNetFlowAction"];
        ID_ACTION_MANAGE_PORTGROUPS_VDS = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "managePortgroupsAction"];
        ID_ACTION_VDS_MANAGE_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "manageHostsAction"];
        ID_ACTION_UPGRADE_VDS = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "upgradeAction"];
        ID_ACTION_CREATE_DVPORTGROUP = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVS, "createPortgroupAction"];
        ID_ACTION_EDIT_SETTINGS_DVPORTGROUP = [EXTENSION_PREFIX, EXTENSION_ENTITY_DVPORTGROUP, "editAction"];
        ID_ACTION_CREATE_PORT_GROUP = [EXTENSION_PREFIX, EXTENSION_ENTITY_NETWORK, "createPortgroupAction"];
        ID_ACTION_MOVE_NETWORK = [EXTENSION_PREFIX, EXTENSION_ENTITY_NETWORK, "moveAction"];
        ID_ACTION_MIGRATE_VM_NETWORKING = [EXTENSION_PREFIX, EXTENSION_ENTITY_NETWORK, "migrateVmNetworkingAction"];
    );

    // Resource pools and vApps.
    declare_entries!(b;
        ID_ACTION_NEW_RP = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "createAction"];
        ID_ACTION_REMOVE_RP = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "removeAction"];
        ID_ACTION_EDIT_SETTINGS_RP = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "editAction"];
        ID_ACTION_EDIT_CPU_SETTINGS_RP = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "editCpuAction"];
        ID_ACTION_EDIT_MEMORY_SETTINGS_RP = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "editMemoryAction"];
        ID_ACTION_RESTORE_RESOURCEPOOL = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "restoreAction"];
        ID_ACTION_EDIT_RESOURCE_SETTING = [EXTENSION_PREFIX, EXTENSION_ENTITY_RESOURCE_POOL, "editAction"];
        ID_ACTION_NEW_VAPP = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "createAction"];
        ID_ACTION_CLONE_VAPP = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "cloneAction"];
        ID_ACTION_EDIT_SETTINGS_VAPP = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "editAction"];
        ID_VAPP_POWER_ON = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "powerOnAction"];
        ID_VAPP_POWER_OFF = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "powerOffAction"];
        ID_VAPP_SUSPEND = [EXTENSION_PREFIX, EXTENSION_ENTITY_VAPP, "suspendAction"];
    );

    // Host profiles. The compliance checks live under the camel-case entity
    // spelling, everything else under the lower-case one.
    declare_entries!(b;
        ID_ACTION_CREATE_HOST_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "createAction"];
        ID_ACTION_CREATE_HOST_PROFILE_MENU = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "createFromHostAction"];
        ID_ACTION_EDIT_HOST_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "editHostProfileAction"];
        ID_ACTION_EDIT_HOST_PROFILE_MENU = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "editHostProfileAction"];
        ID_ACTION_DELETE_HOST_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "deleteAction"];
        ID_ACTION_DELETE_HOST_PROFILE_MENU = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "deleteAction"];
        ID_ACTION_DUPLICATE_HOST_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "copyHostProfileSettingsAction"];
        ID_ACTION_HOST_PROFILE_RENAME = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "renameAction"];
        ID_ACTION_ATTACH_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "attachAction"];
        ID_ACTION_DETACH_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "detachAction"];
        ID_ACTION_CHANGE_HOST_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "changeAction"];
        ID_ACTION_REMEDIATE_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "remediateHostsProfileAction"];
        ID_ACTION_RESET_HOST_CUSTOMIZATIONS = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "editHostCustomizationsAction"];
        ID_ACTION_COPY_SETTINGS_FROM_HOST = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE, "copySettingsFromHostAction"];
        ID_ACTION_CHECK_COMPLIANCE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE_CAMEL, "checkComplianceAction"];
        ID_ACTION_CHECK_HOST_PROFILE_COMPLIANCE = [EXTENSION_PREFIX, EXTENSION_ENTITY_HOST_PROFILE_CAMEL, "checkComplianceAction"];
    );

    // Storage profiles, tags, alarms and scheduled tasks.
    declare_entries!(b;
        ID_ACTION_ASSIGN_STORAGE_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_STORAGE_PROFILE, "assignAction"];
        ID_ACTION_EDIT_STORAGE_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_STORAGE_PROFILE, "editAction"];
        ID_ACTION_REMOVE_STORAGE_PROFILE = [EXTENSION_PREFIX, EXTENSION_ENTITY_STORAGE_PROFILE, "removeAction"];
        ID_ACTION_ASSIGN_TAG = [EXTENSION_PREFIX, "common.assignTagAction"];
        ID_ACTION_ADD_ALARM = [EXTENSION_PREFIX, "alarm.addAction"];
        ID_ACTION_EDIT_ALARM = [EXTENSION_PREFIX, "alarm.editAction"];
        ID_ACTION_DISABLE_ALARM = [EXTENSION_PREFIX, "alarm.disableAction"];
        ID_ACTION_RUN_SCHEDULED_TASK = [EXTENSION_PREFIX, "scheduledtask.runAction"];
    );

    // Generic object actions shared by every inventory type.
    declare_entries!(b;
        ID_ACTION_RENAME = [EXTENSION_PREFIX, "common.renameAction"];
        ID_ACTION_REMOVE = [EXTENSION_PREFIX, "common.removeAction"];
        ID_ACTION_DELETE = [EXTENSION_PREFIX, "common.deleteAction"];
        ID_ACTION_MOVE = [EXTENSION_PREFIX, "common.moveAction"];
    );

    // Context-menu-only entries, addressed through the menu id.
    declare_entries!(b;
        ID_CONTEXTMENU_EDIT_DEFAULT_VM_COMPATIBILITY = [ID_CONTEXT_MENU, ".", EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "editDefaultVmCompatibilityAction"];
        ID_CONTEXTMENU_CANCEL_SCHEDULED_VM_UPGRADE = [ID_CONTEXT_MENU, ".", EXTENSION_PREFIX, EXTENSION_ENTITY_VM, "cancelScheduledUpgradeAction"];
    );

    section_declared(b, "actions", before);
    Ok(())
}
