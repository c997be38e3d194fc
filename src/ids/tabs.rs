//! Main tab navigation, portlets, tasks and the properties view.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    declare_entries!(b;
        ID_TAB_NAVIGATOR = "tabNavigator";
        ID_MAIN_TAB_BAR = [ID_TAB_NAVIGATOR, "/tabBar"];
    );

    // Per-tab containers, addressed by the tab caption exported by the
    // companion registry so a caption change only touches one place.
    declare_entries!(b;
        ID_SUMMARY_MAIN_TAB_CONTAINER = [ID_TAB_NAVIGATOR, "/", AUTOMATIONNAME, EQUALS_SIGN, SUMMARY_TAB];
        ID_MONITOR_MAIN_TAB_CONTAINER = [ID_TAB_NAVIGATOR, "/", AUTOMATIONNAME, EQUALS_SIGN, MONITOR_TAB];
        ID_MANAGE_MAIN_TAB_CONTAINER = [ID_TAB_NAVIGATOR, "/", AUTOMATIONNAME, EQUALS_SIGN, MANAGE_TAB];
        ID_RELATED_ITEMS_MAIN_TAB_CONTAINER = [ID_TAB_NAVIGATOR, "/", AUTOMATIONNAME, EQUALS_SIGN, RELATED_ITEMS_TAB];
    );

    // Properties view on the Manage tab.
    declare_entries!(b;
        ID_PROPERTIES_VIEW_TAB = "propertiesViewTab";
        ID_DEFAULT_PROPERTY_VIEW = "defaultPropertyView";
        ID_PROPERTY_VIEW_HEADING = "PropertyViewHeading";
        ID_PROPERTY_VIEW_VALUE = "PropertyViewPropValue";
        ID_PROPERTY_VIEW_MULTI_VALUE = "PropertyViewPropMultiValue";
    );

    // Recent tasks sidebar portlet and the Tasks view.
    declare_entries!(b;
        ID_RECENT_TASKS_PORTLET = "recentTasksGridView";
        ID_RECENT_TASKS_ICON_ON_SIDE_BAR = "recentTasksIcon";
        ID_TASKS_LIST = "tasksList";
        ID_TASKS_GRID = [ID_TASKS_LIST, "/tasksGrid"];
    );

    // Plugin manager actions.
    declare_entries!(b;
        ID_PLUGIN_ENABLE = "enablePluginButton";
        ID_PLUGIN_DISABLE = "disablePluginButton";
    );

    section_declared(b, "tabs", before);
    Ok(())
}
