//! Advanced datagrid internals: the All Actions toolbar, filter control,
//! context header (show/hide columns flyout) and scrollers.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    declare_entries!(b;
        ID_CONTEXT_MENU = "afContextMenu";
        ID_ADVANCED_GRID_MENU = "afContextMenu.advancedDataGrid";
        ID_ADVANCE_DATAGRID_ALLACTIONS = "vsphere.opsmgmt.actionfw.allActionsButton";
        ID_MORE_ACTIONS_ICON = "moreActionsIcon";
        ID_BUTTON_DROP_DOWN_ARROW = "openButton";
        ID_REFRESH_BUTTON = "refreshButton";
        ID_SELECT_ALL_BUTTON = "selectAllButton";
    );

    // Toolbar filter and search.
    declare_entries!(b;
        ID_SEARCHCONTROL_FILTERCONTROL = "searchControl/filterControl";
        ID_TOOLBAR_FILTERCONTROL_TEXT_INPUT = [ID_SEARCHCONTROL_FILTERCONTROL, "/textInput"];
        ID_QUICK_SEARCH_BOX = "quickSearchBox";
        ID_IMAGE_FIND = "imageFind";
    );

    // Context header: the column chooser flyout on the grid's right edge.
    declare_entries!(b;
        ID_CONTEXT_HEADER = "contextHeader";
        ID_CONTEXT_HEADER_LIST = [ID_CONTEXT_HEADER, "/list"];
        ID_CONTEXT_HEADER_ALL_COLUMN_NAMES_PROPERTY = "dataProvider.source.name";
        ID_FILTER_CONTEXT_HEADER = [ID_CONTEXT_HEADER, "/filterLinkButton"];
        ID_SHOW_HIDE_COLUMNS_CLOSE_BUTTON = [ID_CONTEXT_HEADER, "/closeButton"];
        ID_DATAGRID_CONTEXT_HEADER_SCROLLER = [ID_CONTEXT_HEADER, "/scroller"];
        ID_DATAGRID_CONTEXT_HEADER_SCROLLER_DOWN_BUTTON = [ID_DATAGRID_CONTEXT_HEADER_SCROLLER, "/downButton"];
        ID_DATAGRID_CONTEXT_HEADER_SCROLL_POSITION = "verticalScrollPosition";
    );

    // Horizontal scroller at the bottom of wide grids.
    declare_entries!(b;
        ID_GRID_HORIZONTAL_SCROLL = "horizontalScrollBar";
        ID_GRID_HORIZONTAL_SCROLL_LEFT_BUTTON = [ID_GRID_HORIZONTAL_SCROLL, "/leftArrowSkin"];
        ID_GRID_HORIZONTAL_SCROLL_RIGHT_BUTTON = [ID_GRID_HORIZONTAL_SCROLL, "/rightArrowSkin"];
    );

    section_declared(b, "datagrid", before);
    Ok(())
}
