//! Modal dialogs and their stock buttons and labels.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    declare_entries!(b;
        ID_CONFIRMATION_DIALOG = "confirmationDialog";
        ID_YES_NO_DIALOG = "YesNoDialog";
        ID_ERROR_DIALOG = "errorDialog";
        ID_WARNING_DIALOG = "warningDialog";
        ID_TIWO_DIALOG = "tiwoDialog";
    );

    // Stock buttons. ID_OK and ID_ERROR_WARNING_OK both resolve to the same
    // element id: the error and warning dialogs reuse the plain OK button.
    declare_entries!(b;
        ID_OK = "okButton";
        ID_ERROR_WARNING_OK = "okButton";
        ID_CANCEL = "cancelButton";
        ID_YES_BUTTON = "yesButton";
        ID_NO_BUTTON = "noButton";
        ID_CLOSE_BUTTON = "closeButton";
    );

    // Confirmation dialog answer labels, addressed by automation name.
    declare_entries!(b;
        ID_CONFIRM_YES_LABEL = [AUTOMATIONNAME, "=Yes"];
        ID_CONFIRM_NO_LABEL = [AUTOMATIONNAME, "=No"];
    );

    // Wizard chrome shared by every multi-page dialog.
    declare_entries!(b;
        ID_WIZARD_PAGE_NAVIGATOR = "wizardPageNavigator";
        ID_WIZARD_NEXT_BUTTON = "next";
        ID_WIZARD_BACK_BUTTON = "back";
        ID_WIZARD_FINISH_BUTTON = "finish";
        ID_WIZARD_CANCEL_BUTTON = "cancel";
    );

    // Wizard page titles spliced from the companion label registry.
    declare_entries!(b;
        ID_WIZARD_PAGE_DETERMINE_NICS = [AUTOMATIONNAME, EQUALS_SIGN, DETERMINE_NICS_TO_USE_LABEL];
        ID_WIZARD_PAGE_SELECT_HOSTS = [AUTOMATIONNAME, EQUALS_SIGN, SELECT_HOSTS_LABEL];
        ID_WIZARD_PAGE_READY_TO_COMPLETE = [AUTOMATIONNAME, EQUALS_SIGN, READY_TO_COMPLETE_LABEL];
    );

    // EVC mode radio buttons in cluster settings.
    declare_entries!(b;
        ID_CLUSTER_SETTINGS_EVC_EDIT_DISABLE_EVC_RADIO = "evcDisabledRadioButton";
        ID_CLUSTER_SETTINGS_EVC_EDIT_AMD_RADIO = "evcAmdRadioButton";
        ID_CLUSTER_SETTINGS_EVC_EDIT_INTEL_RADIO = "evcIntelRadioButton";
    );

    // Distributed switch upgrade wizard version radios, labelled with the
    // versioned captions from the companion registry.
    declare_entries!(b;
        ID_UPGRADE_VDS_VERSION_50_RADIO = [AUTOMATIONNAME, EQUALS_SIGN, UPGRADE_VDS_VERSION_50];
        ID_UPGRADE_VDS_VERSION_51_RADIO = [AUTOMATIONNAME, EQUALS_SIGN, UPGRADE_VDS_VERSION_51];
        ID_UPGRADE_VDS_VERSION_55_RADIO = [AUTOMATIONNAME, EQUALS_SIGN, UPGRADE_VDS_VERSION_55];
    );

    section_declared(b, "dialogs", before);
    Ok(())
}
