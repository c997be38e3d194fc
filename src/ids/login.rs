//! Login screen and application chrome.

use crate::error::RegistryError;
use crate::registry::{declare_entries, section_declared, RegistryBuilder};

pub(super) fn declare(b: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let before = b.len();

    declare_entries!(b;
        ID_LOGIN_BUTTON = "loginButton";
        ID_LOGIN_USERNAME_INPUT = "usernameInput";
        ID_LOGIN_PASSWORD_INPUT = "passwordInput";
        ID_LOGIN_WINDOWS_SESSION_CHECKBOX = "sspiCheckbox";
        ID_LOGIN_ERROR_LABEL = "errorLabel";
    );

    declare_entries!(b;
        ID_USER_MENU = "userMenu";
        LABEL_APP_LOGOUT = [ID_USER_MENU, "/", AUTOMATIONNAME, "=Logout"];
        ID_APP_REFRESH_BUTTON = "appRefreshButton";
        LOADING_PROGRESS_BAR = "loadingProgressBar";
    );

    section_declared(b, "login", before);
    Ok(())
}
