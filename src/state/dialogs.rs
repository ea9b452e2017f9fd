//! Open/error flags for the login, register, and write-greeting dialogs.
//!
//! Every failed submit leaves its dialog open with the generic `.error` text
//! revealed; a successful submit hides the error and closes the dialog.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

/// Visibility of one modal dialog and its error text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogStatus {
    pub open: bool,
    pub error: bool,
}

impl DialogStatus {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Submit was rejected: keep the dialog open and reveal the error.
    pub fn fail(&mut self) {
        self.open = true;
        self.error = true;
    }

    /// Submit went through: hide the error and close.
    pub fn succeed(&mut self) {
        self.open = false;
        self.error = false;
    }

    /// Dismissed by the user; a previous error stays recorded for next open.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// All dialogs on the greetings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    pub login: DialogStatus,
    pub register: DialogStatus,
    pub greeting: DialogStatus,
}
