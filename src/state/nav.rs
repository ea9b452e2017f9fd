//! Collapsible footer navigation state machine.
//!
//! STATES
//! ======
//! - `Initial`: hovering in from outside the footer opens the menu.
//! - `ClosedByClick`: the user closed the menu with the button; hover no
//!   longer reopens it until the pointer leaves the footer.
//!
//! Open/closed is tracked separately from the phase because a click can
//! reopen the menu while the phase stays `ClosedByClick`.
//!
//! Accepted hovers and clicks set `blocked`; the component clears it on the
//! next scheduler tick so the mouseover that accompanies a click cannot
//! toggle the menu a second time.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPhase {
    #[default]
    Initial,
    ClosedByClick,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    phase: NavPhase,
    open: bool,
    blocked: bool,
}

impl NavMenu {
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Pointer moved over the footer. `from_outside` is true only when it
    /// came from an element outside the footer (not from the footer itself,
    /// nothing, or the document root).
    ///
    /// Returns whether the event was accepted; the caller must schedule
    /// [`NavMenu::release`] when it was.
    pub fn hover_enter(&mut self, from_outside: bool) -> bool {
        if self.blocked || !from_outside {
            return false;
        }
        self.blocked = true;
        if self.phase == NavPhase::Initial && !self.open {
            self.open = true;
        }
        true
    }

    /// Menu button clicked: toggle unconditionally. Closing an open menu
    /// suppresses hover-reopen until the pointer leaves.
    ///
    /// Returns whether the click was accepted; the caller must schedule
    /// [`NavMenu::release`] when it was.
    pub fn click(&mut self) -> bool {
        if self.blocked {
            return false;
        }
        self.blocked = true;
        if self.open {
            self.phase = NavPhase::ClosedByClick;
        }
        self.open = !self.open;
        true
    }

    /// Pointer left the footer: close and forget any click-close.
    pub fn mouse_leave(&mut self) {
        self.phase = NavPhase::Initial;
        self.open = false;
    }

    /// Clear the re-entrancy block.
    pub fn release(&mut self) {
        self.blocked = false;
    }

    /// Height of the nav panel given its content height.
    pub fn panel_height(&self, scroll_height: u32) -> u32 {
        if self.open { scroll_height } else { 0 }
    }

    pub fn hamburger_class(&self) -> &'static str {
        if self.open { "hamburger-icon hamburger-icon-open" } else { "hamburger-icon" }
    }

    pub fn footer_class(&self) -> &'static str {
        if self.open { "open" } else { "" }
    }
}
