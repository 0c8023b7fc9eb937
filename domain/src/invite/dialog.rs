//! Invite dialog state.
//!
//! The dialog admits at most one outstanding submit. Closing it abandons
//! that submit without cancelling the request; each open/close bumps a
//! generation counter, and a result carrying an older generation is
//! discarded when it finally arrives.

use super::display_name::validate_display_name;
use super::links::InviteLinks;

/// Proof that a submit was started; hand it back to
/// [`InviteDialog::finish_submit`] with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct InviteDialog {
    open: bool,
    generation: u64,
    in_flight: bool,
    name: String,
    name_invalid: bool,
    links: Option<InviteLinks>,
    error: Option<String>,
}

impl InviteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the current name failed validation (or the last submit failed).
    pub fn has_input_error(&self) -> bool {
        self.name_invalid
    }

    /// Links to show, once a submit has completed.
    pub fn links(&self) -> Option<&InviteLinks> {
        self.links.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.generation += 1;
    }

    /// Close the dialog, abandoning any outstanding submit.
    pub fn close(&mut self) {
        self.open = false;
        self.generation += 1;
        self.in_flight = false;
        self.links = None;
        self.error = None;
        self.name_invalid = false;
    }

    /// Edit the display name. Any previously generated links are cleared.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.links = None;
        self.error = None;
        self.name_invalid = !validate_display_name(&self.name);
    }

    /// Whether the generate trigger is enabled.
    pub fn can_submit(&self) -> bool {
        self.open && !self.in_flight
    }

    /// Start a submit. Returns `None` while another submit is outstanding or
    /// the dialog is closed.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        Some(SubmitTicket {
            generation: self.generation,
        })
    }

    /// Record a submit result. Returns `false` (and changes nothing) when the
    /// ticket is stale because the dialog was closed in the meantime.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        links: Option<InviteLinks>,
        error: Option<String>,
    ) -> bool {
        if ticket.generation != self.generation || !self.open {
            return false;
        }
        self.in_flight = false;
        self.name_invalid = error.is_some();
        self.links = links;
        self.error = error;
        true
    }
}
