//! Invite subdomain: challenge a friend to beat your score.
//!
//! - [`display_name`]: the `^[A-Za-z0-9_-]{3,20}$` display name rule
//! - [`links`]: share URL and preview-image URL derivation
//! - [`record::InviteRecord`]: the record persisted by `POST /users`
//! - [`share`]: share text and the WhatsApp deep link
//! - [`dialog::InviteDialog`]: single-submit dialog state with stale-result guard
//! - [`invitee`]: records read back for the invite landing page
//! - [`preview::PreviewCard`]: social-preview card parameters

pub mod dialog;
pub mod display_name;
pub mod invitee;
pub mod links;
pub mod preview;
pub mod record;
pub mod share;

/// Score denominator on the invite landing page and preview card. Stored
/// invite records carry no round size, so these assume a ten-question round.
pub const MAX_SCORE: u32 = 10;

pub use dialog::{InviteDialog, SubmitTicket};
pub use display_name::{DisplayName, validate_display_name};
pub use invitee::{Invitee, PageMetadata, PreviewImage};
pub use links::{InviteLinks, parse_origin};
pub use preview::PreviewCard;
pub use record::InviteRecord;
pub use share::{build_share_text, whatsapp_share_url};
