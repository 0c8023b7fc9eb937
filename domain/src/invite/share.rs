//! Share text for the platform share action

use super::record::InviteRecord;
use url::form_urlencoded;

/// WhatsApp deep link prefix; the share text goes in `text`.
const WHATSAPP_SHARE_URL: &str = "https://wa.me/?text=";

/// Text sent to the share target. `total` is the number of questions in the
/// round the score was earned in, e.g.
///
/// ```text
/// I scored *7*/10 in *Globetrotter*! Think you can beat me?
///
/// Play now: https://x.test/invite?username=bob
/// ```
pub fn build_share_text(record: &InviteRecord, total: u32) -> String {
    format!(
        "I scored *{}*/{} in *Globetrotter*! Think you can beat me?\n\nPlay now: {}",
        record.final_score(),
        total,
        record.share_url()
    )
}

/// Deep link that opens WhatsApp with `text` prefilled.
pub fn whatsapp_share_url(text: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{}{}", WHATSAPP_SHARE_URL, encoded)
}
