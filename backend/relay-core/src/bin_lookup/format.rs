use crate::error::FetchError;

use models::{BinMetadata, CardBatch, NormalizedBin};

use std::fmt::Write;

use log::warn;

pub const NO_CARDS_MESSAGE: &str = "❌ NO CARDS GENERATED.";

/// Render the `/gen` reply as Telegram HTML.
///
/// Card failures replace the whole reply. Metadata failures only blank out the info lines,
/// since the cards are still useful on their own.
pub fn format_response(
    cards: &Result<CardBatch, FetchError>,
    bin: &NormalizedBin,
    metadata: &Result<BinMetadata, FetchError>,
) -> String {
    let batch = match cards {
        Ok(batch) => batch,
        Err(e) => return format!("❌ ERROR: {}", escape_html(&e.description())),
    };

    if batch.is_empty() {
        return NO_CARDS_MESSAGE.to_string();
    }

    let fallback;
    let info = match metadata {
        Ok(info) => info,
        Err(e) => {
            warn!("Rendering cards without BIN details: {e}");
            fallback = BinMetadata::not_found();
            &fallback
        }
    };

    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "𝗕𝗜𝗡 ⇾ <code>{}</code>", escape_html(bin.prefix()));
    let _ = writeln!(text, "𝗔𝗺𝗼𝘂𝗻𝘁 ⇾ <code>{}</code>", batch.len());
    text.push('\n');

    for card in batch.lines() {
        let _ = writeln!(text, "<code>{}</code>", escape_html(&card.to_uppercase()));
    }

    let _ = writeln!(
        text,
        "\n𝗜𝗻𝗳𝗼: {} - {} ({})",
        escape_html(&info.card_type),
        escape_html(&info.network),
        escape_html(&info.tier)
    );
    let _ = writeln!(text, "𝐈𝐬𝐬𝐮𝐞𝐫: {}", escape_html(&info.bank));
    let _ = write!(
        text,
        "𝗖𝗼𝘂𝗻𝘁𝗿𝘆: {} {}",
        escape_html(&info.country),
        info.flag
    );

    text
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
