// Rust guideline compliant 2026-10-14

//! Caption text for Instagram posts.

/// Closing line pointing readers at the profile link.
pub const CALL_TO_ACTION: &str = "לרכישה / לפרטים — לינק בביוגרפיה 🔗";

/// Caption printed after creating an artwork, for pasting by hand.
#[must_use]
pub fn suggested_caption(title: &str, price: &str, size: &str, medium: &str) -> String {
    let mut lines = vec![title.to_string()];
    if !price.is_empty() {
        lines.push(price.to_string());
    }
    lines.push(format!("{size} | {medium}"));
    lines.push(String::new());
    lines.push(CALL_TO_ACTION.to_string());
    lines.join("\n")
}

/// Caption sent with an announcement.
///
/// Lines are the display title, price, `size | medium`, the call to action
/// and the artwork URL. Empty lines are dropped.
#[must_use]
pub fn announcement_caption(
    title: &str,
    price: &str,
    size: &str,
    medium: &str,
    artwork_url: &str,
) -> String {
    let details = [size, medium]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    [title, price, details.as_str(), CALL_TO_ACTION, artwork_url]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_caption() {
        let caption = suggested_caption("חתול", "₪200", "30×40cm", "צבעי מים");
        assert_eq!(
            caption,
            format!("חתול\n₪200\n30×40cm | צבעי מים\n\n{CALL_TO_ACTION}")
        );
    }

    #[test]
    fn test_announcement_caption_skips_empty_parts() {
        let caption = announcement_caption("sea", "", "", "oil", "https://x/artwork/sea");
        assert_eq!(caption, format!("sea\noil\n{CALL_TO_ACTION}\nhttps://x/artwork/sea"));
    }
}
