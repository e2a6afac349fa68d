//! Byte budget for the on-chain URL field and the ARC-3 suffix tag.

/// Maximum ASA URL length. Algorand enforces bytes, not characters.
pub const MAX_ASA_URL_BYTES: usize = 96;

/// Fragment marking the URL as ARC-3 metadata.
pub const ARC3_TAG: &str = "#arc3";

const METADATA_SEGMENT: &str = "/metadata.json";

/// UTF-8 encoded length of `s`.
pub fn byte_len(s: &str) -> usize {
    s.len()
}

/// Appends `#arc3` unless already present anywhere in the string.
pub(crate) fn tag(mut url: String) -> String {
    if !url.contains(ARC3_TAG) {
        url.push_str(ARC3_TAG);
    }
    url
}

/// Removes a `/metadata.json` segment sitting at the end of the string or
/// right before a trailing `#arc3`. Returns `None` when there is nothing to strip.
pub(crate) fn strip_metadata_segment(url: &str) -> Option<String> {
    let (body, tail) = match url.strip_suffix(ARC3_TAG) {
        Some(body) => (body, ARC3_TAG),
        None => (url, ""),
    };

    let cut = body.len().checked_sub(METADATA_SEGMENT.len())?;
    if !body.get(cut..)?.eq_ignore_ascii_case(METADATA_SEGMENT) {
        return None;
    }
    Some(format!("{}{}", &body[..cut], tail))
}

/// Applies the single permitted trim when `url` exceeds the budget.
pub(crate) fn fit(url: String) -> String {
    if byte_len(&url) <= MAX_ASA_URL_BYTES {
        return url;
    }
    match strip_metadata_segment(&url) {
        Some(shorter) => {
            tracing::debug!(
                from = byte_len(&url),
                to = byte_len(&shorter),
                "dropped /metadata.json to fit ASA URL budget"
            );
            shorter
        }
        None => url,
    }
}
