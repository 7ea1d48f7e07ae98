//! Well-formedness check for BCP-47 language tags.
//!
//! Follows the `langtag` / `privateuse` productions of RFC 5646. Only
//! syntax is checked; subtags are not looked up in the IANA registry.

use regex::Regex;
use std::sync::LazyLock;

static LANGTAG: LazyLock<Regex> = LazyLock::new(|| {
    let language = r"(?:[A-Za-z]{2,3}(?:-[A-Za-z]{3}){0,3}|[A-Za-z]{4,8})";
    let script = r"(?:-[A-Za-z]{4})?";
    let region = r"(?:-(?:[A-Za-z]{2}|[0-9]{3}))?";
    let variant = r"(?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*";
    let extension = r"(?:-[0-9A-WY-Za-wy-z](?:-[A-Za-z0-9]{2,8})+)*";
    let privateuse = r"(?:-[Xx](?:-[A-Za-z0-9]{1,8})+)?";
    let pattern = format!(
        r"^(?:{language}{script}{region}{variant}{extension}{privateuse}|[Xx](?:-[A-Za-z0-9]{{1,8}})+)$"
    );
    Regex::new(&pattern).expect("language tag pattern is valid")
});

/// Check whether `tag` is a well-formed BCP-47 language tag.
pub fn is_well_formed(tag: &str) -> bool {
    LANGTAG.is_match(tag)
}
