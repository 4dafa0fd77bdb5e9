//! Tag vocabulary normalization
//!
//! Safety features, pet types, special needs and accommodations all arrive
//! as free-form strings from listing forms ("First Aid Kit",
//! "FIRST_AID_KIT", "first-aid-kit"). Every membership check compares the
//! canonical form produced here.

use std::collections::BTreeSet;

/// Normalize a tag to its canonical `snake_case` form
///
/// # Examples
///
/// ```
/// use pawspace_domain::normalize_tag;
///
/// assert_eq!(normalize_tag("FIRST_AID_KIT"), "first_aid_kit");
/// assert_eq!(normalize_tag("  Emergency equipment "), "emergency_equipment");
/// assert_eq!(normalize_tag("fire-safety"), "fire_safety");
/// ```
pub fn normalize_tag(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut pending_separator = false;

    for ch in tag.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = !out.is_empty();
            continue;
        }
        if pending_separator {
            out.push('_');
            pending_separator = false;
        }
        out.extend(ch.to_lowercase());
    }

    out
}

/// Normalize every tag in a collection, dropping empty entries
pub fn normalize_all<'a, I>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect()
}
