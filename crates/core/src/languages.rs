//! Starting-language derivation.

use std::collections::BTreeSet;

/// Union of racial and class language grants, deduplicated and sorted.
///
/// Background-implied languages are deliberately excluded; those are
/// chosen by the player later and arrive through a patch.
pub fn starting_languages(racial: &[String], class_granted: &[String]) -> Vec<String> {
    let set: BTreeSet<&str> = racial
        .iter()
        .chain(class_granted.iter())
        .map(String::as_str)
        .filter(|name| !name.trim().is_empty())
        .collect();

    set.into_iter().map(str::to_owned).collect()
}
