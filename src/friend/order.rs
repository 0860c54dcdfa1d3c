//! Name ordering for circles.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

thread_local! {
    static COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!(%err, "root collator unavailable, ordering names by code point");
                None
            }
        };
}

/// Compares two names with root-locale collation.
///
/// Uses tertiary strength: accents and scripts sort where a reader
/// expects them, and names that differ only in case put the lowercase
/// spelling first. Names the collator considers equal fall back to code
/// point order so the result is total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use guestlist_core::friend::compare_names;
///
/// assert_eq!(compare_names("bob", "Carl"), Ordering::Less);
/// assert_eq!(compare_names("anna", "Anna"), Ordering::Less);
/// assert_eq!(compare_names("Émile", "Fred"), Ordering::Less);
/// assert_eq!(compare_names("Ёжик", "Жора"), Ordering::Less);
/// assert_eq!(compare_names("Sam", "Sam"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| {
            collator
                .as_ref()
                .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        })
        .then_with(|| a.cmp(b))
}
