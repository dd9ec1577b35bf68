//! Eligibility arithmetic for the non-repeating draw.
//!
//! The eligible set of a list is its current items minus the values already
//! recorded under the active cycle. Comparison is by value: two items with
//! identical text are indistinguishable, so selecting one marks both.

use std::collections::HashSet;

/// Items of `items` whose value is absent from `selected`, in list order.
///
/// Duplicated values are kept as separate entries while still eligible.
///
/// # Examples
/// ```
/// use recitation_backend::domain::eligibility::eligible_items;
///
/// let items = vec!["x".to_owned(), "y".to_owned(), "x".to_owned()];
/// let eligible = eligible_items(&items, &["y".to_owned()]);
/// assert_eq!(eligible, vec!["x".to_owned(), "x".to_owned()]);
///
/// let eligible = eligible_items(&items, &["x".to_owned()]);
/// assert_eq!(eligible, vec!["y".to_owned()]);
/// ```
pub fn eligible_items(items: &[String], selected: &[String]) -> Vec<String> {
    let selected: HashSet<&str> = selected.iter().map(String::as_str).collect();
    items
        .iter()
        .filter(|item| !selected.contains(item.as_str()))
        .cloned()
        .collect()
}

/// Whether any eligible set is empty, which exhausts the whole cycle.
pub fn any_exhausted<'a>(eligible_sets: impl IntoIterator<Item = &'a [String]>) -> bool {
    eligible_sets.into_iter().any(<[String]>::is_empty)
}
