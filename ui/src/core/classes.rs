//! Conditional class name composition.

/// Join every class whose predicate holds, in order, separated by a single space.
///
/// ```
/// use ui::core::classes::class_names;
/// assert_eq!(class_names([("link", true), ("link--active", false)]), "link");
/// ```
pub fn class_names<'a>(classes: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    classes
        .into_iter()
        .filter(|(name, enabled)| *enabled && !name.trim().is_empty())
        .map(|(name, _)| name.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
