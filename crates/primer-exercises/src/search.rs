//! Predicate search over a sequence.

/// Applies `f` to the first item satisfying `predicate`.
///
/// Returns `None` when no item matches; `f` is called at most once.
pub fn first_then_apply<I, P, F, U>(items: I, mut predicate: P, f: F) -> Option<U>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnOnce(I::Item) -> U,
{
    items.into_iter().find(|item| predicate(item)).map(f)
}

/// Returns the first string satisfying `predicate`, lowercased.
pub fn first_then_lower_case<I, S, P>(items: I, predicate: P) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: FnMut(&S) -> bool,
{
    first_then_apply(items, predicate, |s| s.as_ref().to_lowercase())
}
