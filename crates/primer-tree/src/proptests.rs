//! Property-based tests for the persistent tree.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::{SearchTree, StringTree};

    // Short keys over a tiny alphabet, so duplicates are common
    fn key() -> impl Strategy<Value = String> {
        "[a-e]{0,3}"
    }

    fn keys() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(key(), 0..64)
    }

    /// Checks the ordering invariant, returning the values in order.
    fn check_ordered<'a>(
        tree: &'a StringTree,
        low: Option<&str>,
        high: Option<&str>,
        out: &mut Vec<&'a str>,
    ) -> bool {
        match tree {
            SearchTree::Empty => true,
            SearchTree::Node(branch) => {
                let value = branch.value().as_str();
                if low.is_some_and(|low| value <= low) || high.is_some_and(|high| value >= high) {
                    return false;
                }
                check_ordered(branch.left(), low, Some(value), out) && {
                    out.push(value);
                    check_ordered(branch.right(), Some(value), high, out)
                }
            }
        }
    }

    proptest! {
        #[test]
        fn size_counts_distinct_keys(keys in keys()) {
            let tree: StringTree = keys.iter().cloned().collect();
            let distinct: BTreeSet<&String> = keys.iter().collect();
            prop_assert_eq!(tree.size(), distinct.len());
        }

        #[test]
        fn ordering_invariant_holds(keys in keys()) {
            let tree: StringTree = keys.iter().cloned().collect();
            let mut seen = Vec::new();
            prop_assert!(check_ordered(&tree, None, None, &mut seen));
            let expected: Vec<&str> = keys
                .iter()
                .map(String::as_str)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn iteration_is_sorted_and_distinct(keys in keys()) {
            let tree: StringTree = keys.iter().cloned().collect();
            let expected: Vec<String> = keys.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
            let actual: Vec<String> = tree.iter().cloned().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn insert_leaves_original_untouched(keys in keys(), x in key()) {
            let tree: StringTree = keys.iter().cloned().collect();
            let had_x = tree.contains(x.as_str());
            let rendered = tree.to_string();
            let size = tree.size();

            let updated = tree.insert(x.clone());

            prop_assert!(updated.contains(x.as_str()));
            prop_assert_eq!(tree.contains(x.as_str()), had_x);
            prop_assert_eq!(tree.to_string(), rendered);
            prop_assert_eq!(tree.size(), size);
            prop_assert_eq!(updated.size(), size + usize::from(!had_x));
        }

        #[test]
        fn insert_is_idempotent(keys in keys(), x in key()) {
            let tree: StringTree = keys.iter().cloned().collect();
            let once = tree.insert(x.clone());
            let twice = once.insert(x);
            prop_assert_eq!(once.size(), twice.size());
            prop_assert_eq!(once.to_string(), twice.to_string());
            prop_assert!(once.ptr_eq(&twice));
        }

        #[test]
        fn contains_matches_membership(keys in keys(), probe in key()) {
            let tree: StringTree = keys.iter().cloned().collect();
            prop_assert_eq!(tree.contains(probe.as_str()), keys.contains(&probe));
        }
    }
}
