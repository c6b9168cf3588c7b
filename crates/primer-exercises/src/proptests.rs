//! Property-based tests for the exercises.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;

    use crate::lines::meaningful_line_count;
    use crate::phrase::{say_nothing, Phrase};
    use crate::powers::{powers_of, sum_of_powers};
    use crate::search::first_then_lower_case;

    // Lines built from a handful of interesting fragments
    fn line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            Just("\t# comment".to_string()),
            Just("#".to_string()),
            "[a-z ]{1,12}",
        ]
    }

    proptest! {
        #[test]
        fn line_count_matches_filter(lines in prop::collection::vec(line(), 0..32)) {
            let expected = lines
                .iter()
                .map(|l| l.trim_matches(|c: char| c <= ' '))
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .count();
            let text = lines.join("\n");
            prop_assert_eq!(meaningful_line_count(Cursor::new(text)).unwrap(), expected);
        }

        #[test]
        fn phrase_keeps_every_word(words in prop::collection::vec("[a-z]{0,5}", 0..10)) {
            let phrase = words.iter().fold(say_nothing(), |p: Phrase, w| p.and(w.as_str()));
            prop_assert_eq!(phrase.words(), words.as_slice());
            prop_assert_eq!(phrase.phrase(), words.join(" "));
        }

        #[test]
        fn lower_case_result_is_lowercase(words in prop::collection::vec("[a-zA-Z]{1,6}", 0..10)) {
            let found = first_then_lower_case(&words, |w| w.len() > 2);
            let expected = words.iter().find(|w| w.len() > 2).map(|w| w.to_lowercase());
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn geometric_sum_formula(base in 2u64..20, count in 0usize..12) {
            let exponent = u32::try_from(count).unwrap();
            let expected = (base.pow(exponent) - 1) / (base - 1);
            prop_assert_eq!(sum_of_powers(base, count), Some(expected));
        }

        #[test]
        fn consecutive_powers_differ_by_base(base in 2u64..1000) {
            let powers: Vec<u64> = powers_of(base).collect();
            for pair in powers.windows(2) {
                prop_assert_eq!(pair[1], pair[0] * base);
            }
            let last = *powers.last().unwrap();
            prop_assert!(last.checked_mul(base).is_none());
        }
    }
}
