//! Sequences of powers.

use std::iter::FusedIterator;

/// Iterator over `1, base, base², ...`.
///
/// Ends just before the first power that would overflow `u64`. Bases 0 and
/// 1 never overflow, so their sequences are infinite.
#[derive(Clone, Debug)]
pub struct Powers {
    base: u64,
    next: Option<u64>,
}

impl Iterator for Powers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_mul(self.base);
        Some(current)
    }
}

impl FusedIterator for Powers {}

/// Returns the powers of `base`, starting from `base⁰ = 1`.
#[must_use]
pub fn powers_of(base: u64) -> Powers {
    Powers {
        base,
        next: Some(1),
    }
}

/// Returns the strictly increasing powers of `base` that do not exceed
/// `limit`.
///
/// For bases 0 and 1 the only such power is 1.
pub fn powers_up_to(base: u64, limit: u64) -> impl Iterator<Item = u64> {
    let distinct = if base < 2 { 1 } else { usize::MAX };
    powers_of(base)
        .take(distinct)
        .take_while(move |power| *power <= limit)
}

/// Returns `base⁰ + base¹ + ... + base^(count - 1)`.
///
/// Returns `None` if any term or the sum overflows `u64`.
#[must_use]
pub fn sum_of_powers(base: u64, count: usize) -> Option<u64> {
    let mut total: u64 = 0;
    let mut terms = 0;
    for power in powers_of(base).take(count) {
        total = total.checked_add(power)?;
        terms += 1;
    }
    (terms == count).then_some(total)
}
