//! Quality weights for `Accept` entries.
//!
//! Weights are integers in `1..=1000` standing for the quality values
//! `0.001..=1` of RFC 9110. Working on integers keeps every emitted quality value
//! exact, with at most three decimal digits.

use std::fmt;

/// Returns the weight following `current_weight` in the decay sequence.
///
/// With `many_headers` the sequence is linear: `1000, 999, 998, ...`. Otherwise
/// it decays one decade at a time: `1000, 900, ..., 100, 90, ..., 10, 9, ..., 1`,
/// which takes 27 steps from `1000` to `1`. Weights at or below `1` stay at `1`.
///
/// ```
/// use header_selector::next_weight;
///
/// assert_eq!(next_weight(1000, false), 900);
/// assert_eq!(next_weight(100, false), 90);
/// assert_eq!(next_weight(1000, true), 999);
/// assert_eq!(next_weight(-1, false), 1);
/// ```
#[must_use]
pub fn next_weight(current_weight: i32, many_headers: bool) -> i32 {
    if current_weight <= 1 {
        return 1;
    }

    if many_headers {
        return current_weight - 1;
    }

    // the step is taken from the decade below the current weight, so 1000 steps by 100 and 100 by 10
    let step = 10_i32.pow((current_weight - 1).ilog10());
    (current_weight - step).max(1)
}

/// A quality weight in `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    /// Full preference, rendered without a quality parameter.
    pub const MAX: Weight = Weight(1000);
    /// The lowest weight that still means "acceptable".
    pub const MIN: Weight = Weight(1);

    /// Creates a weight, clamping `value` into `1..=1000`.
    #[must_use]
    pub fn new(value: i32) -> Self {
        u16::try_from(value.clamp(1, 1000)).map_or(Self::MAX, Self)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 >= Self::MAX.0
    }

    /// The next weight of the decay sequence, see [`next_weight`].
    #[must_use]
    pub fn next(self, many_headers: bool) -> Self {
        Self::new(next_weight(i32::from(self.0), many_headers))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::MAX
    }
}

/// Renders the weight as a quality value with the fewest digits needed,
/// e.g. `1`, `0.9`, `0.85` or `0.005`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_max() {
            return f.write_str("1");
        }

        let thousandths = format!("{:03}", self.0);
        write!(f, "0.{}", thousandths.trim_end_matches('0'))
    }
}

/// Infinite iterator over the weights handed out to ranked candidates.
///
/// Starts at [`Weight::MAX`] and follows [`next_weight`], staying at
/// [`Weight::MIN`] once reached. Zip it with the candidates to bound it.
#[derive(Debug, Clone)]
pub struct WeightSequence {
    next: Weight,
    many_headers: bool,
}

impl WeightSequence {
    #[must_use]
    pub fn new(many_headers: bool) -> Self {
        Self { next: Weight::MAX, many_headers }
    }
}

impl Iterator for WeightSequence {
    type Item = Weight;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next;
        self.next = current.next(self.many_headers);
        Some(current)
    }
}
