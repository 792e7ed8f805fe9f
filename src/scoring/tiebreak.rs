use crate::survey::{PreferenceKey, Preferences};

/// Scale applied to the mean preference similarity.
///
/// Normalized scores span 0..1, so a boost of at most 0.1 can only reorder
/// careers whose normalized scores are already within 0.1 of each other.
pub const TIE_BREAK_WEIGHT: f64 = 0.1;

/// Alignment boost between what the user values and what a career offers.
///
/// Each preference key contributes `1 - |user - career|`; the mean of the four
/// is scaled by [`TIE_BREAK_WEIGHT`]. Result is in `[0, TIE_BREAK_WEIGHT]`.
pub fn preference_boost(user: &Preferences, career: &Preferences) -> f64 {
    let similarity: f64 = PreferenceKey::ALL
        .iter()
        .map(|&key| 1.0 - (user.get(key) - career.get(key)).abs())
        .sum();
    TIE_BREAK_WEIGHT * similarity / PreferenceKey::ALL.len() as f64
}
