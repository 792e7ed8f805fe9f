/// Min-max rescale raw scores from one run into [0, 1].
///
/// When every score is identical (including the single-career case) all
/// outputs are 1.0: the careers are fully tied, not unscorable.
pub fn normalize(raw: &[f64]) -> Vec<f64> {
    let Some(&first) = raw.first() else {
        return Vec::new();
    };
    let (min, max) = raw
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max == min {
        return vec![1.0; raw.len()];
    }

    let span = max - min;
    raw.iter().map(|v| (v - min) / span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_unit_range() {
        let normalized = normalize(&[0.2, 0.64, -0.1, 0.5]);
        assert_eq!(normalized[2], 0.0);
        assert_eq!(normalized[1], 1.0);
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_preserves_order() {
        let normalized = normalize(&[3.0, 1.0, 2.0]);
        assert_eq!(normalized, vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_constant_scores_all_one() {
        assert_eq!(normalize(&[0.64, 0.64, 0.64]), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_single_career() {
        assert_eq!(normalize(&[-0.3]), vec![1.0]);
    }

    #[test]
    fn test_empty() {
        assert!(normalize(&[]).is_empty());
    }
}
