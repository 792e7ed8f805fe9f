use super::engine::ScoreRecord;

/// Final scores closer than this are treated as tied.
pub const TIE_EPSILON: f64 = 1e-9;

/// Sort records by final score descending and assign 1-based ranks.
///
/// Runs of scores that differ by less than [`TIE_EPSILON`] from their
/// neighbour are ordered by career name ascending, so identical input always
/// produces the same order.
pub fn rank(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| {
        b.final_score
            .total_cmp(&a.final_score)
            .then_with(|| a.career_name.cmp(&b.career_name))
    });

    let mut start = 0;
    while start < records.len() {
        let mut end = start + 1;
        while end < records.len()
            && records[end - 1].final_score - records[end].final_score < TIE_EPSILON
        {
            end += 1;
        }
        records[start..end].sort_by(|a, b| a.career_name.cmp(&b.career_name));
        start = end;
    }

    for (i, record) in records.iter_mut().enumerate() {
        record.rank = i + 1;
    }
    records
}

/// Clamp a requested top-K into `[1, career_count]`.
pub fn clamp_top_k(requested: i64, career_count: usize) -> usize {
    if career_count == 0 {
        return 0;
    }
    let max = i64::try_from(career_count).unwrap_or(i64::MAX);
    let clamped = requested.clamp(1, max);
    if clamped != requested {
        tracing::debug!(requested, clamped, "top_k clamped to career count");
    }
    usize::try_from(clamped).unwrap_or(career_count)
}
