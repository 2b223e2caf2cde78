/// Label shown for the best-ranked score
pub const TOP_RANK_LABEL: &str = "★";
/// Label shown for the worst-ranked score
pub const BOTTOM_RANK_LABEL: &str = "LOW";

/// `rank / total * 100`, rounded to one decimal. 0 when `total` is 0.
pub fn percentile(rank: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (rank as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Percentile as display text, e.g. "66.7%".
///
/// Rank 1 gets three characters of number, every other rank four.
pub fn percentile_label(rank: usize, total: usize) -> String {
    let width = if rank == 1 { 3 } else { 4 };
    let mut text: String = format!("{:.1}", percentile(rank, total))
        .chars()
        .take(width)
        .collect();
    if text.ends_with('.') {
        text.pop();
    }
    format!("{}%", text)
}

/// "★" for first, "LOW" for last, otherwise the percentile label
pub fn rank_label(rank: usize, total: usize) -> String {
    if rank == 1 {
        TOP_RANK_LABEL.to_string()
    } else if rank == total {
        BOTTOM_RANK_LABEL.to_string()
    } else {
        percentile_label(rank, total)
    }
}
