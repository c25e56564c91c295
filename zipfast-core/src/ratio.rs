/// Percentage of bytes saved going from `original_size` to `compressed_size`.
///
/// Rounds half up (2.5 -> 3, -2.5 -> -2). Returns 0 when there was nothing to
/// compress. The result is negative when the archive outgrew its inputs.
pub fn compute_ratio(original_size: u64, compressed_size: u64) -> i64 {
    if original_size == 0 {
        return 0;
    }
    let saved = (original_size as i128 - compressed_size as i128) * 100;
    let den = original_size as i128;
    // floor(saved / den + 1/2); can only fall below i64 when the archive dwarfs its input
    i64::try_from((2 * saved + den).div_euclid(2 * den)).unwrap_or(i64::MIN)
}

/// `part / total * budget`, rounded half up. `total == 0` yields 0.
pub(crate) fn scaled_percent(part: usize, total: usize, budget: u8) -> u8 {
    if total == 0 {
        return 0;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    ((2 * part * budget as u64 + total) / (2 * total)) as u8
}
