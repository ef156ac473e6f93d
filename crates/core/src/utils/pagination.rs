//! Limit/offset handling shared by every list operation.

/// Maps caller-facing `limit`/`offset` to storage bounds.
///
/// Non-positive values mean "unbounded" and "no skip" respectively.
pub fn page_bounds(limit: i64, offset: i64) -> (Option<i64>, Option<i64>) {
    let limit = (limit > 0).then_some(limit);
    let offset = (offset > 0).then_some(offset);
    (limit, offset)
}
