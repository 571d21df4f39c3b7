//! Version requirement arbitration.

use std::cmp::Ordering;

/// Pick the newer of two version requirement strings.
///
/// A single leading `^` or `~` is ignored for comparison but preserved in
/// the returned string: the winner keeps its own prefix, prefixes are
/// never normalized or mixed. Comparison is numeric, segment by segment,
/// with missing trailing segments treated as zero (`"1.0"` equals
/// `"1.0.0"`). On an exact tie the first argument wins, which keeps the
/// arbitration commutative whenever the values differ numerically.
pub fn pick_newer_version<'a>(a: &'a str, b: &'a str) -> &'a str {
    match compare_versions(a, b) {
        Ordering::Less => b,
        Ordering::Equal | Ordering::Greater => a,
    }
}

fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_segments = segments(a);
    let b_segments = segments(b);
    let len = a_segments.len().max(b_segments.len());

    for i in 0..len {
        let x = a_segments.get(i).copied().unwrap_or(0);
        let y = b_segments.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    Ordering::Equal
}

fn segments(version: &str) -> Vec<u64> {
    let bare = version
        .strip_prefix('^')
        .or_else(|| version.strip_prefix('~'))
        .unwrap_or(version);

    bare.split('.')
        .map(|segment| segment.parse().unwrap_or(0))
        .collect()
}
