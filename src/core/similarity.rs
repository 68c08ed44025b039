use std::collections::HashSet;

/// Lower-case every label and collapse duplicates
#[inline]
fn normalize(labels: &[String]) -> HashSet<String> {
    labels.iter().map(|label| label.to_lowercase()).collect()
}

/// Jaccard similarity (0-1) of two label sets, ignoring letter casing
///
/// similarity = |A ∩ B| / |A ∪ B|
///
/// Two empty sets score 0, not 1: no data is never a perfect match.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}
