//! Sorting in place and deriving sorted copies.

/// Descending copy; the input stays untouched.
pub fn sorted_desc(data: &[i32]) -> Vec<i32> {
    let mut out = data.to_vec();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}

pub fn demo_sort_reverse() {
    let mut scores = vec![88, 75, 90, 100];
    scores.sort();
    println!("Ascending:  {:?}", scores);

    let descending = sorted_desc(&scores);
    println!("Descending: {:?}", descending);

    scores.reverse();
    println!("Reversed:   {:?}", scores);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_then_independent_desc_then_reverse() {
        let mut scores = vec![88, 75, 90, 100];
        scores.sort();
        assert_eq!(scores, vec![75, 88, 90, 100]);

        let descending = sorted_desc(&scores);
        assert_eq!(descending, vec![100, 90, 88, 75]);
        // deriving the descending copy must not disturb the source
        assert_eq!(scores, vec![75, 88, 90, 100]);

        scores.reverse();
        assert_eq!(scores, vec![100, 90, 88, 75]);
    }
}
