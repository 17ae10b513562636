//! Deriving new sequences: map + collect, cross products, threshold
//! filters, and matrix transposes.

use itertools::iproduct;

/// Columns of a rectangular matrix become rows.
pub fn transpose(matrix: &[Vec<i32>]) -> Vec<Vec<i32>> {
    let width = matrix.first().map_or(0, |row| row.len());
    (0..width)
        .map(|col| matrix.iter().map(|row| row[col]).collect())
        .collect()
}

/// Elements at or above `threshold`, relative order preserved.
pub fn at_least(values: &[i32], threshold: i32) -> Vec<i32> {
    values.iter().copied().filter(|&v| v >= threshold).collect()
}

pub fn demo_map_collect() {
    let squares: Vec<i32> = (0..6).map(|n| n * n).collect();
    let pairs: Vec<(i32, i32)> = iproduct!(0..2, 0..2).collect();
    println!("Squares: {:?}", squares);
    println!("Pairs:   {:?}", pairs);
}

pub fn demo_filter() {
    let ages = vec![12, 19, 25, 16, 30];
    let adults = at_least(&ages, 18);
    println!("All ages: {:?}", ages);
    println!("Adults:   {:?}", adults);
}

pub fn demo_matrix_transpose() {
    let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let transposed = transpose(&matrix);
    println!("Matrix:     {:#?}", matrix);
    println!("Transposed: {:#?}", transposed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_over_a_range() {
        let squares: Vec<i32> = (0..6).map(|n| n * n).collect();
        assert_eq!(squares, vec![0, 1, 4, 9, 16, 25]);
    }

    #[test]
    fn cross_product_covers_both_ranges_in_order() {
        let pairs: Vec<(i32, i32)> = iproduct!(0..2, 0..2).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn filter_keeps_order_and_source() {
        let ages = vec![12, 19, 25, 16, 30];
        assert_eq!(at_least(&ages, 18), vec![19, 25, 30]);
        assert_eq!(ages, vec![12, 19, 25, 16, 30]);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            transpose(&matrix),
            vec![vec![1, 4], vec![2, 5], vec![3, 6]]
        );
    }

    #[test]
    fn transpose_of_empty_matrix_is_empty() {
        assert!(transpose(&[]).is_empty());
    }
}
