//! Indexing and slicing: borrowed or derived views that never touch the
//! source vector.

/// Every `step`-th element, starting from the first.
pub fn strided(data: &[i32], step: usize) -> Vec<i32> {
    data.iter().copied().step_by(step).collect()
}

/// The sequence back to front, as a new vector.
pub fn reversed(data: &[i32]) -> Vec<i32> {
    data.iter().rev().copied().collect()
}

pub fn demo_index_access() {
    let colors = vec!["red", "green", "blue", "yellow"];
    let first = colors[0];
    let last = colors[colors.len() - 1];
    println!("First: {}  Last: {} (via last(): {:?})", first, last, colors.last());
}

pub fn demo_slice_access() {
    let data = vec![0, 1, 2, 3, 4, 5];
    let left = &data[..3];
    let step = strided(&data, 2);
    let reverse = reversed(&data);
    println!("Leading 3: {:?}", left);
    println!("Every 2nd: {:?}", step);
    println!("Reversed:  {:?}", reverse);
    println!("Source:    {:?}", data);
}
