//! Searching, counting, membership tests, and numeric aggregates.

pub fn demo_search_count() {
    let letters = vec!["a", "b", "a", "c", "a"];
    let first_idx = letters.iter().position(|&l| l == "a");
    let total = letters.iter().filter(|&&l| l == "a").count();
    println!("First 'a' at: {:?}  occurrences: {}", first_idx, total);
}

pub fn demo_membership_aggregate() {
    let nums = vec![3, 7, 2, 9];
    let exists = nums.contains(&7);
    let total: i32 = nums.iter().sum();
    let maximum = nums.iter().max();
    println!("Contains 7: {}  Sum: {}  Max: {:?}", exists, total, maximum);
}
