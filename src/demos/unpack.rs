//! Destructuring a vector with slice patterns.

/// First element, the middle run (possibly empty), and the last element.
/// Needs at least two elements to have distinct ends.
pub fn split_ends(values: &[i32]) -> Option<(i32, &[i32], i32)> {
    match values {
        [first, middle @ .., last] => Some((*first, middle, *last)),
        _ => None,
    }
}

pub fn demo_unpacking() {
    let values = vec![100, 200, 300];

    if let Some((first, middle, last)) = split_ends(&values) {
        println!("First: {}  Middle: {:?}  Last: {}", first, middle, last);
    }

    if let [a, b, c] = values.as_slice() {
        println!("Three bindings: {} {} {}", a, b, c);
    }
}
