//! Building vectors from literals, ranges, and nothing at all.

/// A vector holds one element type; a small enum is how a mixed-type
/// sequence is expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(&'static str),
    Flag(bool),
}

pub fn demo_create_literal() {
    let cities = vec!["Beijing", "Shanghai", "Shenzhen"];
    let mixed = vec![
        Value::Int(42),
        Value::Float(3.14),
        Value::Text("Rust"),
        Value::Flag(true),
    ];
    println!("Literal: {:?}", cities);
    println!("Mixed:   {:?}", mixed);
}

pub fn demo_create_collected() {
    let numbers: Vec<i32> = (0..5).collect();
    let empty: Vec<i32> = Vec::new();
    println!("Collected 0..5: {:?}", numbers);
    println!("Empty:          {:?}", empty);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_range_preserves_order() {
        let numbers: Vec<i32> = (0..5).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn mixed_sequence_keeps_construction_order() {
        let mixed = vec![Value::Int(1), Value::Flag(false)];
        assert_eq!(mixed[0], Value::Int(1));
        assert_eq!(mixed.last(), Some(&Value::Flag(false)));
    }
}
