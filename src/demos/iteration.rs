//! Walking vectors: numbered positions and lockstep pairs.

pub fn demo_enumerate() {
    let animals = vec!["cat", "dog", "bird"];
    for (idx, name) in animals.iter().enumerate() {
        println!("{}: {}", idx + 1, name);
    }
}

pub fn demo_zip() {
    let names = vec!["Alice", "Bob", "Cathy"];
    let scores = vec![95, 88, 91];
    for (name, score) in names.iter().zip(scores.iter()) {
        println!("{} -> {}", name, score);
    }
}
