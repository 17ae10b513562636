//! Shallow vs deep copies of a vector whose rows are shared mutable
//! sub-sequences. `Vec::clone` on the outer vector clones the `Rc`
//! handles, so both vectors still point at the same rows; `deep_clone`
//! rebuilds every row so nothing is shared.

use std::cell::RefCell;
use std::rc::Rc;

pub type SharedRow = Rc<RefCell<Vec<i32>>>;

pub fn shared_rows(rows: &[Vec<i32>]) -> Vec<SharedRow> {
    rows.iter()
        .map(|row| Rc::new(RefCell::new(row.clone())))
        .collect()
}

/// Clone every row's contents; the result shares nothing with `rows`.
pub fn deep_clone(rows: &[SharedRow]) -> Vec<SharedRow> {
    rows.iter()
        .map(|row| Rc::new(RefCell::new(row.borrow().clone())))
        .collect()
}

fn snapshot(rows: &[SharedRow]) -> Vec<Vec<i32>> {
    rows.iter().map(|row| row.borrow().clone()).collect()
}

pub fn demo_shallow_deep_copy() {
    let original = shared_rows(&[vec![1, 2], vec![3, 4]]);
    let shallow = original.clone();
    let deep = deep_clone(&original);

    original[0].borrow_mut()[0] = 99;

    println!("Original: {:?}", snapshot(&original));
    println!("Shallow:  {:?}", snapshot(&shallow));
    println!("Deep:     {:?}", snapshot(&deep));
}
