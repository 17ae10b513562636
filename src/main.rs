use vec_tour::run_examples;

fn main() {
    run_examples();
}
