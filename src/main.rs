fn main() {
    if let Err(e) = nephrocare_lib::run() {
        eprintln!("nephrocare: {e}");
        std::process::exit(1);
    }
}
