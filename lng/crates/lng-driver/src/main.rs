fn main() {
    if let Err(e) = lng_driver::main() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
