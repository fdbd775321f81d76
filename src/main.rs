fn main() {
  if let Err(e) = fitness_assistant_lib::run() {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}
