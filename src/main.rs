fn main() {
    if let Err(err) = cpf_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
