//! Entry point for the `coverplan` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    if let Err(err) = coverplan_cli::run() {
        eprintln!("coverplan: {err}");
        std::process::exit(1);
    }
}
