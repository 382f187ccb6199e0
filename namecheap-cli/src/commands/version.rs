//! `version`: print the program version.

pub fn run() {
    println!("{}", version_line());
}

fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
