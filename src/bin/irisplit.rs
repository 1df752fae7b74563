#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use irisplit::{Component, Iri};

fn field(component: Option<Component<'_>>) -> String {
    component.map_or_else(|| String::from("-"), |c| c.to_string_lossy().into_owned())
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(input), None) = (args.next(), args.next()) else {
        eprintln!("Usage: irisplit IDENTIFIER");
        return ExitCode::FAILURE;
    };

    let iri = match Iri::parse(&input) {
        Ok(iri) => iri,
        Err(e) => {
            eprintln!("irisplit: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("  scheme: {}", field(iri.scheme()));
    for (i, token) in iri.schemes().enumerate() {
        println!("{i:>8}: {token}");
    }
    println!("    user: {}", field(iri.user()));
    println!("    auth: {}", field(iri.auth()));
    println!("password: {}", field(iri.password()));
    println!("    host: {}", field(iri.host()));
    println!("    port: {}", iri.port());
    println!("    path: {}", field(iri.path()));
    println!("   query: {}", field(iri.query()));
    println!("  anchor: {}", field(iri.anchor()));
    ExitCode::SUCCESS
}
