extern crate cgaview;

use cgaview::viewer::{cli::{self, Cli}, main};
use clap::Parser;

fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(cli::exit_code(&e));
        }
    };

    if let Err(e) = main::run(args) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
