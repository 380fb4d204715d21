use crate::{commands::*, utils::*};
use clap::Parser;

mod commands;
mod utils;

fn main() {
    let cmd = SieveCmd::parse();
    if let Err(e) = cmd.run(&mut std::io::stdout().lock()) {
        print_error(e);
        std::process::exit(1);
    }
}
