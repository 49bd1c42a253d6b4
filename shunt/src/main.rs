use std::process::ExitCode;

use shunt_driver::{Argument, Parser};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argument = Argument::parse();
    shunt_driver::run(&argument)
}
