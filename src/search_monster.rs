//! Searches monsters by a part of their English or German name.

#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

use {
    std::{
        env,
        io
    },
    env_logger::Env,
    log::info,
    monster_search::{
        Error,
        cli::{
            self,
            Args,
            Parsed
        },
        source::Config
    }
};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = env::args().skip(1).collect::<Vec<_>>();
    println!("[DEBUG] args: {:?}", args);
    let args = match Args::parse_from(args) {
        Parsed::Help => {
            println!("{}", cli::HELP);
            return Ok(())
        }
        Parsed::Run(args) => args
    };
    let config = Config::from_env()?;
    info!("searching monsters from {}", config.describe_location());
    let source = config.into_source()?;
    let stdout = io::stdout();
    cli::run(&source, &args, stdout.lock())?;
    println!("Completed");
    Ok(())
}
