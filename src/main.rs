use std::io;

use clap::Parser;

use roman_calculator::config::Config;
use roman_calculator::{logger, run};

fn main() {
    let config = Config::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!(?config, "параметры запуска");

    match run(io::stdin().lock(), io::stdout().lock(), &config) {
        Ok(end) => tracing::info!(?end, "сеанс завершён"),
        Err(e) => {
            eprintln!("Ошибка ввода-вывода: {e}");
            std::process::exit(1);
        }
    }
}
