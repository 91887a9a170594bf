//! Keep only the questions whose `id` appears in an allow-list file.
//!
//! With no arguments the tool reads `../result.json` and
//! `../final_unique_question_ids.txt` and writes `../questions1.json`, all
//! relative to the current directory.

use clap::{value_parser, Arg, Command};
use question_assets::filter::{
    self, FilterPaths, DEFAULT_FILTERED_OUTPUT, DEFAULT_QUESTIONS_INPUT, DEFAULT_UNIQUE_IDS,
};
use question_assets::logging;
use std::path::PathBuf;
use std::process;
use tracing::error;

fn cli() -> Command {
    Command::new("filter-questions")
        .about("Filter a question JSON array down to an allow-list of IDs")
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("JSON_FILE")
                .help("Question array to filter")
                .default_value(DEFAULT_QUESTIONS_INPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("ids")
                .long("ids")
                .value_name("TXT_FILE")
                .help("Allow-list, one question ID per line")
                .default_value(DEFAULT_UNIQUE_IDS)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("JSON_FILE")
                .help("Where to write the kept questions")
                .default_value(DEFAULT_FILTERED_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
}

fn main() {
    logging::init();

    let matches = cli().get_matches();
    let defaults = FilterPaths::default();
    let paths = FilterPaths {
        input: matches.get_one::<PathBuf>("input").cloned().unwrap_or(defaults.input),
        ids: matches.get_one::<PathBuf>("ids").cloned().unwrap_or(defaults.ids),
        output: matches.get_one::<PathBuf>("output").cloned().unwrap_or(defaults.output),
    };

    if let Err(e) = filter::run(&paths) {
        error!("{e}");
        process::exit(1);
    }
}
