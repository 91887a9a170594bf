//! Fill the empty `img` fields of a question file with images taken from a PDF.
//!
//! The first three images of the PDF are skipped; the rest are assigned, in
//! page order, to the questions whose `img` is `""`. The result is written to
//! `result.json` in the current directory. Arguments after the JSON file are
//! accepted and ignored.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgMatches, Command};
use question_assets::questions::{self, DEFAULT_FILLED_OUTPUT};
use question_assets::{logging, PdfImageExtractor, Result, LEADING_IMAGES_SKIPPED};
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn cli() -> Command {
    Command::new("fill-images")
        .about("Write PDF images into the empty `img` fields of a question JSON file")
        .after_help(format!(
            "The first {LEADING_IMAGES_SKIPPED} images of the PDF are skipped. \
             Output is written to '{DEFAULT_FILLED_OUTPUT}' in the current directory."
        ))
        .arg(
            Arg::new("pdf")
                .value_name("PDF_FILE")
                .help("PDF to extract images from")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .value_name("JSON_FILE")
                .help("Question array whose empty `img` fields get filled")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dump-images")
                .long("dump-images")
                .value_name("PATH")
                .help("Also write every extracted image (before skipping) as a JSON list of data URIs")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("ignored")
                .value_name("IGNORED")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .hide(true),
        )
}

fn main() {
    logging::init();

    let matches = match cli().try_get_matches() {
        Ok(m) => m,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    if let Err(e) = run(&matches) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    // Both are required, so clap has already rejected a missing value.
    let pdf_path = matches.get_one::<PathBuf>("pdf").cloned().unwrap_or_default();
    let json_path = matches.get_one::<PathBuf>("json").cloned().unwrap_or_default();

    info!(pdf = %pdf_path.display(), "extracting images");
    let extractor = PdfImageExtractor::from_path(&pdf_path)?;
    let all_images = extractor.extract_data_uris()?;

    if let Some(dump) = matches.get_one::<PathBuf>("dump-images") {
        questions::write_json(dump, &Value::from(all_images.clone()))?;
        info!(path = %dump.display(), images = all_images.len(), "dumped extracted images");
    }

    let skipped = all_images.len().min(LEADING_IMAGES_SKIPPED);
    let images = &all_images[skipped..];
    info!(
        extracted = all_images.len(),
        skipped,
        available = images.len(),
        "prepared images for filling"
    );

    let summary = questions::fill_images_in_json(&json_path, images, DEFAULT_FILLED_OUTPUT)?;
    if summary.unfilled > 0 {
        info!(
            unfilled = summary.unfilled,
            "ran out of images; remaining questions keep an empty img"
        );
    }

    Ok(())
}
