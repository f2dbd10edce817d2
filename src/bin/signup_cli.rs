use std::{env, path::PathBuf, process};

use signup_core::cli::{run, CliOptions};

fn main() {
    signup_core::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--data-dir requires a path".to_string())?;
                options.base_dir = Some(PathBuf::from(value));
            }
            "--ephemeral" => options.ephemeral = true,
            "--screen-reader" => options.screen_reader = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(options)
}

fn print_usage() {
    eprintln!(
        "Usage: signup_cli [options]\n\
         Options:\n  \
         --data-dir <path>   store and config location\n  \
         --ephemeral         keep persistence in memory\n  \
         --screen-reader     plain spoken-friendly output\n  \
         -h, --help          show this help"
    );
}
