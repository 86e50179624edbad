// main.rs — dehpatch command-line entry point
//
//   dehpatch [--config FILE] [--dump-pointers] [--dump-properties] [--output FILE]
//
// Loads settings, optionally dumps the registries, and writes an empty patch
// for the configured feature level when an output file is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use dehpatch_common::action_pointer::{write_pointer_listing, ActionPointerRegistry};
use dehpatch_common::config::PatchConfig;
use dehpatch_common::property::{write_property_listing, PropertyRegistry};
use dehpatch_common::{PatchError, PatchResult};
use dehpatch_game::exporter::write_patch;
use dehpatch_game::session::PatchSession;

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    dump_pointers: bool,
    dump_properties: bool,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> PatchResult<Options> {
    let mut options = Options::default();
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or_else(|| PatchError::Config("--config needs a file".into()))?;
                options.config = Some(PathBuf::from(path));
            }
            "--output" | "-o" => {
                let path = args.next().ok_or_else(|| PatchError::Config("--output needs a file".into()))?;
                options.output = Some(PathBuf::from(path));
            }
            "--dump-pointers" => options.dump_pointers = true,
            "--dump-properties" => options.dump_properties = true,
            "--help" | "-h" => options.help = true,
            other => return Err(PatchError::Config(format!("unknown argument \"{}\"", other))),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("usage: dehpatch [--config FILE] [--dump-pointers] [--dump-properties] [--output FILE]");
}

fn run(options: &Options) -> PatchResult<()> {
    let config = match &options.config {
        Some(path) => PatchConfig::load(path)?,
        None => PatchConfig::default(),
    };

    // Both registries are complete before anything touches an entity.
    let pointers = ActionPointerRegistry::new();
    let properties = PropertyRegistry::standard();

    let stdout = io::stdout();
    let mut console = stdout.lock();
    if options.dump_pointers {
        write_pointer_listing(&pointers, &mut console)?;
    }
    if options.dump_properties {
        write_property_listing(&properties, &mut console)?;
    }
    console.flush()?;

    if let Some(path) = &options.output {
        let session = PatchSession::from_config(&config, &pointers)?;
        let mut out = BufWriter::new(File::create(path)?);
        write_patch(&session, &mut out, &config.comment)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    if options.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(args(&["--config", "patch.toml", "--dump-pointers", "-o", "out.deh"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("patch.toml")));
        assert_eq!(options.output, Some(PathBuf::from("out.deh")));
        assert!(options.dump_pointers);
        assert!(!options.dump_properties);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }
}
