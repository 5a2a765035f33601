use std::{path::PathBuf, process::ExitCode};

use acasm::{emit, msg};
use tracing_subscriber::EnvFilter;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file
    input: PathBuf,

    /// Output base name: writes <BASE>.mem, <BASE>.bin and <BASE>.lst
    output: PathBuf,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    use clap::Parser;

    let args = Args::parse();
    init_tracing(args.verbose);

    let input = args.input.display().to_string();
    let text = match acasm::read_source(&args.input) {
        Ok(text) => text,
        Err(err) => {
            eprint!("{}", msg::render(&err, &input, ""));
            return ExitCode::FAILURE;
        }
    };

    let result = acasm::assemble(&text).and_then(|asm| {
        emit::write_outputs(&args.output, &input, &asm)?;
        Ok(asm)
    });

    match result {
        Ok(asm) => {
            println!(
                "Assembled {} -> {}.{{mem,bin,lst}} (last=0x{:02X})",
                input,
                args.output.display(),
                asm.image.last_used()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", msg::render(&err, &input, &text));
            ExitCode::FAILURE
        }
    }
}
