use buildprobe::error::ProbeError;
use buildprobe::greeting::platform_line;
use clap::Parser;
use std::io::Write;

/// Toolchain smoke check: prints `Hello <Platform> <Mode>` and exits.
///
/// The CLI takes no flags and no arguments; platform and build mode are
/// fixed at compile time. clap still owns the surface so stray arguments
/// are rejected with a diagnostic instead of being silently ignored.
#[derive(Parser)]
#[command(
    name = "buildprobe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Prints the platform and build mode this binary was compiled for"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(err) = run() {
        emit_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ProbeError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", platform_line())?;
    out.flush()?;
    Ok(())
}

fn emit_error(err: &ProbeError) {
    eprintln!("error[{}]: {}", err.error_code(), err);
    if let Some(hint) = err.remediation() {
        eprintln!("hint: {}", hint);
    }
}
