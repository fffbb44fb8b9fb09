use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use elfhdr_core::{read_raw_header, write_report, ElfHeader, Header, HeaderError, EXIT_FAILURE};
use std::io::{self, Write};
use std::process::ExitCode;

/// Print the ELF header of a file
#[derive(Parser)]
#[command(
    name = "elf_header",
    about = "Display the information contained in the ELF header of a file",
    version,
    author
)]
struct Cli {
    /// Path to binary file
    #[arg(allow_hyphen_values = true)]
    path: std::path::PathBuf,

    /// Refuse files that do not start with the ELF magic number
    #[arg(long)]
    strict: bool,

    /// Print the decoded header as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            log::debug!("rejected arguments: {:?}", err.kind());
            eprintln!("{}", HeaderError::Usage);
            return ExitCode::from(HeaderError::Usage.exit_status());
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            let status = err
                .downcast_ref::<HeaderError>()
                .map_or(EXIT_FAILURE, HeaderError::exit_status);
            ExitCode::from(status)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // The file is closed again before anything is printed.
    let raw = read_raw_header(&cli.path)?;
    let header = ElfHeader::parse(&raw.bytes)?;

    if !header.has_elf_magic() {
        if cli.strict {
            return Err(HeaderError::NotElf.into());
        }
        log::warn!(
            "{}: no ELF magic number, decoding anyway",
            cli.path.display()
        );
    }
    log::info!(
        "{} header, {}-bit, machine {}, entry {:#x}{}",
        header.format_name(),
        if header.is_64() { 64 } else { 32 },
        header.machine(),
        header.entry_point(),
        if header.is_executable() { ", executable" } else { "" }
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &header)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &header)?;
    }
    out.flush()?;

    Ok(())
}
