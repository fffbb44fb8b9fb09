//! Text rendering of a decoded header, one `Label: value` line per field.

use crate::header::elf::ElfHeader;
use crate::header::Header;
use std::fmt::Display;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 35;

fn field<W: Write>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "  {:<width$}{}", label, value, width = LABEL_WIDTH)
}

/// Writes the 16 identification bytes as space-separated two-digit hex.
pub fn write_magic<W: Write>(out: &mut W, hdr: &ElfHeader) -> io::Result<()> {
    let hex: Vec<String> = hdr.e_ident.iter().map(|b| format!("{b:02x}")).collect();
    writeln!(out, "  Magic:   {}", hex.join(" "))
}

pub fn write_class_data_version<W: Write>(out: &mut W, hdr: &ElfHeader) -> io::Result<()> {
    field(out, "Class:", hdr.class)?;
    field(out, "Data:", hdr.data)?;

    let version = if hdr.is_current_version() {
        format!("{} (current)", hdr.ident_version)
    } else {
        hdr.ident_version.to_string()
    };
    field(out, "Version:", version)
}

pub fn write_osabi_type_entry<W: Write>(out: &mut W, hdr: &ElfHeader) -> io::Result<()> {
    field(out, "OS/ABI:", hdr.os_abi)?;
    field(out, "Type:", hdr.e_type)?;
    field(out, "Entry point address:", format!("{:#x}", hdr.entry_point()))
}

/// Writes the full report: magic, then class/data/version, then
/// OS/ABI/type/entry.
pub fn write_report<W: Write>(out: &mut W, hdr: &ElfHeader) -> io::Result<()> {
    write_magic(out, hdr)?;
    write_class_data_version(out, hdr)?;
    write_osabi_type_entry(out, hdr)
}
