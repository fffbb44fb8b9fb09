use goblin::elf::header::{
    ELFCLASS32, ELFCLASS64, ELFCLASSNONE, ELFDATA2LSB, ELFDATA2MSB, ELFDATANONE, ELFOSABI_ARM,
    ELFOSABI_FREEBSD, ELFOSABI_HPUX, ELFOSABI_IRIX, ELFOSABI_LINUX, ELFOSABI_NETBSD,
    ELFOSABI_NONE, ELFOSABI_SOLARIS, ELFOSABI_STANDALONE, ELFOSABI_TRU64, ET_CORE, ET_DYN,
    ET_EXEC, ET_NONE, ET_REL,
};
use serde::Serialize;
use std::fmt;

/// `EI_CLASS`: word size of the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Class {
    None,
    Elf32,
    Elf64,
    Unknown(u8),
}

impl Class {
    /// Size in bytes of addresses and offsets in the rest of the header.
    ///
    /// Anything that is not explicitly ELF32 is decoded with the ELF64 layout.
    pub fn word_size(self) -> usize {
        match self {
            Class::Elf32 => 4,
            _ => 8,
        }
    }
}

impl From<u8> for Class {
    fn from(byte: u8) -> Self {
        match byte {
            ELFCLASSNONE => Class::None,
            ELFCLASS32 => Class::Elf32,
            ELFCLASS64 => Class::Elf64,
            other => Class::Unknown(other),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::None => f.write_str("none"),
            Class::Elf32 => f.write_str("ELF32"),
            Class::Elf64 => f.write_str("ELF64"),
            Class::Unknown(byte) => write!(f, "<unknown: {byte:02x}>"),
        }
    }
}

/// Byte order used to read every multi-byte field after `e_ident`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

/// `EI_DATA`: declared data encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataEncoding {
    None,
    Lsb,
    Msb,
    Unknown(u8),
}

impl DataEncoding {
    /// Byte order for field extraction. Only an explicit MSB encoding reads
    /// big endian; none and unknown encodings fall back to little endian.
    pub fn byte_order(self) -> Endianness {
        match self {
            DataEncoding::Msb => Endianness::Big,
            _ => Endianness::Little,
        }
    }
}

impl From<u8> for DataEncoding {
    fn from(byte: u8) -> Self {
        match byte {
            ELFDATANONE => DataEncoding::None,
            ELFDATA2LSB => DataEncoding::Lsb,
            ELFDATA2MSB => DataEncoding::Msb,
            other => DataEncoding::Unknown(other),
        }
    }
}

impl fmt::Display for DataEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataEncoding::None => f.write_str("none"),
            DataEncoding::Lsb => f.write_str("2's complement, little endian"),
            DataEncoding::Msb => f.write_str("2's complement, big endian"),
            DataEncoding::Unknown(byte) => write!(f, "<unknown: {byte:02x}>"),
        }
    }
}

/// `EI_OSABI`: target operating system or ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OsAbi {
    SystemV,
    HpUx,
    NetBsd,
    Linux,
    Solaris,
    Irix,
    FreeBsd,
    Tru64,
    Arm,
    Standalone,
    Unknown(u8),
}

impl From<u8> for OsAbi {
    fn from(byte: u8) -> Self {
        match byte {
            ELFOSABI_NONE => OsAbi::SystemV,
            ELFOSABI_HPUX => OsAbi::HpUx,
            ELFOSABI_NETBSD => OsAbi::NetBsd,
            ELFOSABI_LINUX => OsAbi::Linux,
            ELFOSABI_SOLARIS => OsAbi::Solaris,
            ELFOSABI_IRIX => OsAbi::Irix,
            ELFOSABI_FREEBSD => OsAbi::FreeBsd,
            ELFOSABI_TRU64 => OsAbi::Tru64,
            ELFOSABI_ARM => OsAbi::Arm,
            ELFOSABI_STANDALONE => OsAbi::Standalone,
            other => OsAbi::Unknown(other),
        }
    }
}

impl fmt::Display for OsAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsAbi::SystemV => "UNIX - System V",
            OsAbi::HpUx => "UNIX - HP-UX",
            OsAbi::NetBsd => "UNIX - NetBSD",
            OsAbi::Linux => "UNIX - Linux",
            OsAbi::Solaris => "UNIX - Solaris",
            OsAbi::Irix => "UNIX - IRIX",
            OsAbi::FreeBsd => "UNIX - FreeBSD",
            OsAbi::Tru64 => "UNIX - TRU64",
            OsAbi::Arm => "ARM",
            OsAbi::Standalone => "Standalone App",
            OsAbi::Unknown(byte) => return write!(f, "<unknown: {byte:02x}>"),
        };
        f.write_str(name)
    }
}

/// `e_type`: object file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectType {
    None,
    Relocatable,
    Executable,
    SharedObject,
    Core,
    Unknown(u16),
}

impl From<u16> for ObjectType {
    fn from(value: u16) -> Self {
        match value {
            ET_NONE => ObjectType::None,
            ET_REL => ObjectType::Relocatable,
            ET_EXEC => ObjectType::Executable,
            ET_DYN => ObjectType::SharedObject,
            ET_CORE => ObjectType::Core,
            other => ObjectType::Unknown(other),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::None => "NONE (None)",
            ObjectType::Relocatable => "REL (Relocatable file)",
            ObjectType::Executable => "EXEC (Executable file)",
            ObjectType::SharedObject => "DYN (Shared object file)",
            ObjectType::Core => "CORE (Core file)",
            ObjectType::Unknown(value) => return write!(f, "<unknown: {value:x}>"),
        };
        f.write_str(name)
    }
}
