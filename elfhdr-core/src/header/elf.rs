use crate::error::HeaderError;
use crate::header::ident::{Class, DataEncoding, Endianness, ObjectType, OsAbi};
use crate::header::Header;
use byteorder::{ByteOrder, ReadBytesExt, BE, LE};
use goblin::elf::header::{
    EI_ABIVERSION, EI_CLASS, EI_DATA, EI_OSABI, EI_VERSION, ELFMAG, EV_CURRENT, SELFMAG, SIZEOF_IDENT,
};
use serde::Serialize;
use std::io::{self, Cursor};

/// Size of an ELF64 header, the most the reader ever needs from a file.
pub const ELF64_HEADER_SIZE: usize = 64;

/// Size of an ELF32 header.
pub const ELF32_HEADER_SIZE: usize = 52;

/// Decoded ELF file header.
///
/// Built once by [`ElfHeader::parse`] from the first bytes of a file and
/// never modified afterwards. Addresses and offsets are widened to `u64` so
/// ELF32 and ELF64 objects share one representation.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElfHeader {
    /// Raw identification bytes, magic number included.
    pub e_ident: [u8; SIZEOF_IDENT],

    /// Word size declared by `EI_CLASS`.
    pub class: Class,

    /// Data encoding declared by `EI_DATA`.
    pub data: DataEncoding,

    /// `EI_VERSION` byte; `EV_CURRENT` (1) for every real object.
    pub ident_version: u8,

    pub os_abi: OsAbi,

    pub abi_version: u8,

    /// Object file type (relocatable, executable, shared, core).
    pub e_type: ObjectType,

    /// Target architecture, e.g. `EM_X86_64` (62).
    pub e_machine: u16,

    pub e_version: u32,

    /// Virtual address of the program entry point.
    pub e_entry: u64,

    /// File offset of the program header table.
    pub e_phoff: u64,

    /// File offset of the section header table.
    pub e_shoff: u64,

    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,

    /// Index of the section header string table.
    pub e_shstrndx: u16,
}

impl ElfHeader {
    /// Decodes a header from the start of `bytes`.
    ///
    /// The layout (ELF32 or ELF64) follows the class byte and every
    /// multi-byte field is read in the byte order declared by the data byte.
    /// The magic number is not checked here, see [`ElfHeader::has_elf_magic`].
    pub fn parse(bytes: &[u8]) -> Result<Self, HeaderError> {
        let e_ident: [u8; SIZEOF_IDENT] = bytes
            .get(..SIZEOF_IDENT)
            .and_then(|ident| ident.try_into().ok())
            .ok_or(HeaderError::Truncated {
                needed: SIZEOF_IDENT,
                got: bytes.len(),
            })?;

        let class = Class::from(e_ident[EI_CLASS]);
        let data = DataEncoding::from(e_ident[EI_DATA]);
        let needed = match class {
            Class::Elf32 => ELF32_HEADER_SIZE,
            _ => ELF64_HEADER_SIZE,
        };
        let fields = bytes
            .get(SIZEOF_IDENT..needed)
            .ok_or(HeaderError::Truncated {
                needed,
                got: bytes.len(),
            })?;

        let mut cur = Cursor::new(fields);
        let decoded = match data.byte_order() {
            Endianness::Little => Self::read_fields::<LE>(&mut cur, e_ident, class, data),
            Endianness::Big => Self::read_fields::<BE>(&mut cur, e_ident, class, data),
        };

        // The slice length was checked against the layout above.
        decoded.map_err(|_| HeaderError::Truncated {
            needed,
            got: bytes.len(),
        })
    }

    fn read_fields<B: ByteOrder>(
        cur: &mut Cursor<&[u8]>,
        e_ident: [u8; SIZEOF_IDENT],
        class: Class,
        data: DataEncoding,
    ) -> io::Result<Self> {
        let word = class.word_size();

        Ok(ElfHeader {
            e_ident,
            class,
            data,
            ident_version: e_ident[EI_VERSION],
            os_abi: OsAbi::from(e_ident[EI_OSABI]),
            abi_version: e_ident[EI_ABIVERSION],
            e_type: ObjectType::from(cur.read_u16::<B>()?),
            e_machine: cur.read_u16::<B>()?,
            e_version: cur.read_u32::<B>()?,
            e_entry: read_word::<B>(cur, word)?,
            e_phoff: read_word::<B>(cur, word)?,
            e_shoff: read_word::<B>(cur, word)?,
            e_flags: cur.read_u32::<B>()?,
            e_ehsize: cur.read_u16::<B>()?,
            e_phentsize: cur.read_u16::<B>()?,
            e_phnum: cur.read_u16::<B>()?,
            e_shentsize: cur.read_u16::<B>()?,
            e_shnum: cur.read_u16::<B>()?,
            e_shstrndx: cur.read_u16::<B>()?,
        })
    }

    /// Returns true if the first four bytes are `\x7fELF`.
    pub fn has_elf_magic(&self) -> bool {
        self.e_ident[..SELFMAG] == ELFMAG[..]
    }

    /// Returns true if `EI_VERSION` is `EV_CURRENT`.
    pub fn is_current_version(&self) -> bool {
        self.ident_version == EV_CURRENT
    }
}

fn read_word<B: ByteOrder>(cur: &mut Cursor<&[u8]>, word: usize) -> io::Result<u64> {
    if word == 4 {
        cur.read_u32::<B>().map(u64::from)
    } else {
        cur.read_u64::<B>()
    }
}

impl Header for ElfHeader {
    fn entry_point(&self) -> u64 {
        self.e_entry
    }

    fn machine(&self) -> u16 {
        self.e_machine
    }

    fn is_64(&self) -> bool {
        self.class != Class::Elf32
    }

    fn format_name(&self) -> &'static str {
        "ELF"
    }

    fn is_executable(&self) -> bool {
        self.e_type == ObjectType::Executable
    }
}
