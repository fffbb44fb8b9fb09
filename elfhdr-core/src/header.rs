pub mod elf;
pub mod ident;

pub trait Header {
    /// Returns the virtual address of the entry point.
    fn entry_point(&self) -> u64;

    /// Returns the machine architecture identifier.
    fn machine(&self) -> u16;

    /// Returns true unless the header declares a 32-bit layout.
    fn is_64(&self) -> bool;

    /// Returns a short human-readable name, e.g. "ELF".
    fn format_name(&self) -> &'static str;

    /// Returns true if the object is an executable (vs object/lib/core).
    fn is_executable(&self) -> bool;
}
