pub mod error;
pub mod header;
pub mod report;
pub mod source;

pub use error::*;
pub use header::elf::ElfHeader;
pub use header::ident::*;
pub use header::Header;
pub use report::*;
pub use source::*;
