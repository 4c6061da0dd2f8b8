use thiserror::Error;

/// Structural decode failures. Every variant is fatal to the decode that
/// produced it; no partial state survives a failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ElfError {
    #[error("missing ELF magic number")]
    BadMagic,
    #[error("not a 32-bit ELF image")]
    Not32Bit,
    #[error("unknown data encoding")]
    UnknownEndianness,
    #[error("not an executable image")]
    NotExecutable,
    #[error("ELF header is not 52 bytes")]
    BadHeaderSize,
    #[error("section header entries are not 40 bytes")]
    BadSectionHeaderSize,
    #[error("program header entries are not 32 bytes")]
    BadSegmentHeaderSize,
    #[error("file truncated: need {needed} bytes, have {available}")]
    Truncated { needed: u64, available: usize },
    #[error("loadable segment at file offset {offset:#x} has no matching section")]
    MissingSection { offset: u32 },
}

pub type ElfResult<T> = Result<T, ElfError>;
