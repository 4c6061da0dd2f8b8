//! Inspection library for 32-bit Teensy firmware images: decodes the ELF
//! container, reconstructs the flash image a loader would write, resolves
//! symbols, and infers which board the image was built for.

pub mod elf;
pub mod extract;
pub mod model;
pub mod report;
pub mod symbols;

pub use elf::{
    ElfError, ElfImage, ElfResult, Endianness, Section, SectionFlags, SectionType, Segment,
};
pub use extract::ERASED;
pub use model::{model_name, Model, MACHINE_ARM, MACHINE_AVR};
pub use symbols::SymbolResolver;

#[cfg(test)]
pub(crate) mod testimg;
