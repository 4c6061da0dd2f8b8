//! Symbol-table lookups over the `.symtab`/`.strtab` section pair.

use crate::elf::section::string_at;
use crate::elf::{ElfImage, Endianness, Reader, Section};

/// Width of one symbol-table entry: name index, value, and eight bytes of
/// fields this tool never reads.
const SYMBOL_ENTRY_SIZE: usize = 16;

/// Resolves symbol names to values by linear scan.
///
/// Remembers the most recently matched symbol, so repeated lookups of the
/// same name during a classification run cost one comparison. The cache
/// never needs invalidating: the tables it reads are immutable for the
/// resolver's lifetime.
pub struct SymbolResolver<'e, 'a> {
    endianness: Endianness,
    symtab: Option<&'e Section<'a>>,
    strtab: Option<&'e Section<'a>>,
    cache: Option<(&'a str, u32)>,
}

impl<'a> ElfImage<'a> {
    /// Symbol resolver over this image's `.symtab` and `.strtab`.
    pub fn symbols(&self) -> SymbolResolver<'_, 'a> {
        SymbolResolver {
            endianness: self.endianness,
            symtab: self.section(".symtab"),
            strtab: self.section(".strtab"),
            cache: None,
        }
    }
}

impl<'e, 'a> SymbolResolver<'e, 'a> {
    /// Value of the first symbol whose name matches exactly, or `None`
    /// when the name is absent or the image has no symbol table. Entries
    /// whose name index falls outside the string table are skipped.
    pub fn value(&mut self, name: &str) -> Option<u32> {
        if let Some((cached_name, cached_value)) = self.cache {
            if cached_name == name {
                return Some(cached_value);
            }
        }
        let symtab = self.symtab?;
        let strtab = self.strtab?;
        for entry in symtab.bytes().chunks_exact(SYMBOL_ENTRY_SIZE) {
            let mut fields = Reader::new(entry, self.endianness);
            let name_index = fields.read_u32();
            let value = fields.read_u32();
            if name_index > strtab.size {
                continue;
            }
            if let Some(entry_name) = string_at(strtab.bytes(), name_index) {
                if entry_name == name {
                    self.cache = Some((entry_name, value));
                    return Some(value);
                }
            }
        }
        None
    }
}
