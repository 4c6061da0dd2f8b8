//! Builder for small synthetic executable images used across the test
//! modules.

use crate::elf::Endianness;

pub(crate) struct ImageBuilder {
    endianness: Endianness,
    machine: u16,
    sections: Vec<SectionSpec>,
    segments: Vec<SegmentSpec>,
    symbols: Vec<(String, u32)>,
}

struct SectionSpec {
    name: String,
    kind: u32,
    flags: u32,
    addr: u32,
    data: Vec<u8>,
}

struct SegmentSpec {
    kind: u32,
    backing: Backing,
    physical_addr: u32,
}

#[derive(Clone, Copy)]
enum Backing {
    Section(usize),
    Raw { offset: u32, file_size: u32 },
}

impl ImageBuilder {
    pub fn new(machine: u16) -> ImageBuilder {
        ImageBuilder {
            endianness: Endianness::Little,
            machine,
            sections: Vec::new(),
            segments: Vec::new(),
            symbols: Vec::new(),
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.endianness = Endianness::Big;
        self
    }

    pub fn section(mut self, name: &str, kind: u32, flags: u32, addr: u32, data: &[u8]) -> Self {
        self.sections.push(SectionSpec {
            name: name.into(),
            kind,
            flags,
            addr,
            data: data.to_vec(),
        });
        self
    }

    /// Adds a loadable segment together with the section that backs it.
    pub fn load_segment(mut self, name: &str, physical_addr: u32, data: &[u8]) -> Self {
        let index = self.sections.len();
        self.sections.push(SectionSpec {
            name: name.into(),
            kind: 1,
            flags: 0x6, // allocated, executable
            addr: physical_addr,
            data: data.to_vec(),
        });
        self.segments.push(SegmentSpec {
            kind: 1,
            backing: Backing::Section(index),
            physical_addr,
        });
        self
    }

    /// Adds a segment with an explicit file offset, backed by nothing.
    pub fn raw_segment(mut self, kind: u32, offset: u32, file_size: u32, physical_addr: u32) -> Self {
        self.segments.push(SegmentSpec {
            kind,
            backing: Backing::Raw { offset, file_size },
            physical_addr,
        });
        self
    }

    pub fn symbol(mut self, name: &str, value: u32) -> Self {
        self.symbols.push((name.into(), value));
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        let endianness = self.endianness;
        let u16b = move |value: u16| match endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        let u32b = move |value: u32| match endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };

        if !self.symbols.is_empty() {
            let mut strtab = vec![0u8];
            let mut symtab = vec![0u8; 16]; // null symbol
            for (name, value) in &self.symbols {
                let index = strtab.len() as u32;
                strtab.extend_from_slice(name.as_bytes());
                strtab.push(0);
                symtab.extend_from_slice(&u32b(index));
                symtab.extend_from_slice(&u32b(*value));
                symtab.extend_from_slice(&u32b(0)); // size
                symtab.extend_from_slice(&[0, 0]); // info, other
                symtab.extend_from_slice(&u16b(0)); // section index
            }
            self.sections.push(SectionSpec {
                name: ".symtab".into(),
                kind: 2,
                flags: 0,
                addr: 0,
                data: symtab,
            });
            self.sections.push(SectionSpec {
                name: ".strtab".into(),
                kind: 3,
                flags: 0,
                addr: 0,
                data: strtab,
            });
        }

        // Section name string table, always last so e_shstrndx can point
        // at it.
        let mut shstrtab = vec![0u8];
        let mut name_indices = Vec::with_capacity(self.sections.len() + 1);
        for section in &self.sections {
            name_indices.push(shstrtab.len() as u32);
            shstrtab.extend_from_slice(section.name.as_bytes());
            shstrtab.push(0);
        }
        name_indices.push(shstrtab.len() as u32);
        shstrtab.extend_from_slice(b".shstrtab\0");
        self.sections.push(SectionSpec {
            name: ".shstrtab".into(),
            kind: 3,
            flags: 0,
            addr: 0,
            data: shstrtab,
        });

        let mut out = vec![0u8; 52];
        let mut offsets = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            offsets.push(out.len() as u32);
            out.extend_from_slice(&section.data);
        }

        let segment_table_offset = out.len() as u32;
        for segment in &self.segments {
            let (offset, file_size) = match segment.backing {
                Backing::Section(index) => (offsets[index], self.sections[index].data.len() as u32),
                Backing::Raw { offset, file_size } => (offset, file_size),
            };
            out.extend_from_slice(&u32b(segment.kind));
            out.extend_from_slice(&u32b(offset));
            out.extend_from_slice(&u32b(segment.physical_addr)); // virtual
            out.extend_from_slice(&u32b(segment.physical_addr));
            out.extend_from_slice(&u32b(file_size));
            out.extend_from_slice(&u32b(file_size)); // memory size
            out.extend_from_slice(&u32b(0x5)); // readable, executable
            out.extend_from_slice(&u32b(4)); // alignment
        }

        let section_table_offset = out.len() as u32;
        out.extend_from_slice(&[0u8; 40]); // null section
        for (index, section) in self.sections.iter().enumerate() {
            out.extend_from_slice(&u32b(name_indices[index]));
            out.extend_from_slice(&u32b(section.kind));
            out.extend_from_slice(&u32b(section.flags));
            out.extend_from_slice(&u32b(section.addr));
            out.extend_from_slice(&u32b(offsets[index]));
            out.extend_from_slice(&u32b(section.data.len() as u32));
            out.extend_from_slice(&u32b(0)); // link
            out.extend_from_slice(&u32b(0)); // info
            out.extend_from_slice(&u32b(0)); // alignment
            out.extend_from_slice(&u32b(0)); // entry size
        }

        let section_count = self.sections.len() as u16 + 1;
        out[0..4].copy_from_slice(&[0x7F, b'E', b'L', b'F']);
        out[4] = 1; // 32-bit
        out[5] = match endianness {
            Endianness::Little => 1,
            Endianness::Big => 2,
        };
        out[6] = 1; // version
        put(&mut out, 16, &u16b(2)); // executable
        put(&mut out, 18, &u16b(self.machine));
        put(&mut out, 20, &u32b(1)); // version
        put(&mut out, 24, &u32b(0)); // entry point
        put(&mut out, 28, &u32b(segment_table_offset));
        put(&mut out, 32, &u32b(section_table_offset));
        put(&mut out, 36, &u32b(0)); // processor flags
        put(&mut out, 40, &u16b(52));
        put(&mut out, 42, &u16b(32));
        put(&mut out, 44, &u16b(self.segments.len() as u16));
        put(&mut out, 46, &u16b(40));
        put(&mut out, 48, &u16b(section_count));
        put(&mut out, 50, &u16b(section_count - 1));
        out
    }
}

fn put(out: &mut [u8], at: usize, bytes: &[u8]) {
    out[at..at + bytes.len()].copy_from_slice(bytes);
}
