use super::reader::Reader;
use super::section::view;

/// Hard cap on the program header table; entries past it are dropped.
pub const MAX_SEGMENTS: usize = 64;

const TYPE_LOADABLE: u32 = 1;

/// One program header plus a borrowed view of its file bytes. Only
/// loadable segments participate in address-range extraction.
#[derive(Debug)]
pub struct Segment<'a> {
    pub kind: u32,
    pub offset: u32,
    pub virtual_addr: u32,
    pub physical_addr: u32,
    pub file_size: u32,
    pub memory_size: u32,
    pub flags: u32,
    pub alignment: u32,
    /// Index of the section sharing this segment's file offset.
    pub section: Option<usize>,
    bytes: &'a [u8],
}

impl<'a> Segment<'a> {
    pub(crate) fn read(entry: &mut Reader<'a>, file: &'a [u8]) -> Segment<'a> {
        let kind = entry.read_u32();
        let offset = entry.read_u32();
        let virtual_addr = entry.read_u32();
        let physical_addr = entry.read_u32();
        let file_size = entry.read_u32();
        let memory_size = entry.read_u32();
        let flags = entry.read_u32();
        let alignment = entry.read_u32();
        Segment {
            kind,
            offset,
            virtual_addr,
            physical_addr,
            file_size,
            memory_size,
            flags,
            alignment,
            section: None,
            bytes: view(file, offset, file_size),
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn is_loadable(&self) -> bool {
        self.kind == TYPE_LOADABLE
    }
}
