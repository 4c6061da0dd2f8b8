//! Reconstructs the memory image a loader would produce from the
//! loadable segments.

use crate::elf::ElfImage;

/// Fill byte for address ranges no segment backs; NOR flash erases to 0xFF.
pub const ERASED: u8 = 0xFF;

impl<'a> ElfImage<'a> {
    /// True when any loadable segment has file bytes inside
    /// `[addr, addr + len)`.
    pub fn has_data(&self, addr: u32, len: u32) -> bool {
        let range_start = u64::from(addr);
        let range_end = range_start + u64::from(len);
        self.segments().iter().any(|segment| {
            if !segment.is_loadable() || segment.file_size == 0 {
                return false;
            }
            let begin = u64::from(segment.physical_addr);
            let end = begin + u64::from(segment.file_size);
            begin < range_end && end > range_start
        })
    }

    /// Copies the bytes occupying `[addr, addr + dest.len())` into `dest`.
    ///
    /// Bytes no segment backs read as [`ERASED`]. Segments apply in table
    /// order, so where two overlap the later one wins. Never fails.
    pub fn read_image(&self, addr: u32, dest: &mut [u8]) {
        dest.fill(ERASED);
        let range_start = u64::from(addr);
        let range_end = range_start + dest.len() as u64;
        for segment in self.segments() {
            if !segment.is_loadable() || segment.file_size == 0 {
                continue;
            }
            let begin = u64::from(segment.physical_addr);
            let end = begin + u64::from(segment.file_size);
            if begin >= range_end || end <= range_start {
                continue;
            }
            let (src_offset, dest_offset) = if begin >= range_start {
                (0, begin - range_start)
            } else {
                (range_start - begin, 0)
            };
            let copy_len = (dest.len() as u64 - dest_offset).min(end - begin - src_offset) as usize;
            let src = &segment.bytes()[src_offset as usize..src_offset as usize + copy_len];
            dest[dest_offset as usize..dest_offset as usize + copy_len].copy_from_slice(src);
        }
    }
}
