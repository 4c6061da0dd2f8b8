//! Human-readable image report, in the spirit of `readelf -h`/`-S`.

use std::io::{self, Write};

use num_traits::FromPrimitive;

use crate::elf::{
    ElfImage, SectionFlags, SectionType, MAX_SECTIONS, MAX_SEGMENTS, SECTION_HEADER_SIZE,
};

/// Writes the header summary and section listing for a decoded image.
pub fn write_info<W: Write>(image: &ElfImage, out: &mut W) -> io::Result<()> {
    writeln!(out, "  Start of section headers:          {}", image.section_table_offset())?;
    writeln!(out, "  Size of section headers:           {}", SECTION_HEADER_SIZE)?;
    writeln!(out, "  Number of section headers:         {}", image.sections().len())?;
    writeln!(out, "  Section header string table index: {}", image.string_table_index())?;
    writeln!(out, "  Architecture:                      {}", image.machine)?;
    if image.sections_truncated() {
        writeln!(
            out,
            "  warning: section table truncated to {} of {} entries",
            MAX_SECTIONS,
            image.declared_section_count()
        )?;
    }
    if image.segments_truncated() {
        writeln!(
            out,
            "  warning: program header table truncated to {} of {} entries",
            MAX_SEGMENTS,
            image.declared_segment_count()
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "  [Nr] Name              Type            Addr     Off    Size   ES Flg Lk Inf Al"
    )?;
    for (number, section) in image.sections().iter().enumerate() {
        let name = section.name.get(..17).unwrap_or(section.name);
        let kind = SectionType::from_u32(section.kind).map_or("", SectionType::name);
        writeln!(
            out,
            "  [{:2}] {:<17} {:<15} {:08x} {:06x} {:06x} {:02x} {:<4}{:2} {:3} {:2}",
            number,
            name,
            kind,
            section.addr,
            section.offset,
            section.size,
            section.entry_size,
            SectionFlags::new(section.flags).letters(),
            section.link,
            section.info,
            section.alignment,
        )?;
    }
    writeln!(out)?;
    Ok(())
}
