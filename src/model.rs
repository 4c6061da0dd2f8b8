//! Infers which Teensy board an image was built for from its symbol
//! values.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::elf::ElfImage;

pub const MACHINE_ARM: u16 = 40;
pub const MACHINE_AVR: u16 = 83;

/// Known board models, by model code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Model {
    Teensy10 = 0x19,
    TeensyPlusPlus10 = 0x1A,
    Teensy20 = 0x1B,
    TeensyPlusPlus20 = 0x1C,
    Teensy30 = 0x1D,
    Teensy31 = 0x1E,
    Teensy35 = 0x1F,
    TeensyLc = 0x20,
    Teensy32 = 0x21,
    Teensy36 = 0x22,
    Teensy4Beta1 = 0x23,
    Teensy40 = 0x24,
    Teensy41 = 0x25,
    TeensyMicroMod = 0x26,
}

impl Model {
    pub fn name(self) -> &'static str {
        match self {
            Model::Teensy10 => "Teensy 1.0",
            Model::TeensyPlusPlus10 => "Teensy++ 1.0",
            Model::Teensy20 => "Teensy 2.0",
            Model::TeensyPlusPlus20 => "Teensy++ 2.0",
            Model::Teensy30 => "Teensy 3.0",
            Model::Teensy31 => "Teensy 3.1",
            Model::Teensy35 => "Teensy 3.5",
            Model::TeensyLc => "Teensy LC",
            Model::Teensy32 => "Teensy 3.2",
            Model::Teensy36 => "Teensy 3.6",
            Model::Teensy4Beta1 => "Teensy 4-Beta1",
            Model::Teensy40 => "Teensy 4.0",
            Model::Teensy41 => "Teensy 4.1",
            Model::TeensyMicroMod => "Teensy MicroMod",
        }
    }
}

/// Display name for a model code. Unrecognized codes are still a Teensy
/// as far as the tooling is concerned.
pub fn model_name(id: u32) -> &'static str {
    Model::from_u32(id).map_or("Teensy", Model::name)
}

// (initial stack pointer, defined-vector mask) -> model code
const AVR_MODELS: [(u32, u64, u32); 4] = [
    (0x02FF, 0x0000_1FFF_FFFE, 0x19), // Teensy 1.0
    (0x0AFF, 0x07FF_FFFF_FFFE, 0x1B), // Teensy 2.0
    (0x10FF, 0x003F_FFFF_FFFE, 0x1A), // Teensy++ 1.0
    (0x20FF, 0x003F_FFFF_FFFE, 0x1C), // Teensy++ 2.0
];

// initial stack pointer -> model code
const ARM_MODELS: [(u32, u32); 7] = [
    (0x2000_2000, 0x1D), // Teensy 3.0
    (0x2000_8000, 0x21), // Teensy 3.1 or 3.2
    (0x2002_0000, 0x1F), // Teensy 3.5 (K64), Teensyduino 1.41
    (0x2002_FFFC, 0x1F), // Teensy 3.5, Teensyduino 1.42-beta4
    (0x2002_FFF8, 0x1F), // Teensy 3.5, Teensyduino 1.42+
    (0x2003_0000, 0x22), // Teensy 3.6 (K66)
    (0x2000_1800, 0x20), // Teensy LC
];

impl<'a> ElfImage<'a> {
    /// Model code of the board this image targets, or 0 when the board
    /// cannot be determined.
    ///
    /// An explicit `_teensy_model_identifier` symbol wins. Otherwise the
    /// initial stack pointer identifies the board, combined on AVR with a
    /// mask of which interrupt vectors the image defines.
    pub fn model_id(&self) -> u32 {
        let mut symbols = self.symbols();
        if let Some(id) = symbols.value("_teensy_model_identifier") {
            return id;
        }
        match self.machine {
            MACHINE_AVR => {
                let Some(stack) = symbols.value("__stack") else {
                    return 0;
                };
                let mut mask = 0u64;
                for num in 0..64 {
                    if symbols.value(&format!("__vector_{num}")).is_some() {
                        mask |= 1 << num;
                    }
                }
                AVR_MODELS
                    .iter()
                    .find(|&&(known_stack, known_mask, _)| known_stack == stack && known_mask == mask)
                    .map_or(0, |&(_, _, id)| id)
            }
            MACHINE_ARM => {
                let Some(stack) = symbols.value("_estack") else {
                    return 0;
                };
                ARM_MODELS
                    .iter()
                    .find(|&&(known_stack, _)| known_stack == stack)
                    .map_or(0, |&(_, id)| id)
            }
            _ => 0,
        }
    }
}
