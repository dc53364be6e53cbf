//! High-level runtime engine settings
//!
//! Selects which optional physics runs each step (magnetic field, fusion)
//! and how fast frames are paced when watching in a terminal

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub magnetic: bool, // register the Lorentz term
    pub fusion: bool, // merge close pairs after the wall bounce
    pub frame_delay_ms: u64, // real-time pause per frame, 0 = as fast as possible
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            magnetic: true,
            fusion: false,
            frame_delay_ms: 200,
        }
    }
}
