//! Hardware random source.
//!
//! ESP-IDF: `esp_random()` (true RNG while the radio is on).
//! Host: `RandomState` hashing, non-cryptographic.

use crate::app::ports::RandomSource;

#[derive(Debug, Default)]
pub struct HardwareRng;

impl HardwareRng {
    #[cfg(target_os = "espidf")]
    fn next_u32(&mut self) -> u32 {
        // SAFETY: no preconditions.
        unsafe { esp_idf_svc::sys::esp_random() }
    }

    #[cfg(not(target_os = "espidf"))]
    fn next_u32(&mut self) -> u32 {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        RandomState::new().build_hasher().finish() as u32
    }
}

impl RandomSource for HardwareRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.next_u32() as usize % bound
    }
}
