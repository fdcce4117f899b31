/*
Copyright 2020 Anish Jewalikar

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! The 16-key keypad surface.
//!
//! This is the one polymorphic seam of the core: everything else is a
//! closed sum of opcode cases, but the keypad is worth naming as a trait so
//! test code can drive it without going through `Chip8`'s public key
//! methods.

/// Latched state of the 16 hexadecimal keys (0x0-0xF).
pub trait Keypad {
    /// Marks `key` as pressed. `key` is masked to its low nibble.
    fn press(&mut self, key: usize);

    /// Marks `key` as released. `key` is masked to its low nibble.
    fn release(&mut self, key: usize);

    /// Whether `key` is currently pressed.
    fn is_pressed(&self, key: usize) -> bool;

    /// The index of any currently pressed key, if one exists.
    fn any_pressed(&self) -> Option<usize>;
}

/// Straightforward `[bool; 16]`-backed `Keypad`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatchKeypad {
    keys: [bool; 0x10],
}

impl LatchKeypad {
    /// All keys start released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases every key.
    pub fn reset(&mut self) {
        self.keys = [false; 0x10];
    }
}

impl Keypad for LatchKeypad {
    fn press(&mut self, key: usize) {
        self.keys[key & 0xF] = true;
    }

    fn release(&mut self, key: usize) {
        self.keys[key & 0xF] = false;
    }

    fn is_pressed(&self, key: usize) -> bool {
        self.keys[key & 0xF]
    }

    fn any_pressed(&self) -> Option<usize> {
        self.keys.iter().position(|&pressed| pressed)
    }
}
