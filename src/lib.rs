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

//! A deterministic, cycle-accurate CHIP-8 interpreter core.
//!
//! `chip8-core` models CHIP-8's registers, memory, stack, timers, keypad,
//! and 64x32 monochrome display, and exposes a fetch/decode/execute cycle
//! through [`Chip8::step`]. It is a pure library: no windowing, no audio,
//! no file I/O, no command-line parsing. A frontend drives the VM by
//! calling [`Chip8::step`] (roughly 500-1000 times a second) and
//! [`Chip8::tick_timers`] (at 60 Hz), and polls state back out through the
//! observation accessors on [`Chip8`].
//!
//! # Example
//!
//! ```rust
//! use chip8_core::Chip8;
//!
//! let mut chip8 = Chip8::new();
//! chip8.load(&[0x61, 0x32]).unwrap(); // LD V1, 0x32
//! chip8.step().unwrap();
//!
//! assert_eq!(chip8.registers()[1], 0x32);
//! assert_eq!(chip8.pc(), 0x202);
//! ```

mod error;
mod font;
mod keypad;
mod vm;

pub use error::Chip8Error;
pub use keypad::{Keypad, LatchKeypad};
pub use vm::Chip8;
