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

//! Error kinds returned by fallible core operations.
//!
//! The core never panics or logs on malformed ROM input or runtime opcode
//! data; every fallible operation surfaces one of these variants instead,
//! leaving the decision of whether to treat it as fatal to the frontend.

use thiserror::Error;

/// Everything that can go wrong while loading a ROM or executing a cycle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    /// The fetched 16-bit instruction matched no entry in the opcode table.
    #[error("unknown opcode {0:#06X}")]
    UnknownOpcode(u16),

    /// `2NNN` (`CALL`) was executed while the stack already held 16 return
    /// addresses.
    #[error("stack overflow: call stack already holds 16 return addresses")]
    StackOverflow,

    /// `00EE` (`RET`) was executed with an empty stack.
    #[error("stack underflow: return executed with an empty call stack")]
    StackUnderflow,

    /// `load()` was given a ROM larger than the 3584 bytes available
    /// between `0x200` and `0xFFF`.
    #[error("ROM is too large: {0} bytes exceeds the 3584 byte limit")]
    RomTooLarge(usize),
}
