//! CHIP-8 virtual machine.
//!
//! The crate implements the instruction set, memory model and I/O surface of
//! the machine. Presenting the display, sampling the keyboard, playing sound
//! and pacing cycles are left to the host, which drives [`prelude::Chip8Vm`]
//! through its access points.
mod bytecode;
pub mod constants;
mod cpu;
mod devices;
mod disasm;
mod dispatch;
mod error;
mod ops;
mod random;
mod vm;

pub use self::{
    bytecode::Opcode,
    devices::{InvalidKeyCode, KeyCode},
    error::{Chip8Error, Chip8Result},
    vm::Chip8DisplayBuffer,
};

/// Version of this implementation.
pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use super::{
        bytecode::Opcode,
        devices::KeyCode,
        disasm::{Disassembler, Mnemonic},
        error::{Chip8Error, Chip8Result},
        random::RandomByte,
        vm::{Chip8Conf, Chip8Vm, SpriteEdge},
    };
}
