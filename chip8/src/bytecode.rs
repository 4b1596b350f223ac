//! Helpers for extracting data from opcodes.
//!
//! Each instruction is two bytes, with the opcode identity in the first 4-bit nibble.
//! The remaining nibbles carry operands:
//!
//! - `_nnn` a 12-bit address
//! - `__nn` an immediate byte
//! - `_x__` register Vx, or the last register of a range V0..=Vx
//! - `__y_` register Vy
//! - `___n` a 4-bit value, or the sub-operation of an instruction family
use std::fmt;

use crate::constants::Address;

/// A single 16-bit instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Combine two bytes, big-endian, into an opcode.
    #[inline(always)]
    pub fn from_bytes(hi: u8, lo: u8) -> Self {
        Self(((hi as u16) << 8) | lo as u16)
    }

    /// Instruction family, the most significant nibble.
    /// `[c___]`
    #[inline(always)]
    pub fn family(self) -> u8 {
        ((self.0 & 0xF000) >> 12) as u8
    }

    /// Operand VX.
    /// `[_x__]`
    #[inline(always)]
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// Operand VY.
    /// `[__y_]`
    #[inline(always)]
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// Operand N, the least significant nibble.
    /// `[___n]`
    #[inline(always)]
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// Operand NN, the least significant byte.
    /// `[__nn]`
    #[inline(always)]
    pub fn nn(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// Operand NNN, the address without the family nibble.
    /// `[_nnn]`
    #[inline(always)]
    pub fn nnn(self) -> Address {
        self.0 & 0x0FFF
    }

    /// Operands VX and NN.
    #[inline(always)]
    pub fn xnn(self) -> (usize, u8) {
        (self.x() as usize, self.nn())
    }

    /// Operands VX and VY.
    #[inline(always)]
    pub fn xy(self) -> (usize, usize) {
        (self.x() as usize, self.y() as usize)
    }

    /// Operands VX, VY and N.
    #[inline(always)]
    pub fn xyn(self) -> (usize, usize, u8) {
        (self.x() as usize, self.y() as usize, self.n())
    }
}

impl fmt::UpperHex for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
