//! Disassembler.
//!
//! Decoding follows the same nibble rules as the dispatch tables, so the
//! listing shows what the machine will actually execute. For example `0x0120`
//! is listed as `CLS`, and opcodes that land in an empty slot are listed as
//! their raw value.
use std::fmt::{self, Write as FmtWrite};

use crate::{bytecode::Opcode, constants::MEM_START};

/// Display adapter rendering an opcode as assembly.
pub struct Mnemonic(pub Opcode);

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = self.0;
        let (x, y, n, nn, nnn) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());

        match op.family() {
            0x0 => match n {
                0x0 => write!(f, "CLS"),
                0xE => write!(f, "RET"),
                _ => write!(f, "0x{op:04X}"),
            },
            0x1 => write!(f, "JP 0x{nnn:03X}"),
            0x2 => write!(f, "CALL 0x{nnn:03X}"),
            0x3 => write!(f, "SE v{x:X}, {nn}"),
            0x4 => write!(f, "SNE v{x:X}, {nn}"),
            0x5 => write!(f, "SE v{x:X}, v{y:X}"),
            0x6 => write!(f, "LD v{x:X}, {nn}"),
            0x7 => write!(f, "ADD v{x:X}, {nn}"),
            0x8 => match n {
                0x0 => write!(f, "LD v{x:X}, v{y:X}"),
                0x1 => write!(f, "OR v{x:X}, v{y:X}"),
                0x2 => write!(f, "AND v{x:X}, v{y:X}"),
                0x3 => write!(f, "XOR v{x:X}, v{y:X}"),
                0x4 => write!(f, "ADD v{x:X}, v{y:X}"),
                0x5 => write!(f, "SUB v{x:X}, v{y:X}"),
                0x6 => write!(f, "SHR v{x:X}, v{y:X}"),
                0x7 => write!(f, "SUBN v{x:X}, v{y:X}"),
                0xE => write!(f, "SHL v{x:X}, v{y:X}"),
                _ => write!(f, "0x{op:04X}"),
            },
            0x9 => write!(f, "SNE v{x:X}, v{y:X}"),
            0xA => write!(f, "LD I, 0x{nnn:03X}"),
            0xB => write!(f, "JP v{x:X}, 0x{nnn:03X}"),
            0xC => write!(f, "RND v{x:X}, {nn}"),
            0xD => write!(f, "DRW v{x:X}, v{y:X}, {n}"),
            0xE => match n {
                0xE => write!(f, "SKP v{x:X}"),
                0x1 => write!(f, "SKNP v{x:X}"),
                _ => write!(f, "0x{op:04X}"),
            },
            _ => match nn {
                0x07 => write!(f, "LD v{x:X}, DT"),
                0x0A => write!(f, "LD v{x:X}, K"),
                0x15 => write!(f, "LD DT, v{x:X}"),
                0x18 => write!(f, "LD ST, v{x:X}"),
                0x1E => write!(f, "ADD I, v{x:X}"),
                0x29 => write!(f, "LD F, v{x:X}"),
                0x33 => write!(f, "LD B, v{x:X}"),
                0x55 => write!(f, "LD [I], v{x:X}"),
                0x65 => write!(f, "LD v{x:X}, [I]"),
                _ => write!(f, "0x{op:04X}"),
            },
        }
    }
}

pub struct Disassembler<'a> {
    bytecode: &'a [u8],
}

impl<'a> Disassembler<'a> {
    pub fn new(bytecode: &'a [u8]) -> Self {
        Self { bytecode }
    }

    /// Write the whole program to the given writer, one instruction per line,
    /// addressed as it would be laid out in VM memory.
    ///
    /// A trailing odd byte is written as data.
    pub fn disassemble<W: FmtWrite>(&self, w: &mut W) -> fmt::Result {
        for (i, instr) in self.bytecode.chunks(2).enumerate() {
            let addr = MEM_START + i * 2;
            match *instr {
                [a, b] => {
                    let op = Opcode::from_bytes(a, b);
                    writeln!(w, "0x{addr:04X} {op:04X} {}", Mnemonic(op))?;
                }
                [a] => writeln!(w, "0x{addr:04X} {a:02X}   0b{a:08b}")?,
                _ => {}
            }
        }

        Ok(())
    }

    pub fn to_listing(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();
        self.disassemble(&mut buf)?;
        Ok(buf)
    }
}
