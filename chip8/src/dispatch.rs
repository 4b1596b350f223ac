//! Opcode dispatch tables.
//!
//! The most significant nibble selects one of 16 entries in [`TABLE`].
//! Families `0x0`, `0x8` and `0xE` are resolved a second time on the least
//! significant nibble, and family `0xF` on the least significant byte.
//!
//! Every slot is filled. Slots without an instruction hold [`ops::nop`], so an
//! unknown opcode only costs the program counter advance.
use crate::{bytecode::Opcode, ops, vm::Chip8Vm};

/// Handler for a single decoded instruction.
pub(crate) type Instruction = fn(&mut Chip8Vm, Opcode);

#[rustfmt::skip]
static TABLE: [Instruction; 0x10] = [
    family_0,        // 0x0
    ops::jp,         // 0x1
    ops::call,       // 0x2
    ops::se_byte,    // 0x3
    ops::sne_byte,   // 0x4
    ops::se_reg,     // 0x5
    ops::ld_byte,    // 0x6
    ops::add_byte,   // 0x7
    family_8,        // 0x8
    ops::sne_reg,    // 0x9
    ops::ld_i,       // 0xA
    ops::jp_offset,  // 0xB
    ops::rnd,        // 0xC
    ops::drw,        // 0xD
    family_e,        // 0xE
    family_f,        // 0xF
];

/// `0nnN`, keyed on N.
static TABLE_0: [Instruction; 0x10] = {
    let mut table = [ops::nop as Instruction; 0x10];
    table[0x0] = ops::cls;
    table[0xE] = ops::ret;
    table
};

/// `8xyN`, keyed on N.
static TABLE_8: [Instruction; 0x10] = {
    let mut table = [ops::nop as Instruction; 0x10];
    table[0x0] = ops::ld_reg;
    table[0x1] = ops::or;
    table[0x2] = ops::and;
    table[0x3] = ops::xor;
    table[0x4] = ops::add_reg;
    table[0x5] = ops::sub;
    table[0x6] = ops::shr;
    table[0x7] = ops::subn;
    table[0xE] = ops::shl;
    table
};

/// `ExnN`, keyed on N.
static TABLE_E: [Instruction; 0x10] = {
    let mut table = [ops::nop as Instruction; 0x10];
    table[0x1] = ops::sknp;
    table[0xE] = ops::skp;
    table
};

/// `FxNN`, keyed on NN.
static TABLE_F: [Instruction; 0x100] = {
    let mut table = [ops::nop as Instruction; 0x100];
    table[0x07] = ops::ld_get_dt;
    table[0x0A] = ops::ld_key;
    table[0x15] = ops::ld_set_dt;
    table[0x18] = ops::ld_set_st;
    table[0x1E] = ops::add_i;
    table[0x29] = ops::ld_font;
    table[0x33] = ops::ld_bcd;
    table[0x55] = ops::ld_store;
    table[0x65] = ops::ld_load;
    table
};

/// Execute the instruction the opcode decodes to.
#[inline]
pub(crate) fn execute(vm: &mut Chip8Vm, op: Opcode) {
    TABLE[op.family() as usize](vm, op)
}

fn family_0(vm: &mut Chip8Vm, op: Opcode) {
    TABLE_0[op.n() as usize](vm, op)
}

fn family_8(vm: &mut Chip8Vm, op: Opcode) {
    TABLE_8[op.n() as usize](vm, op)
}

fn family_e(vm: &mut Chip8Vm, op: Opcode) {
    TABLE_E[op.n() as usize](vm, op)
}

fn family_f(vm: &mut Chip8Vm, op: Opcode) {
    TABLE_F[op.nn() as usize](vm, op)
}
