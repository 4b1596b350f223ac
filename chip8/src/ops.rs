//! Instruction set.
//!
//! Every instruction has the same signature so it can be stored in the
//! dispatch tables. The program counter has already been advanced past the
//! instruction when it runs.
use crate::{
    bytecode::Opcode,
    constants::*,
    vm::{Chip8Vm, SpriteEdge},
};

/// Undefined slot in a dispatch table.
pub(crate) fn nop(_vm: &mut Chip8Vm, _op: Opcode) {
    /* No op */
}

// ----------------------------------------------------------------------------
// Control flow

/// 00E0 (CLS)
///
/// Clear display.
pub(crate) fn cls(vm: &mut Chip8Vm, _op: Opcode) {
    vm.cpu.clear_display();
}

/// 00EE (RET)
///
/// Return from a subroutine.
pub(crate) fn ret(vm: &mut Chip8Vm, _op: Opcode) {
    vm.cpu.pc = vm.cpu.pop();
}

/// 1nnn (JP addr)
pub(crate) fn jp(vm: &mut Chip8Vm, op: Opcode) {
    vm.cpu.pc = op.nnn();
}

/// 2nnn (CALL addr)
///
/// The return address is the instruction following the call.
pub(crate) fn call(vm: &mut Chip8Vm, op: Opcode) {
    let pc = vm.cpu.pc;
    vm.cpu.push(pc);
    vm.cpu.pc = op.nnn();
}

/// 3xnn (SE Vx, byte)
pub(crate) fn se_byte(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, nn) = op.xnn();
    if vm.cpu.registers[vx] == nn {
        vm.cpu.skip();
    }
}

/// 4xnn (SNE Vx, byte)
pub(crate) fn sne_byte(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, nn) = op.xnn();
    if vm.cpu.registers[vx] != nn {
        vm.cpu.skip();
    }
}

/// 5xy0 (SE Vx, Vy)
pub(crate) fn se_reg(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    if vm.cpu.registers[vx] == vm.cpu.registers[vy] {
        vm.cpu.skip();
    }
}

/// 9xy0 (SNE Vx, Vy)
pub(crate) fn sne_reg(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    if vm.cpu.registers[vx] != vm.cpu.registers[vy] {
        vm.cpu.skip();
    }
}

/// Bnnn (JP Vx, addr)
///
/// Jump to `nnn` offset by the register named in the second nibble.
pub(crate) fn jp_offset(vm: &mut Chip8Vm, op: Opcode) {
    let x = vm.cpu.registers[op.x() as usize];
    vm.cpu.pc = op.nnn().wrapping_add(x as Address);
}

// ----------------------------------------------------------------------------
// Registers

/// 6xnn (LD Vx, byte)
pub(crate) fn ld_byte(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, nn) = op.xnn();
    vm.cpu.registers[vx] = nn;
}

/// 7xnn (ADD Vx, byte)
///
/// Carry flag is not set.
pub(crate) fn add_byte(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, nn) = op.xnn();
    vm.cpu.registers[vx] = vm.cpu.registers[vx].wrapping_add(nn);
}

/// 8xy0 (LD Vx, Vy)
pub(crate) fn ld_reg(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    vm.cpu.registers[vx] = vm.cpu.registers[vy];
}

/// 8xy1 (OR Vx, Vy)
pub(crate) fn or(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    vm.cpu.registers[vx] |= vm.cpu.registers[vy];
}

/// 8xy2 (AND Vx, Vy)
pub(crate) fn and(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    vm.cpu.registers[vx] &= vm.cpu.registers[vy];
}

/// 8xy3 (XOR Vx, Vy)
pub(crate) fn xor(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    vm.cpu.registers[vx] ^= vm.cpu.registers[vy];
}

/// 8xy4 (ADD Vx, Vy)
///
/// Overflow is wrapped. If overflowed, set VF to 1, else 0.
pub(crate) fn add_reg(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    let (result, carry) = vm.cpu.registers[vx].overflowing_add(vm.cpu.registers[vy]);
    vm.cpu.set_flag(carry);
    vm.cpu.registers[vx] = result;
}

/// 8xy5 (SUB Vx, Vy)
///
/// VF is set to 1 when Vx is strictly greater than Vy, else 0.
pub(crate) fn sub(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    let no_borrow = vm.cpu.registers[vx] > vm.cpu.registers[vy];
    vm.cpu.set_flag(no_borrow);
    vm.cpu.registers[vx] = vm.cpu.registers[vx].wrapping_sub(vm.cpu.registers[vy]);
}

/// 8xy6 (SHR Vx, Vy)
///
/// Shifts Vy, not Vx. VF receives the bit shifted out.
pub(crate) fn shr(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    vm.cpu.registers[FLAG_REGISTER] = vm.cpu.registers[vy] & 1;
    vm.cpu.registers[vx] = vm.cpu.registers[vy] >> 1;
}

/// 8xy7 (SUBN Vx, Vy)
///
/// VF is set to 1 when Vy is strictly greater than Vx, else 0.
pub(crate) fn subn(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    let no_borrow = vm.cpu.registers[vy] > vm.cpu.registers[vx];
    vm.cpu.set_flag(no_borrow);
    vm.cpu.registers[vx] = vm.cpu.registers[vy].wrapping_sub(vm.cpu.registers[vx]);
}

/// 8xyE (SHL Vx, Vy)
///
/// Shifts Vy, not Vx. VF receives the bit shifted out.
pub(crate) fn shl(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy) = op.xy();
    vm.cpu.registers[FLAG_REGISTER] = (vm.cpu.registers[vy] & 0x80) >> 7;
    vm.cpu.registers[vx] = vm.cpu.registers[vy] << 1;
}

/// Cxnn (RND Vx, byte)
///
/// Set register VX to the result of bitwise AND between a random number and NN.
pub(crate) fn rnd(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, nn) = op.xnn();
    vm.cpu.registers[vx] = vm.rng.next_byte() & nn;
}

// ----------------------------------------------------------------------------
// Display

/// Dxyn (DRW Vx, Vy, nibble)
///
/// Draw sprite to the display buffer, at coordinate as per registers Vx and Vy.
/// Sprite is encoded as 8 pixels wide, N pixels high, stored in bits located in
/// memory pointed to by address register I.
///
/// The start coordinate always wraps. Pixels that fall past the right or
/// bottom edge are clipped or wrapped according to [`SpriteEdge`].
///
/// If the drawing operation erases existing pixels in the display buffer, register VF is set to
/// 1, and set to 0 if no display bits are unset. This is used for collision detection.
pub(crate) fn drw(vm: &mut Chip8Vm, op: Opcode) {
    let (vx, vy, n) = op.xyn();
    let x = vm.cpu.registers[vx] as usize % DISPLAY_WIDTH;
    let y = vm.cpu.registers[vy] as usize % DISPLAY_HEIGHT;
    let edge = vm.conf.sprite_edge;
    let cpu = &mut vm.cpu;

    cpu.set_flag(false);
    let mut is_erased = false;

    for r in 0..n as usize {
        let row = cpu.read(cpu.address as usize + r);

        // Each row is 8 bits representing the 8 pixels of the sprite.
        for c in 0..8 {
            if row & (0x80 >> c) == 0 {
                continue;
            }

            let (px, py) = match edge {
                SpriteEdge::Clip if x + c >= DISPLAY_WIDTH || y + r >= DISPLAY_HEIGHT => continue,
                SpriteEdge::Clip => (x + c, y + r),
                SpriteEdge::Wrap => ((x + c) % DISPLAY_WIDTH, (y + r) % DISPLAY_HEIGHT),
            };

            let pixel = &mut cpu.display[px + py * DISPLAY_WIDTH];

            // XOR erases a pixel when both the old and new values are both 1.
            is_erased |= *pixel == PIXEL_ON;
            *pixel ^= PIXEL_ON;
        }
    }

    if is_erased {
        cpu.set_flag(true);
    }
}

// ----------------------------------------------------------------------------
// Keyboard

/// Ex9E (SKP Vx)
pub(crate) fn skp(vm: &mut Chip8Vm, op: Opcode) {
    let key = vm.cpu.registers[op.x() as usize];
    if vm.cpu.key_state(key) {
        vm.cpu.skip();
    }
}

/// ExA1 (SKNP Vx)
pub(crate) fn sknp(vm: &mut Chip8Vm, op: Opcode) {
    let key = vm.cpu.registers[op.x() as usize];
    if !vm.cpu.key_state(key) {
        vm.cpu.skip();
    }
}

/// Fx0A (LD Vx, K)
///
/// Wait for a key press, store the value of the key in Vx.
///
/// The machine stalls by rewinding the program counter, so the instruction
/// is executed again on the next cycle. Timers keep counting down while waiting.
pub(crate) fn ld_key(vm: &mut Chip8Vm, op: Opcode) {
    match vm.cpu.first_key() {
        Some(key) => {
            vm.cpu.registers[op.x() as usize] = key.as_u8();
            vm.cpu.key_wait = false;
        }
        None => {
            vm.cpu.pc = vm.cpu.pc.wrapping_sub(2);
            vm.cpu.key_wait = true;
        }
    }
}

// ----------------------------------------------------------------------------
// Timers

/// Fx07 (LD Vx, DT)
pub(crate) fn ld_get_dt(vm: &mut Chip8Vm, op: Opcode) {
    vm.cpu.registers[op.x() as usize] = vm.cpu.delay_timer;
}

/// Fx15 (LD DT, Vx)
pub(crate) fn ld_set_dt(vm: &mut Chip8Vm, op: Opcode) {
    vm.cpu.delay_timer = vm.cpu.registers[op.x() as usize];
}

/// Fx18 (LD ST, Vx)
pub(crate) fn ld_set_st(vm: &mut Chip8Vm, op: Opcode) {
    vm.cpu.sound_timer = vm.cpu.registers[op.x() as usize];
}

// ----------------------------------------------------------------------------
// Memory

/// Annn (LD I, addr)
pub(crate) fn ld_i(vm: &mut Chip8Vm, op: Opcode) {
    vm.cpu.address = op.nnn();
}

/// Fx1E (ADD I, Vx)
///
/// No overflow flag.
pub(crate) fn add_i(vm: &mut Chip8Vm, op: Opcode) {
    let x = vm.cpu.registers[op.x() as usize] as Address;
    vm.cpu.address = vm.cpu.address.wrapping_add(x);
}

/// Fx29 (LD F, Vx)
///
/// Set I = location of the font glyph for digit Vx.
pub(crate) fn ld_font(vm: &mut Chip8Vm, op: Opcode) {
    let digit = vm.cpu.registers[op.x() as usize] as Address;
    vm.cpu.address = FONTSET_START + digit * FONTSET_HEIGHT as Address;
}

/// Fx33 (LD B, Vx)
///
/// Store the binary-coded decimal representation of Vx
/// in the memory locations I, I+1, and I+2.
#[rustfmt::skip]
pub(crate) fn ld_bcd(vm: &mut Chip8Vm, op: Opcode) {
    let addr = vm.cpu.address as usize;
    let x = vm.cpu.registers[op.x() as usize];
    vm.cpu.write(addr,     x / 100 % 10);
    vm.cpu.write(addr + 1, x / 10  % 10);
    vm.cpu.write(addr + 2, x       % 10);
}

/// Fx55 (LD [I], Vx)
///
/// Store registers V0 through Vx in memory starting at location I.
pub(crate) fn ld_store(vm: &mut Chip8Vm, op: Opcode) {
    let addr = vm.cpu.address as usize;
    for v in 0..=op.x() as usize {
        let x = vm.cpu.registers[v];
        vm.cpu.write(addr + v, x);
    }
}

/// Fx65 (LD Vx, [I])
///
/// Read registers V0 through Vx from memory starting at location I.
pub(crate) fn ld_load(vm: &mut Chip8Vm, op: Opcode) {
    let addr = vm.cpu.address as usize;
    for v in 0..=op.x() as usize {
        vm.cpu.registers[v] = vm.cpu.read(addr + v);
    }
}
