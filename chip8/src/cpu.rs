//! CPU and memory state.
use crate::{bytecode::Opcode, constants::*, devices::KeyCode};

/// Core state for a chip8 interpreter.
pub(crate) struct Chip8Cpu {
    // ------------------------------------------------------------------------
    // Registers
    /// Program counter pointing to the next instruction in memory.
    pub(crate) pc: Address,
    /// Stack pointer, indicating the next free slot on the stack.
    pub(crate) sp: u8,
    /// General purpose registers for temporary values.
    ///
    /// Register 16 (VF) is used for either the carry flag, borrow switch or
    /// sprite collision depending on opcode.
    pub(crate) registers: [u8; REGISTER_COUNT],
    /// Index register (I) used for temporarily storing an address.
    pub(crate) address: Address,
    /// (DT) Delay timer that counts down to 0.
    pub(crate) delay_timer: u8,
    /// (ST) Sound timer that counts down to 0. When it has a non-zero value, a beep is played.
    pub(crate) sound_timer: u8,
    /// Indicates that the machine is stalled on `Fx0A (LD Vx, K)`.
    pub(crate) key_wait: bool,
    /// Keyboard input state, indexed by key value.
    pub(crate) keypad: [bool; KEY_COUNT as usize],

    // ------------------------------------------------------------------------
    // Memory
    /// Main memory storage space.
    pub(crate) ram: Box<[u8; MEM_SIZE]>,
    /// Stack of return pointers used for jumping when a routine call finishes.
    pub(crate) stack: [Address; STACK_SIZE],
    /// Screen buffer that is drawn to, row-major.
    pub(crate) display: Box<[u32; DISPLAY_BUFFER_SIZE]>,
}

impl Default for Chip8Cpu {
    fn default() -> Self {
        let mut cpu = Self {
            pc: MEM_START as Address,
            sp: 0,
            registers: [0; REGISTER_COUNT],
            address: 0,
            delay_timer: 0,
            sound_timer: 0,
            key_wait: false,
            keypad: [false; KEY_COUNT as usize],

            ram: Box::new([0; MEM_SIZE]),
            stack: [0; STACK_SIZE],
            display: Box::new([PIXEL_OFF; DISPLAY_BUFFER_SIZE]),
        };
        cpu.load_font();
        cpu
    }
}

impl Chip8Cpu {
    /// Power-on state: zeroed registers, font in memory, program counter at `MEM_START`.
    pub fn new() -> Self {
        Default::default()
    }

    fn load_font(&mut self) {
        let start = FONTSET_START as usize;
        self.ram[start..start + FONTSET_DATA_LENGTH].copy_from_slice(&FONTSET);
    }

    pub fn clear_display(&mut self) {
        self.display.fill(PIXEL_OFF);
    }

    /// Read a byte from memory. The address wraps within the 4KB space.
    #[inline(always)]
    pub fn read(&self, addr: usize) -> u8 {
        self.ram[addr & MEM_MASK]
    }

    /// Write a byte to memory. The address wraps within the 4KB space.
    #[inline(always)]
    pub fn write(&mut self, addr: usize, value: u8) {
        self.ram[addr & MEM_MASK] = value;
    }

    /// Extract the instruction at the current program counter.
    #[inline(always)]
    pub fn instr(&self) -> Opcode {
        let pc = self.pc as usize;
        Opcode::from_bytes(self.read(pc), self.read(pc + 1))
    }

    /// Push a return address. Nesting is not checked; the pointer wraps.
    #[inline]
    pub(crate) fn push(&mut self, addr: Address) {
        self.stack[self.sp as usize & STACK_MASK] = addr;
        self.sp = self.sp.wrapping_add(1);
    }

    /// Pop a return address. Underflow is not checked; the pointer wraps.
    #[inline]
    pub(crate) fn pop(&mut self) -> Address {
        self.sp = self.sp.wrapping_sub(1);
        self.stack[self.sp as usize & STACK_MASK]
    }

    /// Skip over the next instruction.
    #[inline(always)]
    pub(crate) fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    #[inline(always)]
    pub(crate) fn set_flag(&mut self, flag: bool) {
        self.registers[FLAG_REGISTER] = flag as u8;
    }

    pub fn set_key_state(&mut self, key_id: u8, state: bool) {
        if key_id < KEY_COUNT {
            self.keypad[key_id as usize] = state;
        }
    }

    /// Keys outside the keypad range always read as released.
    pub fn key_state(&self, key_id: u8) -> bool {
        self.keypad.get(key_id as usize).copied().unwrap_or(false)
    }

    /// Check whether any key is pressed down.
    #[inline(always)]
    pub fn any_key(&self) -> bool {
        self.keypad.iter().any(|k| *k)
    }

    /// Retrieve the lowest key that is pressed down.
    #[inline]
    pub fn first_key(&self) -> Option<KeyCode> {
        KeyCode::ALL
            .iter()
            .copied()
            .find(|k| self.keypad[k.as_u8() as usize])
    }

    /// Clear the keyboard input state, setting all keys to up.
    #[inline(always)]
    pub fn clear_keys(&mut self) {
        self.keypad.fill(false);
    }

    /// Count down both timers, stopping at zero.
    #[inline]
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}
