//! Virtual machine.
use std::{
    fmt::{self, Write},
    fs,
    path::Path,
};

use log::{debug, log_enabled, trace, Level};

use crate::{
    constants::*,
    cpu::Chip8Cpu,
    devices::KeyCode,
    disasm::Mnemonic,
    dispatch,
    error::{Chip8Error, Chip8Result},
    random::RandomByte,
};

/// Read-only view of the display buffer, row-major, one `u32` colour per pixel.
pub type Chip8DisplayBuffer<'a> = &'a [u32; DISPLAY_BUFFER_SIZE];

pub struct Chip8Vm {
    pub(crate) cpu: Chip8Cpu,
    pub(crate) rng: RandomByte,
    pub(crate) conf: Chip8Conf,
}

/// What happens to sprite pixels drawn past the right or bottom edge of the display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEdge {
    /// Pixels outside the display are discarded.
    #[default]
    Clip,
    /// Pixels continue on the opposite side of the display.
    Wrap,
}

/// VM Configuration Parameters.
#[derive(Debug, Default, Clone)]
pub struct Chip8Conf {
    /// Seed for the random number instruction. Entropy is used when `None`.
    pub seed: Option<u64>,
    pub sprite_edge: SpriteEdge,
}

impl Chip8Vm {
    pub fn new(conf: Chip8Conf) -> Self {
        Chip8Vm {
            cpu: Chip8Cpu::new(),
            rng: RandomByte::new(conf.seed),
            conf,
        }
    }

    /// Configuration that was used to instantiate the VM.
    pub fn config(&self) -> &Chip8Conf {
        &self.conf
    }

    /// Restore the power-on state.
    ///
    /// Memory, registers, stack, timers, keypad and display are cleared and the
    /// font is reloaded. The random number generator carries on from where it was.
    pub fn reset(&mut self) {
        debug!("reset");
        self.cpu = Chip8Cpu::new();
    }

    /// Copy a program into memory at `MEM_START`.
    ///
    /// The rest of the machine state is left as is. Programs that do not fit
    /// are rejected without touching memory.
    pub fn load_bytecode(&mut self, bytecode: &[u8]) -> Chip8Result<()> {
        if !check_program_size(bytecode) {
            return Err(Chip8Error::LargeProgram {
                size: bytecode.len(),
            });
        }

        self.cpu.ram[MEM_START..MEM_START + bytecode.len()].copy_from_slice(bytecode);
        debug!("loaded {} byte program at {MEM_START:#05X}", bytecode.len());

        Ok(())
    }

    /// Read a ROM file and copy it into memory at `MEM_START`.
    ///
    /// When the file can't be read, the error is returned and memory is left untouched.
    pub fn load_rom(&mut self, filepath: impl AsRef<Path>) -> Chip8Result<()> {
        let filepath = filepath.as_ref();
        let bytecode = fs::read(filepath)?;
        debug!("read ROM {}", filepath.display());
        self.load_bytecode(&bytecode)
    }
}

/// Interpreter
impl Chip8Vm {
    /// Execute a single instruction.
    ///
    /// Fetches the instruction at the program counter, advances the counter,
    /// executes the instruction and then counts down both timers.
    pub fn cycle(&mut self) {
        let op = self.cpu.instr();

        if log_enabled!(Level::Trace) {
            trace!("{:04X}: {:04X} {}", self.cpu.pc, op, Mnemonic(op));
        }

        self.cpu.pc = self.cpu.pc.wrapping_add(2);
        dispatch::execute(self, op);
        self.cpu.tick_timers();
    }

    /// Execute the given number of cycles.
    pub fn run_steps(&mut self, step_count: usize) {
        for _ in 0..step_count {
            self.cycle();
        }
    }

    /// Sets the keyboard key input state.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        self.cpu.set_key_state(key.as_u8(), pressed);
    }

    /// Clear the keyboard input state, setting all keys to up.
    pub fn clear_keys(&mut self) {
        self.cpu.clear_keys()
    }

    /// Keyboard state, indexed by key value.
    pub fn keypad(&self) -> &[bool; KEY_COUNT as usize] {
        &self.cpu.keypad
    }

    /// Mutable keyboard state for the host's input handling.
    pub fn keypad_mut(&mut self) -> &mut [bool; KEY_COUNT as usize] {
        &mut self.cpu.keypad
    }

    /// The machine is stalled on `Fx0A (LD Vx, K)` until a key is pressed.
    pub fn is_waiting_for_key(&self) -> bool {
        self.cpu.key_wait
    }

    pub fn display_buffer(&self) -> Chip8DisplayBuffer {
        &self.cpu.display
    }

    pub fn delay_timer(&self) -> u8 {
        self.cpu.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.cpu.sound_timer
    }

    /// The buzzer should sound while the sound timer counts down.
    pub fn is_sound_active(&self) -> bool {
        self.cpu.sound_timer > 0
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.cpu.registers
    }

    /// Index register (I).
    pub fn address(&self) -> Address {
        self.cpu.address
    }

    pub fn pc(&self) -> Address {
        self.cpu.pc
    }

    pub fn sp(&self) -> u8 {
        self.cpu.sp
    }

    pub fn ram(&self) -> &[u8; MEM_SIZE] {
        &self.cpu.ram
    }
}

fn check_program_size(bytecode: &[u8]) -> bool {
    bytecode.len() <= MAX_PROGRAM_SIZE
}

/// Troubleshooting
impl Chip8Vm {
    /// Returns the program words in memory as a human readable string.
    pub fn dump_ram(&self, count: usize) -> Result<String, fmt::Error> {
        let iter = self
            .cpu
            .ram
            .iter()
            .enumerate()
            .skip(MEM_START)
            .take(count)
            .step_by(2);
        let mut buf = String::new();

        for (i, op) in iter {
            writeln!(buf, "{:04X}: {:02X}{:02X}", i, op, self.cpu.read(i + 1))?;
        }

        Ok(buf)
    }

    pub fn dump_display(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();

        for row in self.cpu.display.chunks(DISPLAY_WIDTH) {
            for px in row {
                if *px == PIXEL_ON {
                    write!(buf, "#")?;
                } else {
                    write!(buf, ".")?;
                }
            }
            writeln!(buf)?;
        }

        Ok(buf)
    }

    pub fn dump_keys(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();

        if self.cpu.any_key() {
            write!(buf, "keys:")?;
            for key in KeyCode::ALL {
                if self.cpu.key_state(key.as_u8()) {
                    write!(buf, " {key}")?;
                }
            }
        }

        Ok(buf)
    }
}
