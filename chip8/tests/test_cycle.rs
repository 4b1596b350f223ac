use chip8::{constants::*, prelude::*};

fn vm_with(program: &[u8]) -> Chip8Vm {
    let mut vm = Chip8Vm::new(Chip8Conf {
        seed: Some(0xC8),
        ..Default::default()
    });
    vm.load_bytecode(program).unwrap();
    vm
}

fn lit_pixels(vm: &Chip8Vm) -> usize {
    vm.display_buffer()
        .iter()
        .filter(|px| **px == PIXEL_ON)
        .count()
}

#[test]
#[rustfmt::skip]
fn test_add_program() {
    let mut vm = vm_with(&[
        0x6A, 0x05, // LD vA, 5
        0x6B, 0x03, // LD vB, 3
        0x8A, 0xB4, // ADD vA, vB
    ]);
    vm.run_steps(3);

    assert_eq!(vm.registers()[0xA], 8);
    assert_eq!(vm.registers()[0xF], 0);
    assert_eq!(vm.pc(), 0x206);
}

#[test]
fn test_load_index_touches_nothing_else() {
    let mut vm = vm_with(&[0xA2, 0xF0]);
    let ram = vm.ram().to_vec();
    let display = vm.display_buffer().to_vec();

    vm.cycle();

    assert_eq!(vm.address(), 0x2F0);
    assert_eq!(vm.pc(), 0x202);
    assert_eq!(vm.sp(), 0);
    assert_eq!(vm.registers(), &[0; REGISTER_COUNT]);
    assert_eq!(vm.ram().to_vec(), ram);
    assert_eq!(vm.display_buffer().to_vec(), display);
    assert_eq!(vm.delay_timer(), 0);
    assert_eq!(vm.sound_timer(), 0);
}

#[test]
#[rustfmt::skip]
fn test_clear_screen() {
    let mut vm = vm_with(&[
        0xA0, 0x50, // LD I, 0x050  ; glyph 0
        0xD0, 0x05, // DRW v0, v0, 5
        0x00, 0xE0, // CLS
    ]);
    vm.run_steps(2);
    assert!(lit_pixels(&vm) > 0);

    vm.cycle();
    assert_eq!(lit_pixels(&vm), 0);
    assert!(vm.display_buffer().iter().all(|px| *px == PIXEL_OFF));
    assert_eq!(vm.pc(), 0x206);
}

#[test]
#[rustfmt::skip]
fn test_draw_glyph_and_collide() {
    let mut vm = vm_with(&[
        0xA0, 0x50, // LD I, 0x050  ; glyph 0
        0xD0, 0x05, // DRW v0, v0, 5
        0xD0, 0x05, // DRW v0, v0, 5
    ]);
    vm.run_steps(2);

    // 0xF0 0x90 0x90 0x90 0xF0
    let expected = [
        "####....",
        "#..#....",
        "#..#....",
        "#..#....",
        "####....",
    ];
    let dump = vm.dump_display().unwrap();
    for (line, row) in dump.lines().zip(expected) {
        assert_eq!(&line[..8], row);
    }
    assert_eq!(lit_pixels(&vm), 14);
    assert_eq!(vm.registers()[0xF], 0);

    // Redrawing at the same position erases the glyph.
    vm.cycle();
    assert_eq!(vm.registers()[0xF], 1);
    assert_eq!(lit_pixels(&vm), 0);
}

#[test]
#[rustfmt::skip]
fn test_bcd() {
    let mut vm = vm_with(&[
        0x63, 0x9D, // LD v3, 157
        0xA3, 0x00, // LD I, 0x300
        0xF3, 0x33, // LD B, v3
    ]);
    vm.run_steps(3);

    assert_eq!(vm.ram()[0x300..0x303], [1, 5, 7]);
}

#[test]
#[rustfmt::skip]
fn test_register_dump_load_round_trip() {
    let mut vm = vm_with(&[
        0x60, 0x11, // LD v0, 0x11
        0x61, 0x22, // LD v1, 0x22
        0x62, 0x33, // LD v2, 0x33
        0xA4, 0x00, // LD I, 0x400
        0xF2, 0x55, // LD [I], v2
        0x60, 0x00, // LD v0, 0
        0x61, 0xFF, // LD v1, 0xFF
        0x72, 0x01, // ADD v2, 1
        0xF2, 0x65, // LD v2, [I]
    ]);
    vm.run_steps(9);

    assert_eq!(vm.registers()[..3], [0x11, 0x22, 0x33]);
    assert_eq!(vm.address(), 0x400);
}

#[test]
#[rustfmt::skip]
fn test_subroutine() {
    let mut vm = vm_with(&[
        0x22, 0x06, // CALL 0x206
        0x61, 0x01, // LD v1, 1
        0x12, 0x04, // JP 0x204  ; spin
        0x60, 0x07, // LD v0, 7
        0x00, 0xEE, // RET
    ]);

    vm.cycle();
    assert_eq!(vm.pc(), 0x206);
    assert_eq!(vm.sp(), 1);
    vm.run_steps(2);
    assert_eq!(vm.pc(), 0x202);
    assert_eq!(vm.sp(), 0);
    vm.run_steps(3);
    assert_eq!(vm.registers()[..2], [7, 1]);
    assert_eq!(vm.pc(), 0x204);
}

#[test]
#[rustfmt::skip]
fn test_skips() {
    let mut vm = vm_with(&[
        0x60, 0x05, // LD v0, 5
        0x30, 0x05, // SE v0, 5
        0x61, 0xFF, // LD v1, 0xFF  ; skipped
        0x40, 0x05, // SNE v0, 5
        0x62, 0x01, // LD v2, 1
    ]);
    vm.run_steps(4);

    assert_eq!(vm.registers()[1], 0);
    assert_eq!(vm.registers()[2], 1);
    assert_eq!(vm.pc(), 0x20A);
}

#[test]
fn test_unknown_opcodes_only_advance() {
    let mut vm = vm_with(&[0x81, 0x2F, 0xE1, 0x00, 0xF1, 0xFF, 0x00, 0x01]);
    let registers = *vm.registers();

    vm.run_steps(4);

    assert_eq!(vm.pc(), 0x208);
    assert_eq!(vm.registers(), &registers);
    assert_eq!(lit_pixels(&vm), 0);
}

#[test]
#[rustfmt::skip]
fn test_wait_for_key() {
    let mut vm = vm_with(&[
        0x60, 0x08, // LD v0, 8
        0xF0, 0x15, // LD DT, v0
        0xF5, 0x0A, // LD v5, K
    ]);
    vm.run_steps(2);
    assert_eq!(vm.delay_timer(), 7);

    vm.run_steps(3);
    assert_eq!(vm.pc(), 0x204);
    assert!(vm.is_waiting_for_key());
    assert_eq!(vm.delay_timer(), 4);

    vm.set_key(KeyCode::KeyB, true);
    vm.cycle();
    assert_eq!(vm.registers()[5], 0xB);
    assert_eq!(vm.pc(), 0x206);
}

#[test]
fn test_seeded_runs_repeat() {
    // RND v0, 0xFF
    let program = [0xC0, 0xFF];
    let mut a = vm_with(&program);
    let mut b = vm_with(&program);
    a.cycle();
    b.cycle();
    assert_eq!(a.registers()[0], b.registers()[0]);
}
