//! Call-frame driver (`§4.E`).
//!
//! The single public entry point into a [`crate::unit::Unit`]: marshal
//! arguments into a fresh frame at the base of the register-frame stack,
//! enter dispatch, and translate whatever [`crate::exec`] returns into a
//! result the host can inspect. A top-level call always starts at `rf = 0`
//! — there is no caller frame above it to chain from, unlike a nested
//! `JSR_*`.

use crate::consts::ACC_OFFSET;
use crate::exec;
use crate::stop::StopReason;
use crate::unit::Unit;

/// Invoke function `func` with `args` (each a 32-bit register-width value)
/// and return the callee's accumulator contents as a raw 64-bit pattern —
/// callers that know the function returns an `i32`/`f32` truncate or
/// reinterpret the low 32 bits themselves; this plays the role the
/// original's `out_ptr` parameter does, as a plain return value instead of
/// an out-parameter, since Rust has no need for the latter.
///
/// Arguments are written into the argument area directly above the frame
/// base at *descending* addresses — the first argument ends up at the
/// highest address, the last at the lowest — matching the order host
/// bindings pop them in via `JSR_EXT`.
///
/// The alloca pointer is always restored to its value from before the
/// call, whether the call returns normally or via a [`StopReason`]: allocas
/// live only for the dynamic extent of one top-level call.
pub fn call(unit: &mut Unit, func: u32, args: &[u32]) -> Result<u64, StopReason> {
    const RF: usize = 0;
    // First byte free for general use: past the reserved slots and the
    // 8-byte accumulator both functions and tests address registers from.
    const ARG_BASE: i16 = ACC_OFFSET + 8;

    let arg_area_size = args.len() * 4;
    for (i, &v) in args.iter().enumerate() {
        let offset = ARG_BASE + (arg_area_size - (i + 1) * 4) as i16;
        unit.frames.write_u32(RF, offset, v);
    }

    let saved_alloca = unit.memory.alloca_ptr();
    let result = exec::call_function(unit, func, RF);
    unit.memory.stack_restore(saved_alloca);

    result.map(|()| unit.frames.read_u64(RF, ACC_OFFSET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::opcode::Opcode;
    use crate::text::TextBuffer;

    fn push(unit: &mut Unit, frame_size: u32, arg_area_size: u32, build: impl FnOnce(&mut TextBuffer)) -> u32 {
        let mut t = TextBuffer::new();
        build(&mut t);
        unit.push_function(Function {
            name: "f".into(),
            index: 0,
            text: t.to_rc(),
            frame_size,
            arg_area_size,
        })
    }

    #[test]
    fn single_argument_round_trips_through_acc() {
        let mut unit = Unit::new();
        // frame: [reserved 0..8][ACC 8..16][arg0 16..20]
        let idx = push(&mut unit, 20, 4, |t| {
            t.emit_op(Opcode::RetR32, &[16]).unwrap();
        });
        let result = call(&mut unit, idx, &[42]).unwrap();
        assert_eq!(result as u32, 42);
    }

    #[test]
    fn two_arguments_land_at_descending_addresses() {
        let mut unit = Unit::new();
        // arg area is 8 bytes above the reserved+ACC region: arg0 at the
        // higher address (20), arg1 at the lower one (16).
        let idx = push(&mut unit, 24, 8, |t| {
            t.emit_op(Opcode::Sub32, &[16, 20, 16]).unwrap();
            t.emit_op(Opcode::RetR32, &[16]).unwrap();
        });
        let result = call(&mut unit, idx, &[10, 3]).unwrap();
        assert_eq!(result as u32, 7);
    }

    #[test]
    fn alloca_pointer_is_restored_after_call() {
        let mut unit = Unit::new();
        let idx = push(&mut unit, 16, 0, |t| {
            t.emit_op_imm32(Opcode::Alloca, &[8], 4).unwrap();
            t.append_u32(4).unwrap();
            t.emit_op(Opcode::RetVoid, &[]).unwrap();
        });
        let before = unit.memory.alloca_ptr();
        call(&mut unit, idx, &[]).unwrap();
        assert_eq!(unit.memory.alloca_ptr(), before);
    }

    #[test]
    fn stop_reason_propagates_and_still_restores_alloca() {
        let mut unit = Unit::new();
        let idx = push(&mut unit, 16, 0, |t| {
            t.emit_op_imm32(Opcode::Alloca, &[8], 4).unwrap();
            t.append_u32(4).unwrap();
            t.emit_op(Opcode::Unreachable, &[]).unwrap();
        });
        let before = unit.memory.alloca_ptr();
        let err = call(&mut unit, idx, &[]).unwrap_err();
        assert!(matches!(err, StopReason::Unreachable));
        assert_eq!(unit.memory.alloca_ptr(), before);
    }
}
