//! `Br` and `Switch` emitters (`§4.C`, "Branch", "Switch").

use crate::consts::{ACC_OFFSET, JUMPTABLE_MAX_CASES};
use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::fixup::FixupTable;
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::ValueClass;

use super::classify;

/// Unconditional branches have no condition operand; conditional ones carry
/// it in `args[0]`.
pub fn emit_br<U: ValueTable>(
    text: &mut TextBuffer,
    fx: &mut FixupTable,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    if ops.args.is_empty() {
        let pos = text.emit_op(Opcode::B, &[0])?;
        fx.add_site(pos + 2, ops.targets[0]);
        return Ok(());
    }

    let (class, reg) = classify(vt, ops.args[0]);
    match class {
        ValueClass::RegFrame => {
            // `Bcond` carries one displacement slot (the true target); the
            // false arm is plain fallthrough to the next instruction, so
            // `targets[1]` (the false block) only matters for the caller's
            // block ordering, not for anything emitted here.
            let pos = text.emit_op(Opcode::Bcond, &[reg, 0])?;
            fx.add_site(pos + 2 + 1 * 2, ops.targets[0]);
            Ok(())
        }
        c if c.is_constant_like() => {
            // Resolved statically: emit an unconditional `B` to whichever
            // target the constant selects.
            let truthy = vt.value_const64(ops.args[0]) != 0;
            let target = if truthy { ops.targets[0] } else { ops.targets[1] };
            let pos = text.emit_op(Opcode::B, &[0])?;
            fx.add_site(pos + 2, target);
            Ok(())
        }
        _ => Err(EmitError::UnsupportedShape {
            class: "Br",
            detail: format!("condition operand class {class:?}"),
        }),
    }
}

/// `Jumptable`'s table is sized to the next power of two at or above the
/// case count and indexed by `key & (n - 1)` — masked, not bounds-checked,
/// and with no separate default slot: every one of the `n` entries starts
/// out pointing at the default block, and listed cases overwrite their own
/// masked slot. This mirrors `vmir_vm.c`'s `emit_switch` (`table[i] =
/// ii->defblock` for the whole table, then `table[path.v64 & mask] =
/// path.block` per case). Correct dispatch relies on the case keys staying
/// pairwise distinct under the mask, which a contiguous run of at most `n`
/// keys always satisfies; a sparse case set still needs the binary-search
/// form instead.
fn is_contiguous(keys: &[i64]) -> bool {
    if keys.is_empty() {
        return true;
    }
    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

fn switch_int_pair_widths(width: u8) -> Option<Opcode> {
    match width {
        8 => Some(Opcode::Switch8Bs),
        32 => Some(Opcode::Switch32Bs),
        64 => Some(Opcode::Switch64Bs),
        _ => None,
    }
}

/// `targets[0]` is the default; `targets[1..]` are case blocks parallel to
/// `case_keys`. i16 selectors have no dedicated binary-search width, so
/// they're widened into the accumulator with `Zext16_32` and switched on
/// the 32-bit form, the same way the emitter widens any selector the
/// opcode set doesn't have a native width for.
pub fn emit_switch<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    fx: &mut FixupTable,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let (class, mut idx_reg) = classify(vt, ops.args[0]);
    if class != ValueClass::RegFrame {
        return Err(EmitError::UnsupportedShape {
            class: "Switch",
            detail: format!("selector operand class {class:?}"),
        });
    }

    let mut width = super::int_width(ops.ty);
    if width == 16 {
        text.emit_op(Opcode::Zext16_32, &[ACC_OFFSET, idx_reg])?;
        idx_reg = ACC_OFFSET;
        width = 32;
    }

    let n = ops.case_keys.len();
    if n <= JUMPTABLE_MAX_CASES && is_contiguous(&ops.case_keys) {
        return emit_jumptable(text, fx, ops, idx_reg);
    }

    let op = switch_int_pair_widths(width).ok_or(EmitError::UnsupportedShape {
        class: "Switch",
        detail: format!("no binary-search opcode for width {width}"),
    })?;

    let pos = text.emit_op(op, &[idx_reg, n as i16])?;
    let default_slot = pos + 2 + 2 * 2;
    text.append_i16(0)?;
    fx.add_site(default_slot, ops.targets[0]);

    text.align4()?;
    let key_width_bytes = if width == 64 { 8 } else { 4 };
    let mut pairs: Vec<(i64, u32)> = ops.case_keys.iter().copied().zip(ops.targets[1..].iter().copied()).collect();
    pairs.sort_by_key(|(k, _)| *k);

    let mut key_positions = Vec::with_capacity(n);
    for (key, _) in &pairs {
        let p = if key_width_bytes == 8 {
            text.append_u64(*key as u64)?
        } else {
            text.append_u32(*key as u32)?
        };
        key_positions.push(p);
    }
    let _ = key_positions;

    for (_, target) in &pairs {
        let slot = text.append_i16(0)?;
        fx.add_site(slot, *target);
    }
    Ok(())
}

/// Small-universe dispatch: `table[key & (n - 1)]` over a dense array of
/// `n = next_power_of_two(case count)` displacements. The table is built
/// default-filled, then each listed case overwrites its own masked slot;
/// nothing else gets a dedicated default entry, so an out-of-range key
/// aliases whatever real case shares its low bits rather than falling
/// through — the same trade the original's masked table makes.
fn emit_jumptable(
    text: &mut TextBuffer,
    fx: &mut FixupTable,
    ops: &InstrOperands,
    idx_reg: i16,
) -> Result<(), EmitError> {
    let n = ops.case_keys.len().max(1).next_power_of_two();
    let mask = n as i64 - 1;

    text.emit_op(Opcode::Jumptable, &[idx_reg, n as i16])?;

    let mut table = vec![ops.targets[0]; n];
    for (&key, &target) in ops.case_keys.iter().zip(ops.targets[1..].iter()) {
        table[(key & mask) as usize] = target;
    }
    for target in table {
        let slot = text.append_i16(0)?;
        fx.add_site(slot, target);
    }
    Ok(())
}
