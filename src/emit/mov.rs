//! `Move` and `Select` emitters (`§4.C`, "Move", "Select").

use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::ValueClass;

use super::classify;

/// Register-to-register move opcode for a width. The opcode set only has
/// dedicated 8/32/64-bit forms; a 16-bit (or pointer/function, both 32-bit)
/// value rides `Mov32` since every value lives in its own frame slot and a
/// 4-byte copy of one never touches a neighbour's bits.
pub(super) fn reg_move_opcode(width: u8) -> Opcode {
    match width {
        8 => Opcode::Mov8,
        64 => Opcode::Mov64,
        _ => Opcode::Mov32,
    }
}

fn const_move_opcode(width: u8) -> Opcode {
    match width {
        8 => Opcode::Mov8C,
        16 => Opcode::Mov16C,
        64 => Opcode::Mov64C,
        _ => Opcode::Mov32C,
    }
}

pub fn emit_move<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Move without a result"));
    let (class, reg) = classify(vt, ops.args[0]);
    let width = super::int_width(ops.ty);

    match class {
        ValueClass::RegFrame => {
            text.emit_op(reg_move_opcode(width), &[d, reg])?;
        }
        ValueClass::Constant => {
            if width == 64 {
                text.emit_op_imm64(const_move_opcode(64), &[d], vt.value_const64(ops.args[0]))?;
            } else {
                text.emit_op_imm32(const_move_opcode(width), &[d], vt.value_const32(ops.args[0]))?;
            }
        }
        ValueClass::GlobalVar | ValueClass::Function => {
            text.emit_op_imm32(Opcode::Mov32C, &[d], vt.value_global_addr(ops.args[0]))?;
        }
    }
    Ok(())
}

struct SelectOpcodes {
    rr: Opcode,
    rc: Opcode,
    cr: Opcode,
    cc: Opcode,
}

fn select_opcodes(width: u8) -> Result<SelectOpcodes, EmitError> {
    Ok(match width {
        8 => SelectOpcodes { rr: Opcode::Select8Rr, rc: Opcode::Select8Rc, cr: Opcode::Select8Cr, cc: Opcode::Select8Cc },
        16 => SelectOpcodes { rr: Opcode::Select16Rr, rc: Opcode::Select16Rc, cr: Opcode::Select16Cr, cc: Opcode::Select16Cc },
        32 => SelectOpcodes { rr: Opcode::Select32Rr, rc: Opcode::Select32Rc, cr: Opcode::Select32Cr, cc: Opcode::Select32Cc },
        64 => SelectOpcodes { rr: Opcode::Select64Rr, rc: Opcode::Select64Rc, cr: Opcode::Select64Cr, cc: Opcode::Select64Cc },
        other => return Err(EmitError::UnsupportedShape { class: "Select", detail: format!("width {other}") }),
    })
}

/// `args = [cond, true_val, false_val]`. The condition is always read as a
/// single truthy byte regardless of the select's result width, so only its
/// register offset matters here — a constant condition would already have
/// been folded away by the frontend.
pub fn emit_select<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Select without a result"));
    let (_, cond_reg) = classify(vt, ops.args[0]);
    let (true_class, true_reg) = classify(vt, ops.args[1]);
    let (false_class, false_reg) = classify(vt, ops.args[2]);
    let width = super::int_width(ops.ty);
    let opcodes = select_opcodes(width)?;

    match (true_class, false_class) {
        (ValueClass::RegFrame, ValueClass::RegFrame) => {
            text.emit_op(opcodes.rr, &[d, cond_reg, true_reg, false_reg])?;
        }
        (ValueClass::RegFrame, c) if c.is_constant_like() => {
            emit_single_imm(text, opcodes.rc, &[d, cond_reg, true_reg], width, vt, ops.args[2])?;
        }
        (c, ValueClass::RegFrame) if c.is_constant_like() => {
            emit_single_imm(text, opcodes.cr, &[d, cond_reg, false_reg], width, vt, ops.args[1])?;
        }
        (tc, fc) if tc.is_constant_like() && fc.is_constant_like() => {
            // Two slots make a 6-byte prefix, not a multiple of 4, so the
            // pad has to land *after* the opcode+slots (matching decode's
            // `round_up4(pc + 6)`) rather than before them.
            text.emit_op(opcodes.cc, &[d, cond_reg])?;
            text.align4()?;
            if width == 64 {
                text.append_u64(vt.value_const64(ops.args[1]))?;
                text.append_u64(vt.value_const64(ops.args[2]))?;
            } else {
                text.append_u32(vt.value_const32(ops.args[1]))?;
                text.append_u32(vt.value_const32(ops.args[2]))?;
            }
        }
        (tc, fc) => {
            return Err(EmitError::UnsupportedShape {
                class: "Select",
                detail: format!("operand classes {tc:?}/{fc:?}"),
            })
        }
    }
    Ok(())
}

fn emit_single_imm<U: ValueTable>(
    text: &mut TextBuffer,
    op: Opcode,
    slots: &[i16],
    width: u8,
    vt: &U,
    value: crate::external::ValueId,
) -> Result<(), EmitError> {
    if width == 64 {
        text.emit_op_imm64(op, slots, vt.value_const64(value))?;
    } else {
        text.emit_op_imm32(op, slots, vt.value_const32(value))?;
    }
    Ok(())
}
