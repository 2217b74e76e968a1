//! `Lea` emitter (`§4.C`, "LEA"), address computation for GEP-shaped
//! pointer arithmetic: `base + index * mul + offset`.
//!
//! `args = [base, index, mul_or_shift, offset?]` when there's an index to
//! scale, or `args = [base, offset?]` (offset riding in the index slot)
//! when there isn't — the latter degrades to a plain constant add, or a
//! bare copy if even the offset is absent. When `mul_or_shift` is itself a
//! register rather than a constant, it's read as a shift count directly
//! (`LeaShl`/`LeaShlOff`); when it's a constant, a power-of-two value picks
//! the shift forms and anything else falls back to `LeaMulOff`'s general
//! multiply.

use crate::consts::ACC_OFFSET;
use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::ValueClass;

use super::classify;

pub fn emit<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Lea without a result"));
    let (base_class, base_reg) = classify(vt, ops.args[0]);
    if base_class != ValueClass::RegFrame {
        return Err(EmitError::UnsupportedShape { class: "Lea", detail: format!("base class {base_class:?}") });
    }

    let Some((index_class, index_reg)) = ops.args.get(1).map(|&v| classify(vt, v)) else {
        return emit_no_index(text, d, base_reg, None);
    };
    if index_class != ValueClass::RegFrame {
        if !index_class.is_constant_like() {
            return Err(EmitError::UnsupportedShape { class: "Lea", detail: format!("index class {index_class:?}") });
        }
        // No real index, just a constant offset riding in the index slot.
        let offset = vt.value_const32(ops.args[1]);
        return emit_no_index(text, d, base_reg, Some(offset));
    }

    let (mul_class, mul_reg) = classify(vt, ops.args[2]);
    let offset = ops.args.get(3).map(|&v| vt.value_const32(v));

    if mul_class == ValueClass::RegFrame {
        return match offset {
            None => {
                text.emit_op(Opcode::LeaShl, &[d, base_reg, index_reg, mul_reg])?;
                Ok(())
            }
            Some(off) => {
                text.emit_op_imm32(Opcode::LeaShlOff, &[d, base_reg, index_reg, mul_reg], off)?;
                Ok(())
            }
        };
    }

    let mul = vt.value_const32(ops.args[2]);
    if mul.is_power_of_two() {
        let shift = mul.trailing_zeros();
        match offset {
            None => {
                text.emit_op_imm32(Opcode::LeaShl2, &[d, base_reg, index_reg], shift)?;
            }
            Some(off) => {
                text.emit_op_imm32(Opcode::Mov32C, &[ACC_OFFSET], shift)?;
                text.emit_op_imm32(Opcode::LeaShlOff, &[d, base_reg, index_reg, ACC_OFFSET], off)?;
            }
        }
        return Ok(());
    }

    text.align4()?;
    text.emit_op(Opcode::LeaMulOff, &[d, base_reg, index_reg])?;
    text.append_u32(mul)?;
    text.append_u32(offset.unwrap_or(0))?;
    Ok(())
}

fn emit_no_index(text: &mut TextBuffer, d: i16, base_reg: i16, offset: Option<u32>) -> Result<(), EmitError> {
    match offset {
        Some(offset) if offset != 0 => {
            text.emit_op_imm32(Opcode::Add32C, &[d, base_reg], offset)?;
        }
        _ => {
            text.emit_op(super::mov::reg_move_opcode(32), &[d, base_reg])?;
        }
    }
    Ok(())
}
