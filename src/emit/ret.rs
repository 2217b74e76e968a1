//! `Ret` emitter (`§4.C`, "Ret").

use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::ValueClass;

use super::classify;

/// `args` is empty for a void return, or `[value]` otherwise.
pub fn emit<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let Some(&value) = ops.args.first() else {
        text.emit_op(Opcode::RetVoid, &[])?;
        return Ok(());
    };

    let (class, reg) = classify(vt, value);
    let width = super::int_width(ops.ty);

    if class == ValueClass::RegFrame {
        let op = match width {
            8 => Opcode::RetR8,
            16 => Opcode::RetR16,
            32 => Opcode::RetR32,
            64 => Opcode::RetR64,
            other => return Err(EmitError::UnsupportedShape { class: "Ret", detail: format!("width {other}") }),
        };
        text.emit_op(op, &[reg])?;
        return Ok(());
    }

    let addr = match class {
        ValueClass::GlobalVar | ValueClass::Function => vt.value_global_addr(value),
        _ => vt.value_const32(value),
    };
    if width == 64 && class == ValueClass::Constant {
        text.emit_op_imm64(Opcode::RetR64C, &[], vt.value_const64(value))?;
    } else {
        text.emit_op_imm32(Opcode::RetR32C, &[], addr)?;
    }
    Ok(())
}
