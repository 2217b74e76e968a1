//! `Alloca`, `VaArg`, `StackCopy`, and `StackShrink` emitters (`§4.C`,
//! "Alloca", stack management).

use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::ValueClass;

use super::classify;

/// `args = [size]`, `imm = alignment`. A constant `size` takes the static
/// `Alloca` form (both size and alignment are immediates); a register
/// `size` takes `Allocad` (alignment still an immediate, size read at
/// runtime).
pub fn emit_alloca<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Alloca without a result"));
    let align = ops.imm.expect("Alloca without an alignment") as u32;
    let (class, reg) = classify(vt, ops.args[0]);

    match class {
        ValueClass::RegFrame => {
            text.emit_op_imm32(Opcode::Allocad, &[d, reg], align)?;
        }
        c if c.is_constant_like() => {
            let size = vt.value_const32(ops.args[0]);
            text.emit_op_imm32(Opcode::Alloca, &[d], size)?;
            text.append_u32(align)?;
        }
        c => {
            return Err(EmitError::UnsupportedShape {
                class: "Alloca",
                detail: format!("size operand class {c:?}"),
            })
        }
    }
    Ok(())
}

/// `Vastart` embeds its `start` operand as a literal frame-offset slot
/// rather than a register reference, so it can't go through the generic
/// result/args register chain every other `VmOp` uses; `Vaarg32`/`Vaarg64`/
/// `Vacopy` all fit that chain and are handled in `call::emit_vm_op`, but
/// `Vastart` is classed under `VaArg` instead to keep it paired with them
/// in the dispatch table.
pub fn emit_vaarg<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let op = ops.vm_op.expect("VaArg instruction without vm_op");
    if op == Opcode::Vastart {
        let (_, list_reg) = classify(vt, ops.args[0]);
        let start = vt.value_const32(ops.args[1]) as i16;
        text.emit_op(Opcode::Vastart, &[list_reg, start])?;
        return Ok(());
    }

    let slots: Vec<i16> = ops
        .result
        .into_iter()
        .chain(ops.args.iter().copied())
        .map(|v| vt.value_reg(v))
        .collect();
    text.emit_op(op, &slots)?;
    Ok(())
}

/// `args = [dst, src]`, plus either `imm` (a compile-time-known length,
/// `StackCopyC`) or a third register argument (`StackCopyR`).
pub fn emit_stack_copy<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let (_, dst) = classify(vt, ops.args[0]);
    let (_, src) = classify(vt, ops.args[1]);

    if let Some(len) = ops.imm {
        text.emit_op_imm32(Opcode::StackCopyC, &[dst, src], len as u32)?;
        return Ok(());
    }

    let (_, len_reg) = classify(vt, ops.args[2]);
    text.emit_op(Opcode::StackCopyR, &[dst, src, len_reg])?;
    Ok(())
}

pub fn emit_stack_shrink(text: &mut TextBuffer, ops: &InstrOperands) -> Result<(), EmitError> {
    let delta = ops.imm.expect("StackShrink without a delta") as u32;
    text.emit_op_imm32(Opcode::StackShrink, &[], delta)?;
    Ok(())
}
