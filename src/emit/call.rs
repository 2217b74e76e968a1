//! `Call`, `VmOp`, and `Mla` emitters (`§4.C`, "Call", "VM-op").
//!
//! Call arguments travel through the callee's stack frame directly (the
//! frontend emits the writes into the new frame's arg area before the
//! call), so `Call`'s only operand is the callee in `args[0]`; `targets` is
//! unused here. `VmOp` and `Mla` cover every fixed-arity intrinsic
//! (`Memcpy`, `Uaddo32`, `Popcount32`, `StackSave`, ...) with one generic
//! rule: the slots are the result register(s) followed by the argument
//! registers, in that order, because every intrinsic's decode arm in
//! `exec` reads its slots in exactly that shape.

use crate::error::EmitError;
use crate::external::{HostFunctions, InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::ValueClass;

use super::classify;

pub fn emit_call<U: ValueTable + TypeTable + HostFunctions>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Call without a result"));
    let (class, reg) = classify(vt, ops.args[0]);

    match class {
        ValueClass::RegFrame => {
            text.emit_op(Opcode::JsrR, &[d, reg])?;
        }
        ValueClass::Function => {
            let f = vt.value_function_id(ops.args[0]);
            let op = if vt.is_host_function(f) { Opcode::JsrExt } else { Opcode::JsrVm };
            text.emit_op_imm32(op, &[d], f)?;
        }
        c => {
            return Err(EmitError::UnsupportedShape {
                class: "Call",
                detail: format!("callee operand class {c:?}"),
            })
        }
    }
    Ok(())
}

fn generic_slots<U: ValueTable>(vt: &U, ops: &InstrOperands) -> Vec<i16> {
    ops.result
        .into_iter()
        .chain(ops.extra_result)
        .chain(ops.args.iter().copied())
        .map(|v| vt.value_reg(v))
        .collect()
}

pub fn emit_vm_op<U: ValueTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let op = ops.vm_op.expect("VmOp instruction without vm_op");
    let slots = generic_slots(vt, ops);
    text.emit_op(op, &slots)?;
    Ok(())
}

pub fn emit_mla<U: ValueTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let slots = generic_slots(vt, ops);
    text.emit_op(Opcode::Mla32, &slots)?;
    Ok(())
}
