//! `Binop` emitter (`§4.C`, "Binop").

use crate::consts::ACC_OFFSET;
use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::{BinOp, IrType, ValueClass};

use super::classify;

/// `(reg/reg, reg/const)` opcode pair for one integer width's full `BinOp`
/// set. Declaration order in [`Opcode`] mirrors [`BinOp`]'s variant order
/// exactly, but writing that out as a table per width keeps the mapping
/// legible without leaning on a fragile `as u16` cast between two unrelated
/// enums.
fn int_pair(op: BinOp, width: u8) -> (Opcode, Opcode) {
    use BinOp::*;
    match (width, op) {
        (8, Add) => (Opcode::Add8, Opcode::Add8C),
        (8, Sub) => (Opcode::Sub8, Opcode::Sub8C),
        (8, Mul) => (Opcode::Mul8, Opcode::Mul8C),
        (8, UDiv) => (Opcode::UDiv8, Opcode::UDiv8C),
        (8, SDiv) => (Opcode::SDiv8, Opcode::SDiv8C),
        (8, URem) => (Opcode::URem8, Opcode::URem8C),
        (8, SRem) => (Opcode::SRem8, Opcode::SRem8C),
        (8, Shl) => (Opcode::Shl8, Opcode::Shl8C),
        (8, LShr) => (Opcode::LShr8, Opcode::LShr8C),
        (8, AShr) => (Opcode::AShr8, Opcode::AShr8C),
        (8, And) => (Opcode::And8, Opcode::And8C),
        (8, Or) => (Opcode::Or8, Opcode::Or8C),
        (8, Xor) => (Opcode::Xor8, Opcode::Xor8C),
        (16, Add) => (Opcode::Add16, Opcode::Add16C),
        (16, Sub) => (Opcode::Sub16, Opcode::Sub16C),
        (16, Mul) => (Opcode::Mul16, Opcode::Mul16C),
        (16, UDiv) => (Opcode::UDiv16, Opcode::UDiv16C),
        (16, SDiv) => (Opcode::SDiv16, Opcode::SDiv16C),
        (16, URem) => (Opcode::URem16, Opcode::URem16C),
        (16, SRem) => (Opcode::SRem16, Opcode::SRem16C),
        (16, Shl) => (Opcode::Shl16, Opcode::Shl16C),
        (16, LShr) => (Opcode::LShr16, Opcode::LShr16C),
        (16, AShr) => (Opcode::AShr16, Opcode::AShr16C),
        (16, And) => (Opcode::And16, Opcode::And16C),
        (16, Or) => (Opcode::Or16, Opcode::Or16C),
        (16, Xor) => (Opcode::Xor16, Opcode::Xor16C),
        (32, Add) => (Opcode::Add32, Opcode::Add32C),
        (32, Sub) => (Opcode::Sub32, Opcode::Sub32C),
        (32, Mul) => (Opcode::Mul32, Opcode::Mul32C),
        (32, UDiv) => (Opcode::UDiv32, Opcode::UDiv32C),
        (32, SDiv) => (Opcode::SDiv32, Opcode::SDiv32C),
        (32, URem) => (Opcode::URem32, Opcode::URem32C),
        (32, SRem) => (Opcode::SRem32, Opcode::SRem32C),
        (32, Shl) => (Opcode::Shl32, Opcode::Shl32C),
        (32, LShr) => (Opcode::LShr32, Opcode::LShr32C),
        (32, AShr) => (Opcode::AShr32, Opcode::AShr32C),
        (32, And) => (Opcode::And32, Opcode::And32C),
        (32, Or) => (Opcode::Or32, Opcode::Or32C),
        (32, Xor) => (Opcode::Xor32, Opcode::Xor32C),
        (64, Add) => (Opcode::Add64, Opcode::Add64C),
        (64, Sub) => (Opcode::Sub64, Opcode::Sub64C),
        (64, Mul) => (Opcode::Mul64, Opcode::Mul64C),
        (64, UDiv) => (Opcode::UDiv64, Opcode::UDiv64C),
        (64, SDiv) => (Opcode::SDiv64, Opcode::SDiv64C),
        (64, URem) => (Opcode::URem64, Opcode::URem64C),
        (64, SRem) => (Opcode::SRem64, Opcode::SRem64C),
        (64, Shl) => (Opcode::Shl64, Opcode::Shl64C),
        (64, LShr) => (Opcode::LShr64, Opcode::LShr64C),
        (64, AShr) => (Opcode::AShr64, Opcode::AShr64C),
        (64, And) => (Opcode::And64, Opcode::And64C),
        (64, Or) => (Opcode::Or64, Opcode::Or64C),
        (64, Xor) => (Opcode::Xor64, Opcode::Xor64C),
        _ => unreachable!("int_pair called with a non-integer width"),
    }
}

/// 32-bit accumulator quartet for the operators that have one: `(acc_base,
/// acc_baseC, acc_2, acc_2C)` in `*_ACC`, `*_ACC_C`, `*_2ACC`, `*_2ACC_C`
/// order.
fn acc32_quad(op: BinOp) -> Option<(Opcode, Opcode, Opcode, Opcode)> {
    use BinOp::*;
    Some(match op {
        Add => (Opcode::Add32Acc, Opcode::Add32AccC, Opcode::Add322Acc, Opcode::Add322AccC),
        Sub => (Opcode::Sub32Acc, Opcode::Sub32AccC, Opcode::Sub322Acc, Opcode::Sub322AccC),
        Mul => (Opcode::Mul32Acc, Opcode::Mul32AccC, Opcode::Mul322Acc, Opcode::Mul322AccC),
        UDiv => (Opcode::UDiv32Acc, Opcode::UDiv32AccC, Opcode::UDiv322Acc, Opcode::UDiv322AccC),
        SDiv => (Opcode::SDiv32Acc, Opcode::SDiv32AccC, Opcode::SDiv322Acc, Opcode::SDiv322AccC),
        URem => (Opcode::URem32Acc, Opcode::URem32AccC, Opcode::URem322Acc, Opcode::URem322AccC),
        SRem => (Opcode::SRem32Acc, Opcode::SRem32AccC, Opcode::SRem322Acc, Opcode::SRem322AccC),
        Shl => (Opcode::Shl32Acc, Opcode::Shl32AccC, Opcode::Shl322Acc, Opcode::Shl322AccC),
        LShr => (Opcode::LShr32Acc, Opcode::LShr32AccC, Opcode::LShr322Acc, Opcode::LShr322AccC),
        AShr => (Opcode::AShr32Acc, Opcode::AShr32AccC, Opcode::AShr322Acc, Opcode::AShr322AccC),
        And => (Opcode::And32Acc, Opcode::And32AccC, Opcode::And322Acc, Opcode::And322AccC),
        Or => (Opcode::Or32Acc, Opcode::Or32AccC, Opcode::Or322Acc, Opcode::Or322AccC),
        Xor => (Opcode::Xor32Acc, Opcode::Xor32AccC, Opcode::Xor322Acc, Opcode::Xor322AccC),
    })
}

fn float_pair(op: BinOp, ty: IrType) -> Option<(Opcode, Opcode)> {
    use BinOp::*;
    match (ty, op) {
        (IrType::Float, Add) => Some((Opcode::AddF, Opcode::AddFC)),
        (IrType::Float, Sub) => Some((Opcode::SubF, Opcode::SubFC)),
        (IrType::Float, Mul) => Some((Opcode::MulF, Opcode::MulFC)),
        // Floats have no sign; `UDiv` is the canonical "the" division
        // operator a frontend lowers float division to.
        (IrType::Float, UDiv) => Some((Opcode::DivF, Opcode::DivFC)),
        (IrType::Double, Add) => Some((Opcode::AddD, Opcode::AddDC)),
        (IrType::Double, Sub) => Some((Opcode::SubD, Opcode::SubDC)),
        (IrType::Double, Mul) => Some((Opcode::MulD, Opcode::MulDC)),
        (IrType::Double, UDiv) => Some((Opcode::DivD, Opcode::DivDC)),
        _ => None,
    }
}

pub fn emit<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let op = ops.bin_op.expect("Binop instruction without bin_op");
    let d = vt.value_reg(ops.result.expect("Binop instruction without a result"));
    let (lhs_class, lhs_reg) = classify(vt, ops.args[0]);
    let (rhs_class, rhs_reg) = classify(vt, ops.args[1]);

    if lhs_class != ValueClass::RegFrame {
        return Err(EmitError::UnsupportedBinop { op, ty: ops.ty, lhs: lhs_class, rhs: rhs_class });
    }

    if ops.ty.is_float() {
        let (rr, rc) = float_pair(op, ops.ty)
            .ok_or(EmitError::UnsupportedBinop { op, ty: ops.ty, lhs: lhs_class, rhs: rhs_class })?;
        return match rhs_class {
            ValueClass::RegFrame => {
                text.emit_op(rr, &[d, lhs_reg, rhs_reg])?;
                Ok(())
            }
            _ if rhs_class.is_constant_like() => {
                text.emit_op_imm32(rc, &[d, lhs_reg], vt.value_const32(ops.args[1]))?;
                Ok(())
            }
            _ => Err(EmitError::UnsupportedBinop { op, ty: ops.ty, lhs: lhs_class, rhs: rhs_class }),
        };
    }

    let width = super::int_width(ops.ty);

    // INC/DEC specialisations: width-32 `ADD` by the constant `1` or `SUB`
    // by the constant `-1`, writing back to the same register the operand
    // came from.
    if width == 32 && rhs_class.is_constant_like() && lhs_reg == d {
        let imm = vt.value_const32(ops.args[1]);
        if op == BinOp::Add && imm == 1 {
            text.emit_op(Opcode::Inc32, &[d])?;
            return Ok(());
        }
        if op == BinOp::Sub && imm == u32::MAX {
            text.emit_op(Opcode::Dec32, &[d])?;
            return Ok(());
        }
    }

    let (rr, rc) = int_pair(op, width);
    let acc = if width == 32 { acc32_quad(op) } else { None };
    let lhs_is_acc = lhs_reg == ACC_OFFSET;
    let ret_is_acc = d == ACC_OFFSET;

    match (rhs_class, acc, lhs_is_acc, ret_is_acc) {
        (ValueClass::RegFrame, Some((_, _, acc_2, _)), true, true) => {
            text.emit_op(acc_2, &[d, rhs_reg])?;
        }
        (ValueClass::RegFrame, Some((acc_base, _, _, _)), true, false) => {
            text.emit_op(acc_base, &[rhs_reg])?;
        }
        (ValueClass::RegFrame, _, _, _) => {
            text.emit_op(rr, &[d, lhs_reg, rhs_reg])?;
        }
        (c, Some((_, _, _, acc_2c)), true, true) if c.is_constant_like() => {
            text.emit_op_imm32(acc_2c, &[d], vt.value_const32(ops.args[1]))?;
        }
        (c, Some((_, acc_basec, _, _)), true, false) if c.is_constant_like() => {
            text.emit_op_imm32(acc_basec, &[], vt.value_const32(ops.args[1]))?;
        }
        (c, _, _, _) if c.is_constant_like() => {
            text.emit_op_imm32(rc, &[d, lhs_reg], vt.value_const32(ops.args[1]))?;
        }
        _ => return Err(EmitError::UnsupportedBinop { op, ty: ops.ty, lhs: lhs_class, rhs: rhs_class }),
    }
    Ok(())
}
