//! `Cmp2` and `CmpBranch` emitters (`§4.C`, "Cmp2", "Cmp-branch fusion").

use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::fixup::FixupTable;
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::{IrType, Predicate, ValueClass};

use super::classify;

fn int_pair(p: Predicate, width: u8) -> Option<(Opcode, Opcode)> {
    use Predicate::*;
    Some(match (width, p) {
        (8, Eq) => (Opcode::Eq8, Opcode::Eq8C),
        (8, Ne) => (Opcode::Ne8, Opcode::Ne8C),
        (8, Ugt) => (Opcode::Ugt8, Opcode::Ugt8C),
        (8, Uge) => (Opcode::Uge8, Opcode::Uge8C),
        (8, Ult) => (Opcode::Ult8, Opcode::Ult8C),
        (8, Ule) => (Opcode::Ule8, Opcode::Ule8C),
        (8, Sgt) => (Opcode::Sgt8, Opcode::Sgt8C),
        (8, Sge) => (Opcode::Sge8, Opcode::Sge8C),
        (8, Slt) => (Opcode::Slt8, Opcode::Slt8C),
        (8, Sle) => (Opcode::Sle8, Opcode::Sle8C),
        (16, Eq) => (Opcode::Eq16, Opcode::Eq16C),
        (16, Ne) => (Opcode::Ne16, Opcode::Ne16C),
        (16, Ugt) => (Opcode::Ugt16, Opcode::Ugt16C),
        (16, Uge) => (Opcode::Uge16, Opcode::Uge16C),
        (16, Ult) => (Opcode::Ult16, Opcode::Ult16C),
        (16, Ule) => (Opcode::Ule16, Opcode::Ule16C),
        (16, Sgt) => (Opcode::Sgt16, Opcode::Sgt16C),
        (16, Sge) => (Opcode::Sge16, Opcode::Sge16C),
        (16, Slt) => (Opcode::Slt16, Opcode::Slt16C),
        (16, Sle) => (Opcode::Sle16, Opcode::Sle16C),
        (32, Eq) => (Opcode::Eq32, Opcode::Eq32C),
        (32, Ne) => (Opcode::Ne32, Opcode::Ne32C),
        (32, Ugt) => (Opcode::Ugt32, Opcode::Ugt32C),
        (32, Uge) => (Opcode::Uge32, Opcode::Uge32C),
        (32, Ult) => (Opcode::Ult32, Opcode::Ult32C),
        (32, Ule) => (Opcode::Ule32, Opcode::Ule32C),
        (32, Sgt) => (Opcode::Sgt32, Opcode::Sgt32C),
        (32, Sge) => (Opcode::Sge32, Opcode::Sge32C),
        (32, Slt) => (Opcode::Slt32, Opcode::Slt32C),
        (32, Sle) => (Opcode::Sle32, Opcode::Sle32C),
        (64, Eq) => (Opcode::Eq64, Opcode::Eq64C),
        (64, Ne) => (Opcode::Ne64, Opcode::Ne64C),
        (64, Ugt) => (Opcode::Ugt64, Opcode::Ugt64C),
        (64, Uge) => (Opcode::Uge64, Opcode::Uge64C),
        (64, Ult) => (Opcode::Ult64, Opcode::Ult64C),
        (64, Ule) => (Opcode::Ule64, Opcode::Ule64C),
        (64, Sgt) => (Opcode::Sgt64, Opcode::Sgt64C),
        (64, Sge) => (Opcode::Sge64, Opcode::Sge64C),
        (64, Slt) => (Opcode::Slt64, Opcode::Slt64C),
        (64, Sle) => (Opcode::Sle64, Opcode::Sle64C),
        _ => return None,
    })
}

fn float_pair(p: Predicate, ty: IrType) -> Option<(Opcode, Opcode)> {
    use Predicate::*;
    let f = ty == IrType::Float;
    Some(match p {
        Oeq if f => (Opcode::OeqF, Opcode::OeqFC),
        Oeq => (Opcode::OeqD, Opcode::OeqDC),
        Ogt if f => (Opcode::OgtF, Opcode::OgtFC),
        Ogt => (Opcode::OgtD, Opcode::OgtDC),
        Oge if f => (Opcode::OgeF, Opcode::OgeFC),
        Oge => (Opcode::OgeD, Opcode::OgeDC),
        Olt if f => (Opcode::OltF, Opcode::OltFC),
        Olt => (Opcode::OltD, Opcode::OltDC),
        Ole if f => (Opcode::OleF, Opcode::OleFC),
        Ole => (Opcode::OleD, Opcode::OleDC),
        One if f => (Opcode::OneF, Opcode::OneFC),
        One => (Opcode::OneD, Opcode::OneDC),
        Ord if f => (Opcode::OrdF, Opcode::OrdFC),
        Ord => (Opcode::OrdD, Opcode::OrdDC),
        Uno if f => (Opcode::UnoF, Opcode::UnoFC),
        Uno => (Opcode::UnoD, Opcode::UnoDC),
        Ueq if f => (Opcode::UeqF, Opcode::UeqFC),
        Ueq => (Opcode::UeqD, Opcode::UeqDC),
        Fugt if f => (Opcode::FugtF, Opcode::FugtFC),
        Fugt => (Opcode::FugtD, Opcode::FugtDC),
        Fuge if f => (Opcode::FugeF, Opcode::FugeFC),
        Fuge => (Opcode::FugeD, Opcode::FugeDC),
        Fult if f => (Opcode::FultF, Opcode::FultFC),
        Fult => (Opcode::FultD, Opcode::FultDC),
        Fule if f => (Opcode::FuleF, Opcode::FuleFC),
        Fule => (Opcode::FuleD, Opcode::FuleDC),
        Une if f => (Opcode::UneF, Opcode::UneFC),
        Une => (Opcode::UneD, Opcode::UneDC),
        _ => return None,
    })
}

fn is_nan_const<V: ValueTable>(vt: &V, id: crate::external::ValueId, ty: IrType) -> bool {
    if ty == IrType::Float {
        f32::from_bits(vt.value_const32(id)).is_nan()
    } else {
        f64::from_bits(vt.value_const64(id)).is_nan()
    }
}

/// Resolve `(lhs_reg, rhs_class, rhs_reg_or_const_value, predicate)` after
/// applying the `swapPred` rule: `rhs` regframe and `lhs` constant swaps
/// operands so the constant always ends up on the right, the only side the
/// `_C` opcode forms carry an immediate for.
fn resolve_operands<V: ValueTable>(
    vt: &V,
    ops: &InstrOperands,
) -> Result<(i16, ValueClass, crate::external::ValueId, Predicate), EmitError> {
    let (lhs_class, lhs_reg) = classify(vt, ops.args[0]);
    let (rhs_class, _) = classify(vt, ops.args[1]);
    let predicate = ops.predicate.expect("Cmp2/CmpBranch without a predicate");

    if lhs_class == ValueClass::RegFrame {
        Ok((lhs_reg, rhs_class, ops.args[1], predicate))
    } else if rhs_class == ValueClass::RegFrame {
        let (_, rhs_reg) = classify(vt, ops.args[1]);
        Ok((rhs_reg, lhs_class, ops.args[0], predicate.swapped()))
    } else {
        Err(EmitError::UnsupportedShape {
            class: "Cmp2",
            detail: format!("{lhs_class:?}/{rhs_class:?}: no regframe operand"),
        })
    }
}

pub fn emit_cmp2<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Cmp2 without a result"));
    let (lhs_reg, rhs_class, rhs_value, predicate) = resolve_operands(vt, ops)?;

    if ops.ty.is_float() && rhs_class.is_constant_like() && is_nan_const(vt, rhs_value, ops.ty) {
        return Err(EmitError::NanImmediateInComparison);
    }

    let (rr, rc) = if ops.ty.is_float() {
        float_pair(predicate, ops.ty).ok_or(EmitError::UnsupportedShape {
            class: "Cmp2",
            detail: format!("no float opcode for predicate {predicate:?}"),
        })?
    } else {
        int_pair(predicate, super::int_width(ops.ty)).ok_or(EmitError::UnsupportedShape {
            class: "Cmp2",
            detail: format!("no int opcode for predicate {predicate:?} at width {:?}", ops.ty),
        })?
    };

    match rhs_class {
        ValueClass::RegFrame => {
            let (_, rhs_reg) = classify(vt, rhs_value);
            text.emit_op(rr, &[d, lhs_reg, rhs_reg])?;
        }
        c if c.is_constant_like() => {
            text.emit_op_imm32(rc, &[d, lhs_reg], vt.value_const32(rhs_value))?;
        }
        _ => unreachable!("resolve_operands only returns RegFrame or constant-like"),
    }
    Ok(())
}

/// `Eq8_BR .. SLE32_C_BR`: fused compare-and-branch, i8 and i32 only.
/// `targets = [true_block, false_block]`; the slot layout mirrors the plain
/// comparison with the destination register replaced by the false-branch's
/// fallthrough and a displacement slot for the true branch, per the decode
/// arm in `crate::exec`.
fn int_branch_pair(p: Predicate, width: u8) -> Option<(Opcode, Opcode)> {
    use Predicate::*;
    Some(match (width, p) {
        (8, Eq) => (Opcode::Eq8Br, Opcode::Eq8CBr),
        (8, Ne) => (Opcode::Ne8Br, Opcode::Ne8CBr),
        (8, Ugt) => (Opcode::Ugt8Br, Opcode::Ugt8CBr),
        (8, Uge) => (Opcode::Uge8Br, Opcode::Uge8CBr),
        (8, Ult) => (Opcode::Ult8Br, Opcode::Ult8CBr),
        (8, Ule) => (Opcode::Ule8Br, Opcode::Ule8CBr),
        (8, Sgt) => (Opcode::Sgt8Br, Opcode::Sgt8CBr),
        (8, Sge) => (Opcode::Sge8Br, Opcode::Sge8CBr),
        (8, Slt) => (Opcode::Slt8Br, Opcode::Slt8CBr),
        (8, Sle) => (Opcode::Sle8Br, Opcode::Sle8CBr),
        (32, Eq) => (Opcode::Eq32Br, Opcode::Eq32CBr),
        (32, Ne) => (Opcode::Ne32Br, Opcode::Ne32CBr),
        (32, Ugt) => (Opcode::Ugt32Br, Opcode::Ugt32CBr),
        (32, Uge) => (Opcode::Uge32Br, Opcode::Uge32CBr),
        (32, Ult) => (Opcode::Ult32Br, Opcode::Ult32CBr),
        (32, Ule) => (Opcode::Ule32Br, Opcode::Ule32CBr),
        (32, Sgt) => (Opcode::Sgt32Br, Opcode::Sgt32CBr),
        (32, Sge) => (Opcode::Sge32Br, Opcode::Sge32CBr),
        (32, Slt) => (Opcode::Slt32Br, Opcode::Slt32CBr),
        (32, Sle) => (Opcode::Sle32Br, Opcode::Sle32CBr),
        _ => return None,
    })
}

pub fn emit_cmp_branch<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    fx: &mut FixupTable,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    if ops.ty.is_float() {
        return Err(EmitError::UnsupportedShape {
            class: "CmpBranch",
            detail: "fused compare-branch is i8/i32 only".into(),
        });
    }
    let width = super::int_width(ops.ty);
    let (lhs_reg, rhs_class, rhs_value, predicate) = resolve_operands(vt, ops)?;
    let (rr, rc) = int_branch_pair(predicate, width).ok_or(EmitError::UnsupportedShape {
        class: "CmpBranch",
        detail: format!("no fused opcode for predicate {predicate:?} at width {width}"),
    })?;
    let true_block = ops.targets[0];

    let site = match rhs_class {
        ValueClass::RegFrame => {
            let (_, rhs_reg) = classify(vt, rhs_value);
            let pos = text.emit_op(rr, &[lhs_reg, rhs_reg, 0])?;
            pos + 2 + 2 * 2
        }
        c if c.is_constant_like() => {
            let pos = text.emit_op_imm32(rc, &[lhs_reg], vt.value_const32(rhs_value))?;
            let imm_pos = TextBuffer::round_up4(pos + 2 + 1 * 2);
            imm_pos + 4
        }
        _ => unreachable!("resolve_operands only returns RegFrame or constant-like"),
    };
    fx.add_site(site, true_block);
    Ok(())
}
