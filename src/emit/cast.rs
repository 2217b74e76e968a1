//! `Cast` emitter (`§4.C`, "Cast").

use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::{CastKind, IrType};

use super::classify;

fn trunc(from: u8, to: u8) -> Option<Opcode> {
    match (from, to) {
        (64, 32) => Some(Opcode::Trunc64_32),
        (64, 16) => Some(Opcode::Trunc64_16),
        (64, 8) => Some(Opcode::Trunc64_8),
        (32, 16) => Some(Opcode::Trunc32_16),
        (32, 8) => Some(Opcode::Trunc32_8),
        (16, 8) => Some(Opcode::Trunc16_8),
        _ => None,
    }
}

fn zext(from: u8, to: u8) -> Option<Opcode> {
    match (from, to) {
        (8, 16) => Some(Opcode::Zext8_16),
        (8, 32) => Some(Opcode::Zext8_32),
        (8, 64) => Some(Opcode::Zext8_64),
        (16, 32) => Some(Opcode::Zext16_32),
        (16, 64) => Some(Opcode::Zext16_64),
        (32, 64) => Some(Opcode::Zext32_64),
        _ => None,
    }
}

fn sext(from: u8, to: u8) -> Option<Opcode> {
    match (from, to) {
        (8, 16) => Some(Opcode::Sext8_16),
        (8, 32) => Some(Opcode::Sext8_32),
        (8, 64) => Some(Opcode::Sext8_64),
        (16, 32) => Some(Opcode::Sext16_32),
        (16, 64) => Some(Opcode::Sext16_64),
        (32, 64) => Some(Opcode::Sext32_64),
        _ => None,
    }
}

fn fp_to_si(src: IrType, to: u8) -> Option<Opcode> {
    match (src, to) {
        (IrType::Float, 8) => Some(Opcode::FptosiF_8),
        (IrType::Float, 16) => Some(Opcode::FptosiF_16),
        (IrType::Float, 32) => Some(Opcode::FptosiF_32),
        (IrType::Float, 64) => Some(Opcode::FptosiF_64),
        (IrType::Double, 8) => Some(Opcode::FptosiD_8),
        (IrType::Double, 16) => Some(Opcode::FptosiD_16),
        (IrType::Double, 32) => Some(Opcode::FptosiD_32),
        (IrType::Double, 64) => Some(Opcode::FptosiD_64),
        _ => None,
    }
}

fn fp_to_ui(src: IrType, to: u8) -> Option<Opcode> {
    match (src, to) {
        (IrType::Float, 8) => Some(Opcode::FptouiF_8),
        (IrType::Float, 16) => Some(Opcode::FptouiF_16),
        (IrType::Float, 32) => Some(Opcode::FptouiF_32),
        (IrType::Float, 64) => Some(Opcode::FptouiF_64),
        (IrType::Double, 8) => Some(Opcode::FptouiD_8),
        (IrType::Double, 16) => Some(Opcode::FptouiD_16),
        (IrType::Double, 32) => Some(Opcode::FptouiD_32),
        (IrType::Double, 64) => Some(Opcode::FptouiD_64),
        _ => None,
    }
}

fn si_to_fp(from: u8, dst: IrType) -> Option<Opcode> {
    match (from, dst) {
        (8, IrType::Float) => Some(Opcode::Sitofp8_F),
        (8, IrType::Double) => Some(Opcode::Sitofp8_D),
        (16, IrType::Float) => Some(Opcode::Sitofp16_F),
        (16, IrType::Double) => Some(Opcode::Sitofp16_D),
        (32, IrType::Float) => Some(Opcode::Sitofp32_F),
        (32, IrType::Double) => Some(Opcode::Sitofp32_D),
        (64, IrType::Float) => Some(Opcode::Sitofp64_F),
        (64, IrType::Double) => Some(Opcode::Sitofp64_D),
        _ => None,
    }
}

fn ui_to_fp(from: u8, dst: IrType) -> Option<Opcode> {
    match (from, dst) {
        (8, IrType::Float) => Some(Opcode::Uitofp8_F),
        (8, IrType::Double) => Some(Opcode::Uitofp8_D),
        (16, IrType::Float) => Some(Opcode::Uitofp16_F),
        (16, IrType::Double) => Some(Opcode::Uitofp16_D),
        (32, IrType::Float) => Some(Opcode::Uitofp32_F),
        (32, IrType::Double) => Some(Opcode::Uitofp32_D),
        (64, IrType::Float) => Some(Opcode::Uitofp64_F),
        (64, IrType::Double) => Some(Opcode::Uitofp64_D),
        _ => None,
    }
}

/// `args = [source]`. `ops.ty` is the destination type; the source type
/// comes from the type table directly since casts are the one class where
/// the two operand types genuinely differ.
pub fn emit<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let kind = ops.cast_kind.expect("Cast instruction without cast_kind");
    let d = vt.value_reg(ops.result.expect("Cast without a result"));
    let (_, s) = classify(vt, ops.args[0]);
    let src_ty = vt.type_of(ops.args[0]);

    let op = match kind {
        CastKind::Trunc => trunc(src_ty.bits() as u8, ops.ty.bits() as u8),
        CastKind::Zext => zext(src_ty.bits() as u8, ops.ty.bits() as u8),
        CastKind::Sext => sext(src_ty.bits() as u8, ops.ty.bits() as u8),
        CastKind::FpToSi => fp_to_si(src_ty, ops.ty.bits() as u8),
        CastKind::FpToUi => fp_to_ui(src_ty, ops.ty.bits() as u8),
        CastKind::SiToFp => si_to_fp(src_ty.bits() as u8, ops.ty),
        CastKind::UiToFp => ui_to_fp(src_ty.bits() as u8, ops.ty),
        CastKind::FpExt => (src_ty == IrType::Float && ops.ty == IrType::Double).then_some(Opcode::Fpext),
        CastKind::FpTrunc => (src_ty == IrType::Double && ops.ty == IrType::Float).then_some(Opcode::Fptrunc),
        // No dedicated opcode reinterprets bits without converting them;
        // `Bitcast`/`IntToPtr` are pure reg-to-reg copies at the
        // destination width, and narrowing a pointer down to a smaller or
        // equal-width int is the same (the low bytes of its slot already
        // hold the whole address). Widening a pointer up to Int64 is not:
        // a pointer's slot only has 32 meaningful bits, so that direction
        // needs an explicit zero-extend rather than a 64-bit register move,
        // which would read 4 bytes of whatever garbage follows it.
        CastKind::Bitcast | CastKind::IntToPtr => Some(super::mov::reg_move_opcode(ops.ty.bits() as u8)),
        CastKind::PtrToInt if ops.ty.bits() == 64 => Some(Opcode::Zext32_64),
        CastKind::PtrToInt => Some(super::mov::reg_move_opcode(ops.ty.bits() as u8)),
    };

    let op = op.ok_or(EmitError::UnsupportedCast { kind, src: src_ty, dst: ops.ty })?;
    text.emit_op(op, &[d, s])?;
    Ok(())
}
