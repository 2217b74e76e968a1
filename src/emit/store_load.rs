//! `Load` and `Store` emitters (`§4.C`, "Load", "Store").
//!
//! Addressing mode is read off operand shape rather than a separate flag:
//! `args = [ptr]` is base-only, `args = [ptr, offset_const]` is `_OFF`,
//! `args = [ptr, index_reg]` is `_ROFF`; a `ptr` that's a compile-time
//! address (`GlobalVar`/`Function`) always takes the `_G` form regardless
//! of how many other args are present.

use crate::consts::ACC_OFFSET;
use crate::error::EmitError;
use crate::external::{InstrOperands, TypeTable, ValueTable};
use crate::opcode::Opcode;
use crate::text::TextBuffer;
use crate::types::{CastKind, ValueClass};

use super::classify;

struct LoadOpcodes {
    base: Opcode,
    off: Opcode,
    roff: Option<Opcode>,
    global: Opcode,
}

fn load_opcodes(width: u8, fused: Option<CastKind>) -> Result<LoadOpcodes, EmitError> {
    use CastKind::*;
    Ok(match (width, fused) {
        (8, None) => LoadOpcodes { base: Opcode::Load8, off: Opcode::Load8Off, roff: Some(Opcode::Load8Roff), global: Opcode::Load8G },
        (8, Some(Zext)) => LoadOpcodes { base: Opcode::Load8Zext32, off: Opcode::Load8Zext32Off, roff: None, global: Opcode::Load8G },
        (8, Some(Sext)) => LoadOpcodes { base: Opcode::Load8Sext32, off: Opcode::Load8Sext32Off, roff: None, global: Opcode::Load8G },
        (16, None) => LoadOpcodes { base: Opcode::Load16, off: Opcode::Load16Off, roff: Some(Opcode::Load16Roff), global: Opcode::Load16G },
        (16, Some(Zext)) => LoadOpcodes { base: Opcode::Load16Zext32, off: Opcode::Load16Zext32Off, roff: None, global: Opcode::Load16G },
        (16, Some(Sext)) => LoadOpcodes { base: Opcode::Load16Sext32, off: Opcode::Load16Sext32Off, roff: None, global: Opcode::Load16G },
        (32, None) => LoadOpcodes { base: Opcode::Load32, off: Opcode::Load32Off, roff: Some(Opcode::Load32Roff), global: Opcode::Load32G },
        (64, None) => LoadOpcodes { base: Opcode::Load64, off: Opcode::Load64Off, roff: Some(Opcode::Load64Roff), global: Opcode::Load64G },
        _ => {
            return Err(EmitError::UnsupportedShape {
                class: "Load",
                detail: format!("width {width} with fused cast {fused:?}"),
            })
        }
    })
}

pub fn emit_load<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let d = vt.value_reg(ops.result.expect("Load without a result"));
    let (ptr_class, ptr_reg) = classify(vt, ops.args[0]);
    let width = super::int_width(ops.ty);
    let opcodes = load_opcodes(width, ops.cast_kind)?;

    if ptr_class != ValueClass::RegFrame {
        let addr = vt.value_global_addr(ops.args[0]);
        text.emit_op_imm32(opcodes.global, &[d], addr)?;
        return Ok(());
    }

    match ops.args.get(1).map(|&v| classify(vt, v)) {
        None => {
            text.emit_op(opcodes.base, &[d, ptr_reg])?;
        }
        Some((ValueClass::RegFrame, idx_reg)) => {
            let op = opcodes.roff.ok_or(EmitError::UnsupportedShape {
                class: "Load",
                detail: "register-offset addressing has no fused-cast form".into(),
            })?;
            text.emit_op(op, &[d, ptr_reg, idx_reg])?;
        }
        Some((c, _)) if c.is_constant_like() => {
            let offset = vt.value_const32(ops.args[1]);
            text.emit_op_imm32(opcodes.off, &[d, ptr_reg], offset)?;
        }
        Some((c, _)) => {
            return Err(EmitError::UnsupportedShape {
                class: "Load",
                detail: format!("offset operand class {c:?}"),
            })
        }
    }
    Ok(())
}

struct StoreOpcodes {
    base: Opcode,
    off: Opcode,
    c_off: Opcode,
    global: Opcode,
}

fn store_opcodes(width: u8) -> Result<StoreOpcodes, EmitError> {
    Ok(match width {
        8 => StoreOpcodes { base: Opcode::Store8, off: Opcode::Store8Off, c_off: Opcode::Store8COff, global: Opcode::Store8G },
        16 => StoreOpcodes { base: Opcode::Store16, off: Opcode::Store16Off, c_off: Opcode::Store16COff, global: Opcode::Store16G },
        32 => StoreOpcodes { base: Opcode::Store32, off: Opcode::Store32Off, c_off: Opcode::Store32COff, global: Opcode::Store32G },
        64 => StoreOpcodes { base: Opcode::Store64, off: Opcode::Store64Off, c_off: Opcode::Store64COff, global: Opcode::Store64G },
        other => return Err(EmitError::UnsupportedShape { class: "Store", detail: format!("width {other}") }),
    })
}

pub fn emit_store<U: ValueTable + TypeTable>(
    text: &mut TextBuffer,
    vt: &U,
    ops: &InstrOperands,
) -> Result<(), EmitError> {
    let (ptr_class, ptr_reg) = classify(vt, ops.args[0]);
    let (value_class, value_reg) = classify(vt, ops.args[1]);
    let width = super::int_width(ops.ty);
    let opcodes = store_opcodes(width)?;
    let offset = ops.args.get(2).map(|&v| vt.value_const32(v) as i32).unwrap_or(0);

    if ptr_class != ValueClass::RegFrame {
        let addr = vt.value_global_addr(ops.args[0]);
        if value_class == ValueClass::RegFrame {
            text.emit_op_imm32(opcodes.global, &[value_reg], addr)?;
        } else {
            // Materialise the constant into `ACC` first; `*_G` always
            // reads its value out of a register.
            match width {
                64 => text.emit_op_imm64(Opcode::Mov64C, &[ACC_OFFSET], vt.value_const64(ops.args[1]))?,
                _ => text.emit_op_imm32(Opcode::Mov32C, &[ACC_OFFSET], vt.value_const32(ops.args[1]))?,
            };
            text.emit_op_imm32(opcodes.global, &[ACC_OFFSET], addr)?;
        }
        return Ok(());
    }

    match value_class {
        ValueClass::RegFrame => {
            if ops.args.len() > 2 {
                text.emit_op_imm32(opcodes.off, &[ptr_reg, value_reg], offset as u32)?;
            } else {
                text.emit_op(opcodes.base, &[ptr_reg, value_reg])?;
            }
        }
        c if c.is_constant_like() => {
            text.align4()?;
            text.emit_op(opcodes.c_off, &[ptr_reg])?;
            if width == 64 {
                text.append_u64(vt.value_const64(ops.args[1]))?;
            } else {
                text.append_u32(vt.value_const32(ops.args[1]))?;
            }
            text.append_i16(offset as i16)?;
        }
        c => {
            return Err(EmitError::UnsupportedShape {
                class: "Store",
                detail: format!("value operand class {c:?}"),
            })
        }
    }
    Ok(())
}
