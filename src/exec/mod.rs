//! The switched dispatch core (`§4`, `§6`, `§9`).
//!
//! One function, [`run`], walks a function's text with a `pc` cursor and a
//! single `match` over [`Opcode`] — the "tight switched loop on a
//! contiguous enum" the Design Notes license in place of the original's
//! threaded computed-goto dispatch, which Rust has no safe equivalent for.
//! Each arm computes the next `pc` (or returns, for `RET_*`/a `StopReason`).
//! Arms that call back into the interpreter (`JSR_*`) never hold a borrow
//! of `unit.frames` across the nested call: they read what they need into
//! locals first, call with a plain `&mut Unit`, then re-borrow `unit.frames`
//! fresh afterward to read the callee's result out of its `ACC` slot.

pub mod alu;
pub mod mem_ops;
pub mod intrinsics;

use crate::consts::ACC_OFFSET;
use crate::opcode::Opcode;
use crate::stop::StopReason;
use crate::types::{BinOp, Predicate};
use crate::unit::Unit;

fn read_u16(text: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes(text[pos..pos + 2].try_into().unwrap())
}
fn read_i16(text: &[u8], pos: usize) -> i16 {
    read_u16(text, pos) as i16
}
fn read_u32(text: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes(text[pos..pos + 4].try_into().unwrap())
}
fn read_u64(text: &[u8], pos: usize) -> u64 {
    u64::from_le_bytes(text[pos..pos + 8].try_into().unwrap())
}
fn read_f32(text: &[u8], pos: usize) -> f32 {
    f32::from_bits(read_u32(text, pos))
}
fn read_f64(text: &[u8], pos: usize) -> f64 {
    f64::from_bits(read_u64(text, pos))
}

/// Resolve a branch displacement slot at `slot_pos`: the mirror image of
/// the fixup pass's `target - (slot_offset + 2)` computation.
fn branch_target(slot_pos: usize, disp: i16) -> usize {
    ((slot_pos + 2) as i64 + disp as i64) as usize
}

/// Round `offset` up to the 4-byte boundary a wide immediate was aligned
/// to at emit time.
fn round_up4(offset: usize) -> usize {
    (offset + 3) & !3
}

/// Invoke the function at `index` with its incoming frame already
/// populated at `rf` (by the caller's own stores into what becomes this
/// activation's low frame bytes, or by [`crate::driver::call`] for the
/// outermost call). Dispatches to a host closure or the switched
/// interpreter depending on which table the function lives in.
pub fn call_function(unit: &mut Unit, index: u32, rf: usize) -> Result<(), StopReason> {
    if unit.is_host_function(index) {
        let mut f = unit
            .take_host_function(index)
            .ok_or(StopReason::BadFunction(index))?;
        let result = f(unit, ACC_OFFSET);
        unit.restore_host_function(index, f);
        result
    } else if unit.function(index).is_some() {
        run(unit, index, rf)
    } else {
        Err(StopReason::BadFunction(index))
    }
}

/// Sentinel [`exec_one`] returns as the next `pc` once a `RET_*` opcode has
/// written the activation's result to its own [`ACC_OFFSET`] slot. Function
/// text is capped well below this by `MAX_FUNCTION_TEXT_SIZE`, so it can
/// never collide with a real offset.
const RETURNED: usize = usize::MAX;

/// Run one activation of the VM-bodied function `index` at frame pointer
/// `rf` to completion (a `RET_*` opcode) or a [`StopReason`].
fn run(unit: &mut Unit, index: u32, rf: usize) -> Result<(), StopReason> {
    let func = unit.function(index).ok_or(StopReason::BadFunction(index))?;
    let text = func.text.clone();
    let frame_size = func.frame_size as usize;
    let mut pc: usize = 0;

    loop {
        let op_pos = pc;
        let op = Opcode::from_handle(read_u16(&text, op_pos)).ok_or(StopReason::BadInstruction)?;
        let slot = |i: usize| read_i16(&text, op_pos + 2 + i * 2);

        let next = exec_one(unit, &text, op, op_pos, &slot, rf, frame_size)?;
        if next == RETURNED {
            return Ok(());
        }
        pc = next;
    }
}

#[allow(clippy::too_many_arguments)]
fn exec_one(
    unit: &mut Unit,
    text: &[u8],
    op: Opcode,
    pc: usize,
    slot: &dyn Fn(usize) -> i16,
    rf: usize,
    frame_size: usize,
) -> Result<usize, StopReason> {
    let frame = &mut unit.frames;
    let next_pc: usize = match op {

// ---- binop RR / RC, all widths ----
Opcode::Add8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::Add, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::Add8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::Add, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Sub8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::Sub, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::Sub8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::Sub, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Mul8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::Mul, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::Mul8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::Mul, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::UDiv8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::UDiv, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::UDiv8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::UDiv, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::SDiv8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::SDiv, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::SDiv8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::SDiv, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::URem8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::URem, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::URem8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::URem, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::SRem8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::SRem, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::SRem8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::SRem, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Shl8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::Shl, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::Shl8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::Shl, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::LShr8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::LShr, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::LShr8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::LShr, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::AShr8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::AShr, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::AShr8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::AShr, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::And8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::And, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::And8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::And, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Or8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::Or, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::Or8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::Or, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Xor8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u8(BinOp::Xor, frame.read_u8(rf, l), frame.read_u8(rf, r))?; frame.write_u8(rf, d, v); pc + 2 + 3*2 }
Opcode::Xor8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::binop_u8(BinOp::Xor, frame.read_u8(rf, l), imm)?; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Add16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::Add, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::Add16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::Add, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Sub16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::Sub, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::Sub16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::Sub, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Mul16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::Mul, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::Mul16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::Mul, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::UDiv16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::UDiv, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::UDiv16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::UDiv, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::SDiv16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::SDiv, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::SDiv16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::SDiv, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::URem16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::URem, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::URem16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::URem, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::SRem16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::SRem, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::SRem16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::SRem, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Shl16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::Shl, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::Shl16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::Shl, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::LShr16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::LShr, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::LShr16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::LShr, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::AShr16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::AShr, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::AShr16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::AShr, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::And16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::And, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::And16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::And, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Or16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::Or, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::Or16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::Or, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Xor16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u16(BinOp::Xor, frame.read_u16(rf, l), frame.read_u16(rf, r))?; frame.write_u16(rf, d, v); pc + 2 + 3*2 }
Opcode::Xor16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::binop_u16(BinOp::Xor, frame.read_u16(rf, l), imm)?; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Add32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::Add, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::Add32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::Add, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Sub32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::Sub, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::Sub32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::Sub, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Mul32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::Mul, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::Mul32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::Mul, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::UDiv32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::UDiv, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::UDiv32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::UDiv, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::SDiv32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::SDiv, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::SDiv32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::SDiv, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::URem32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::URem, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::URem32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::URem, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::SRem32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::SRem, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::SRem32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::SRem, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Shl32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::Shl, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::Shl32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::Shl, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::LShr32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::LShr, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::LShr32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::LShr, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::AShr32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::AShr, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::AShr32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::AShr, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::And32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::And, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::And32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::And, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Or32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::Or, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::Or32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::Or, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Xor32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u32(BinOp::Xor, frame.read_u32(rf, l), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 3*2 }
Opcode::Xor32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::binop_u32(BinOp::Xor, frame.read_u32(rf, l), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Add64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::Add, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::Add64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::Add, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Sub64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::Sub, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::Sub64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::Sub, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Mul64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::Mul, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::Mul64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::Mul, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::UDiv64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::UDiv, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::UDiv64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::UDiv, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::SDiv64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::SDiv, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::SDiv64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::SDiv, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::URem64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::URem, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::URem64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::URem, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::SRem64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::SRem, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::SRem64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::SRem, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Shl64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::Shl, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::Shl64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::Shl, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::LShr64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::LShr, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::LShr64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::LShr, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::AShr64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::AShr, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::AShr64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::AShr, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::And64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::And, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::And64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::And, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Or64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::Or, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::Or64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::Or, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Xor64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_u64(BinOp::Xor, frame.read_u64(rf, l), frame.read_u64(rf, r))?; frame.write_u64(rf, d, v); pc + 2 + 3*2 }
Opcode::Xor64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::binop_u64(BinOp::Xor, frame.read_u64(rf, l), imm)?; frame.write_u64(rf, d, v); imm_pos + 8 }
// ---- accumulator 32-bit forms ----
Opcode::Add32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::Add, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::Add32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Add, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::Add322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::Add, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Add322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Add, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Sub32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::Sub, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::Sub32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Sub, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::Sub322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::Sub, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Sub322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Sub, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Mul32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::Mul, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::Mul32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Mul, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::Mul322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::Mul, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Mul322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Mul, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::UDiv32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::UDiv, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::UDiv32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::UDiv, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::UDiv322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::UDiv, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::UDiv322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::UDiv, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::SDiv32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::SDiv, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::SDiv32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::SDiv, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::SDiv322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::SDiv, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::SDiv322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::SDiv, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::URem32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::URem, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::URem32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::URem, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::URem322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::URem, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::URem322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::URem, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::SRem32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::SRem, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::SRem32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::SRem, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::SRem322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::SRem, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::SRem322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::SRem, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Shl32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::Shl, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::Shl32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Shl, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::Shl322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::Shl, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Shl322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Shl, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::LShr32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::LShr, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::LShr32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::LShr, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::LShr322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::LShr, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::LShr322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::LShr, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::AShr32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::AShr, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::AShr32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::AShr, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::AShr322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::AShr, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::AShr322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::AShr, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::And32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::And, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::And32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::And, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::And322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::And, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::And322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::And, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Or32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::Or, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::Or32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Or, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::Or322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::Or, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Or322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Or, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Xor32Acc => { let r=slot(0); let v = alu::binop_u32(BinOp::Xor, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_acc32(rf, v); pc + 2 + 1*2 }
Opcode::Xor32AccC => { let imm_pos = round_up4(pc + 2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Xor, frame.read_acc32(rf), imm)?; frame.write_acc32(rf, v); imm_pos + 4 }
Opcode::Xor322Acc => { let (d,r)=(slot(0),slot(1)); let v = alu::binop_u32(BinOp::Xor, frame.read_acc32(rf), frame.read_u32(rf, r))?; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Xor322AccC => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos); let v = alu::binop_u32(BinOp::Xor, frame.read_acc32(rf), imm)?; frame.write_u32(rf, d, v); imm_pos + 4 }
// ---- inc/dec ----
Opcode::Inc32 => { let d=slot(0); let v = frame.read_u32(rf, d).wrapping_add(1); frame.write_u32(rf, d, v); pc + 2 + 1*2 }
Opcode::Dec32 => { let d=slot(0); let v = frame.read_u32(rf, d).wrapping_sub(1); frame.write_u32(rf, d, v); pc + 2 + 1*2 }
// ---- float arith ----
Opcode::AddF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f32(BinOp::Add, frame.read_f32(rf, l), frame.read_f32(rf, r)); frame.write_f32(rf, d, v); pc + 2 + 3*2 }
Opcode::AddFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::binop_f32(BinOp::Add, frame.read_f32(rf, l), imm); frame.write_f32(rf, d, v); imm_pos + 4 }
Opcode::SubF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f32(BinOp::Sub, frame.read_f32(rf, l), frame.read_f32(rf, r)); frame.write_f32(rf, d, v); pc + 2 + 3*2 }
Opcode::SubFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::binop_f32(BinOp::Sub, frame.read_f32(rf, l), imm); frame.write_f32(rf, d, v); imm_pos + 4 }
Opcode::MulF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f32(BinOp::Mul, frame.read_f32(rf, l), frame.read_f32(rf, r)); frame.write_f32(rf, d, v); pc + 2 + 3*2 }
Opcode::MulFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::binop_f32(BinOp::Mul, frame.read_f32(rf, l), imm); frame.write_f32(rf, d, v); imm_pos + 4 }
Opcode::DivF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f32(BinOp::UDiv, frame.read_f32(rf, l), frame.read_f32(rf, r)); frame.write_f32(rf, d, v); pc + 2 + 3*2 }
Opcode::DivFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::binop_f32(BinOp::UDiv, frame.read_f32(rf, l), imm); frame.write_f32(rf, d, v); imm_pos + 4 }
Opcode::AddD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f64(BinOp::Add, frame.read_f64(rf, l), frame.read_f64(rf, r)); frame.write_f64(rf, d, v); pc + 2 + 3*2 }
Opcode::AddDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::binop_f64(BinOp::Add, frame.read_f64(rf, l), imm); frame.write_f64(rf, d, v); imm_pos + 8 }
Opcode::SubD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f64(BinOp::Sub, frame.read_f64(rf, l), frame.read_f64(rf, r)); frame.write_f64(rf, d, v); pc + 2 + 3*2 }
Opcode::SubDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::binop_f64(BinOp::Sub, frame.read_f64(rf, l), imm); frame.write_f64(rf, d, v); imm_pos + 8 }
Opcode::MulD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f64(BinOp::Mul, frame.read_f64(rf, l), frame.read_f64(rf, r)); frame.write_f64(rf, d, v); pc + 2 + 3*2 }
Opcode::MulDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::binop_f64(BinOp::Mul, frame.read_f64(rf, l), imm); frame.write_f64(rf, d, v); imm_pos + 8 }
Opcode::DivD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::binop_f64(BinOp::UDiv, frame.read_f64(rf, l), frame.read_f64(rf, r)); frame.write_f64(rf, d, v); pc + 2 + 3*2 }
Opcode::DivDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::binop_f64(BinOp::UDiv, frame.read_f64(rf, l), imm); frame.write_f64(rf, d, v); imm_pos + 8 }
// ---- integer compare ----
Opcode::Eq8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Eq, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Eq8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Eq, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ne8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Ne, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ne8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Ne, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ugt8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Ugt, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ugt8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Ugt, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Uge8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Uge, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Uge8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Uge, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ult8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Ult, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ult8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Ult, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ule8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Ule, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ule8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Ule, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sgt8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Sgt, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sgt8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Sgt, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sge8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Sge, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sge8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Sge, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Slt8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Slt, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Slt8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Slt, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sle8 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp8(Predicate::Sle, frame.read_u8(rf, l), frame.read_u8(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sle8C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u8; let v = alu::int_cmp8(Predicate::Sle, frame.read_u8(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Eq16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Eq, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Eq16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Eq, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ne16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Ne, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ne16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Ne, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ugt16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Ugt, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ugt16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Ugt, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Uge16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Uge, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Uge16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Uge, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ult16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Ult, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ult16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Ult, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ule16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Ule, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ule16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Ule, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sgt16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Sgt, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sgt16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Sgt, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sge16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Sge, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sge16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Sge, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Slt16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Slt, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Slt16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Slt, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sle16 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp16(Predicate::Sle, frame.read_u16(rf, l), frame.read_u16(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sle16C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u16; let v = alu::int_cmp16(Predicate::Sle, frame.read_u16(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Eq32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Eq, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Eq32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Eq, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ne32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Ne, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ne32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Ne, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ugt32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Ugt, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ugt32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Ugt, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Uge32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Uge, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Uge32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Uge, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ult32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Ult, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ult32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Ult, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Ule32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Ule, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ule32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Ule, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sgt32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Sgt, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sgt32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Sgt, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sge32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Sge, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sge32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Sge, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Slt32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Slt, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Slt32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Slt, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Sle32 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp32(Predicate::Sle, frame.read_u32(rf, l), frame.read_u32(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sle32C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u32(text, imm_pos) as u32; let v = alu::int_cmp32(Predicate::Sle, frame.read_u32(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::Eq64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Eq, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Eq64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Eq, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Ne64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Ne, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ne64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Ne, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Ugt64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Ugt, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ugt64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Ugt, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Uge64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Uge, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Uge64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Uge, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Ult64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Ult, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ult64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Ult, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Ule64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Ule, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Ule64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Ule, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Sgt64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Sgt, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sgt64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Sgt, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Sge64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Sge, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sge64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Sge, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Slt64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Slt, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Slt64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Slt, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::Sle64 => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::int_cmp64(Predicate::Sle, frame.read_u64(rf, l), frame.read_u64(rf, r)); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::Sle64C => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_u64(text, imm_pos) as u64; let v = alu::int_cmp64(Predicate::Sle, frame.read_u64(rf, l), imm); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
// ---- float compare ----
Opcode::OeqF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Oeq, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OeqFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Oeq, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OgtF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ogt, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OgtFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Ogt, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OgeF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Oge, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OgeFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Oge, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OltF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Olt, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OltFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Olt, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OleF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ole, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OleFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Ole, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OneF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::One, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OneFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::One, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OrdF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ord, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OrdFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Ord, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::UnoF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Uno, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::UnoFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Uno, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::UeqF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ueq, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::UeqFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Ueq, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::FugtF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fugt, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FugtFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Fugt, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::FugeF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fuge, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FugeFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Fuge, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::FultF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fult, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FultFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Fult, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::FuleF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fule, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FuleFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Fule, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::UneF => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Une, frame.read_f32(rf, l) as f64, frame.read_f32(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::UneFC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f32(text, imm_pos); let v = alu::float_cmp(Predicate::Une, frame.read_f32(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 4 }
Opcode::OeqD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Oeq, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OeqDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Oeq, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::OgtD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ogt, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OgtDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Ogt, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::OgeD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Oge, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OgeDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Oge, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::OltD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Olt, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OltDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Olt, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::OleD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ole, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OleDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Ole, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::OneD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::One, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OneDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::One, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::OrdD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ord, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::OrdDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Ord, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::UnoD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Uno, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::UnoDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Uno, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::UeqD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Ueq, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::UeqDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Ueq, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::FugtD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fugt, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FugtDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Fugt, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::FugeD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fuge, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FugeDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Fuge, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::FultD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fult, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FultDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Fult, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::FuleD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Fule, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::FuleDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Fule, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
Opcode::UneD => { let (d,l,r)=(slot(0),slot(1),slot(2)); let v = alu::float_cmp(Predicate::Une, frame.read_f64(rf, l) as f64, frame.read_f64(rf, r) as f64); frame.write_u8(rf, d, v as u8); pc + 2 + 3*2 }
Opcode::UneDC => { let (d,l)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let imm = read_f64(text, imm_pos); let v = alu::float_cmp(Predicate::Une, frame.read_f64(rf, l) as f64, imm as f64); frame.write_u8(rf, d, v as u8); imm_pos + 8 }
// ---- fused compare-and-branch ----
Opcode::Eq8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Eq, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Eq8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Eq, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ne8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Ne, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ne8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Ne, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ugt8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Ugt, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ugt8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Ugt, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Uge8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Uge, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Uge8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Uge, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ult8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Ult, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ult8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Ult, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ule8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Ule, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ule8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Ule, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Sgt8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Sgt, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Sgt8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Sgt, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Sge8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Sge, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Sge8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Sge, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Slt8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Slt, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Slt8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Slt, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Sle8Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp8(Predicate::Sle, frame.read_u8(rf, l), frame.read_u8(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Sle8CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u8; let disp_pos = imm_pos + 4; let taken = alu::int_cmp8(Predicate::Sle, frame.read_u8(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Eq32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Eq, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Eq32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Eq, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ne32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Ne, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ne32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Ne, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ugt32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Ugt, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ugt32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Ugt, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Uge32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Uge, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Uge32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Uge, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ult32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Ult, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ult32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Ult, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Ule32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Ule, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Ule32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Ule, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Sgt32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Sgt, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Sgt32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Sgt, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Sge32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Sge, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Sge32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Sge, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Slt32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Slt, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Slt32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Slt, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
Opcode::Sle32Br => { let (l,r,disp_slot)=(slot(0),slot(1),slot(2)); let taken = alu::int_cmp32(Predicate::Sle, frame.read_u32(rf, l), frame.read_u32(rf, r)); let _ = disp_slot; let end = pc + 2 + 3*2; if taken { (end as i64 + read_i16(text, pc + 2 + 2*2) as i64) as usize } else { end } }
Opcode::Sle32CBr => { let l=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let imm = read_u32(text, imm_pos) as u32; let disp_pos = imm_pos + 4; let taken = alu::int_cmp32(Predicate::Sle, frame.read_u32(rf, l), imm); let end = disp_pos + 2; if taken { (end as i64 + read_i16(text, disp_pos) as i64) as usize } else { end } }
// ---- loads ----
Opcode::Load8 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 8)?; frame.write_u8(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Load8Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 8)?; frame.write_u8(rf, d, v as _); imm_pos + 4 }
Opcode::Load8Roff => { let (d,a,o)=(slot(0),slot(1),slot(2)); let v = mem_ops::load_roff(&unit.memory, frame, rf, a, o, 8)?; frame.write_u8(rf, d, v as _); pc + 2 + 3*2 }
Opcode::Load8G => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); let v = mem_ops::load_global(&unit.memory, addr, 8)?; frame.write_u8(rf, d, v as _); imm_pos + 4 }
Opcode::Load8Zext32 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 8)?; frame.write_u32(rf, d, v as u32); pc + 2 + 2*2 }
Opcode::Load8Zext32Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 8)?; frame.write_u32(rf, d, v as u32); imm_pos + 4 }
Opcode::Load8Sext32 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 8)?; frame.write_u32(rf, d, mem_ops::sign_extend(v, 8) as u32); pc + 2 + 2*2 }
Opcode::Load8Sext32Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 8)?; frame.write_u32(rf, d, mem_ops::sign_extend(v, 8) as u32); imm_pos + 4 }
Opcode::Load16 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 16)?; frame.write_u16(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Load16Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 16)?; frame.write_u16(rf, d, v as _); imm_pos + 4 }
Opcode::Load16Roff => { let (d,a,o)=(slot(0),slot(1),slot(2)); let v = mem_ops::load_roff(&unit.memory, frame, rf, a, o, 16)?; frame.write_u16(rf, d, v as _); pc + 2 + 3*2 }
Opcode::Load16G => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); let v = mem_ops::load_global(&unit.memory, addr, 16)?; frame.write_u16(rf, d, v as _); imm_pos + 4 }
Opcode::Load16Zext32 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 16)?; frame.write_u32(rf, d, v as u32); pc + 2 + 2*2 }
Opcode::Load16Zext32Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 16)?; frame.write_u32(rf, d, v as u32); imm_pos + 4 }
Opcode::Load16Sext32 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 16)?; frame.write_u32(rf, d, mem_ops::sign_extend(v, 16) as u32); pc + 2 + 2*2 }
Opcode::Load16Sext32Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 16)?; frame.write_u32(rf, d, mem_ops::sign_extend(v, 16) as u32); imm_pos + 4 }
Opcode::Load32 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 32)?; frame.write_u32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Load32Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 32)?; frame.write_u32(rf, d, v as _); imm_pos + 4 }
Opcode::Load32Roff => { let (d,a,o)=(slot(0),slot(1),slot(2)); let v = mem_ops::load_roff(&unit.memory, frame, rf, a, o, 32)?; frame.write_u32(rf, d, v as _); pc + 2 + 3*2 }
Opcode::Load32G => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); let v = mem_ops::load_global(&unit.memory, addr, 32)?; frame.write_u32(rf, d, v as _); imm_pos + 4 }
Opcode::Load64 => { let (d,a)=(slot(0),slot(1)); let v = mem_ops::load_base(&unit.memory, frame, rf, a, 64)?; frame.write_u64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Load64Off => { let (d,a)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; let v = mem_ops::load_off(&unit.memory, frame, rf, a, off, 64)?; frame.write_u64(rf, d, v as _); imm_pos + 4 }
Opcode::Load64Roff => { let (d,a,o)=(slot(0),slot(1),slot(2)); let v = mem_ops::load_roff(&unit.memory, frame, rf, a, o, 64)?; frame.write_u64(rf, d, v as _); pc + 2 + 3*2 }
Opcode::Load64G => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); let v = mem_ops::load_global(&unit.memory, addr, 64)?; frame.write_u64(rf, d, v as _); imm_pos + 4 }
// ---- stores ----
Opcode::Store8 => { let (a,v)=(slot(0),slot(1)); mem_ops::store_base(&mut unit.memory, frame, rf, a, v, 8)?; pc + 2 + 2*2 }
Opcode::Store8Off => { let (a,v)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; mem_ops::store_off(&mut unit.memory, frame, rf, a, v, off, 8)?; imm_pos + 4 }
Opcode::Store8COff => { let a=slot(0); let val_pos = round_up4(pc + 2 + 1*2); let value = read_u32(text, val_pos) as u64; let off_pos = val_pos + 4; let off = read_i16(text, off_pos) as i32; mem_ops::store_const_off(&mut unit.memory, frame, rf, a, value, off, 8)?; off_pos + 2 }
Opcode::Store8G => { let v=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); mem_ops::store_global(&mut unit.memory, frame, rf, v, addr, 8)?; imm_pos + 4 }
Opcode::Store16 => { let (a,v)=(slot(0),slot(1)); mem_ops::store_base(&mut unit.memory, frame, rf, a, v, 16)?; pc + 2 + 2*2 }
Opcode::Store16Off => { let (a,v)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; mem_ops::store_off(&mut unit.memory, frame, rf, a, v, off, 16)?; imm_pos + 4 }
Opcode::Store16COff => { let a=slot(0); let val_pos = round_up4(pc + 2 + 1*2); let value = read_u32(text, val_pos) as u64; let off_pos = val_pos + 4; let off = read_i16(text, off_pos) as i32; mem_ops::store_const_off(&mut unit.memory, frame, rf, a, value, off, 16)?; off_pos + 2 }
Opcode::Store16G => { let v=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); mem_ops::store_global(&mut unit.memory, frame, rf, v, addr, 16)?; imm_pos + 4 }
Opcode::Store32 => { let (a,v)=(slot(0),slot(1)); mem_ops::store_base(&mut unit.memory, frame, rf, a, v, 32)?; pc + 2 + 2*2 }
Opcode::Store32Off => { let (a,v)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; mem_ops::store_off(&mut unit.memory, frame, rf, a, v, off, 32)?; imm_pos + 4 }
Opcode::Store32COff => { let a=slot(0); let val_pos = round_up4(pc + 2 + 1*2); let value = read_u32(text, val_pos) as u64; let off_pos = val_pos + 4; let off = read_i16(text, off_pos) as i32; mem_ops::store_const_off(&mut unit.memory, frame, rf, a, value, off, 32)?; off_pos + 2 }
Opcode::Store32G => { let v=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); mem_ops::store_global(&mut unit.memory, frame, rf, v, addr, 32)?; imm_pos + 4 }
Opcode::Store64 => { let (a,v)=(slot(0),slot(1)); mem_ops::store_base(&mut unit.memory, frame, rf, a, v, 64)?; pc + 2 + 2*2 }
Opcode::Store64Off => { let (a,v)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let off = read_u32(text, imm_pos) as i32; mem_ops::store_off(&mut unit.memory, frame, rf, a, v, off, 64)?; imm_pos + 4 }
Opcode::Store64COff => { let a=slot(0); let val_pos = round_up4(pc + 2 + 1*2); let value = read_u64(text, val_pos) as u64; let off_pos = val_pos + 8; let off = read_i16(text, off_pos) as i32; mem_ops::store_const_off(&mut unit.memory, frame, rf, a, value, off, 64)?; off_pos + 2 }
Opcode::Store64G => { let v=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let addr = read_u32(text, imm_pos); mem_ops::store_global(&mut unit.memory, frame, rf, v, addr, 64)?; imm_pos + 4 }
// ---- select ----
Opcode::Select8Rr => { let (d,c,t,f_)=(slot(0),slot(1),slot(2),slot(3)); let v = if frame.read_u8(rf, c) != 0 { frame.read_u8(rf, t) } else { frame.read_u8(rf, f_) }; frame.write_u8(rf, d, v); pc + 2 + 4*2 }
Opcode::Select8Rc => { let (d,c,t)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let fv = read_u32(text, imm_pos) as u8; let v = if frame.read_u8(rf, c) != 0 { frame.read_u8(rf, t) } else { fv }; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Select8Cr => { let (d,c,f_)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let tv = read_u32(text, imm_pos) as u8; let v = if frame.read_u8(rf, c) != 0 { tv } else { frame.read_u8(rf, f_) }; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Select8Cc => { let (d,c)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let tv = read_u32(text, imm_pos) as u8; let fv = read_u32(text, imm_pos + 4) as u8; let v = if frame.read_u8(rf, c) != 0 { tv } else { fv }; frame.write_u8(rf, d, v); imm_pos + 4*2 }
Opcode::Select16Rr => { let (d,c,t,f_)=(slot(0),slot(1),slot(2),slot(3)); let v = if frame.read_u8(rf, c) != 0 { frame.read_u16(rf, t) } else { frame.read_u16(rf, f_) }; frame.write_u16(rf, d, v); pc + 2 + 4*2 }
Opcode::Select16Rc => { let (d,c,t)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let fv = read_u32(text, imm_pos) as u16; let v = if frame.read_u8(rf, c) != 0 { frame.read_u16(rf, t) } else { fv }; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Select16Cr => { let (d,c,f_)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let tv = read_u32(text, imm_pos) as u16; let v = if frame.read_u8(rf, c) != 0 { tv } else { frame.read_u16(rf, f_) }; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Select16Cc => { let (d,c)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let tv = read_u32(text, imm_pos) as u16; let fv = read_u32(text, imm_pos + 4) as u16; let v = if frame.read_u8(rf, c) != 0 { tv } else { fv }; frame.write_u16(rf, d, v); imm_pos + 4*2 }
Opcode::Select32Rr => { let (d,c,t,f_)=(slot(0),slot(1),slot(2),slot(3)); let v = if frame.read_u8(rf, c) != 0 { frame.read_u32(rf, t) } else { frame.read_u32(rf, f_) }; frame.write_u32(rf, d, v); pc + 2 + 4*2 }
Opcode::Select32Rc => { let (d,c,t)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let fv = read_u32(text, imm_pos) as u32; let v = if frame.read_u8(rf, c) != 0 { frame.read_u32(rf, t) } else { fv }; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Select32Cr => { let (d,c,f_)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let tv = read_u32(text, imm_pos) as u32; let v = if frame.read_u8(rf, c) != 0 { tv } else { frame.read_u32(rf, f_) }; frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Select32Cc => { let (d,c)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let tv = read_u32(text, imm_pos) as u32; let fv = read_u32(text, imm_pos + 4) as u32; let v = if frame.read_u8(rf, c) != 0 { tv } else { fv }; frame.write_u32(rf, d, v); imm_pos + 4*2 }
Opcode::Select64Rr => { let (d,c,t,f_)=(slot(0),slot(1),slot(2),slot(3)); let v = if frame.read_u8(rf, c) != 0 { frame.read_u64(rf, t) } else { frame.read_u64(rf, f_) }; frame.write_u64(rf, d, v); pc + 2 + 4*2 }
Opcode::Select64Rc => { let (d,c,t)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let fv = read_u64(text, imm_pos) as u64; let v = if frame.read_u8(rf, c) != 0 { frame.read_u64(rf, t) } else { fv }; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Select64Cr => { let (d,c,f_)=(slot(0),slot(1),slot(2)); let imm_pos = round_up4(pc + 2 + 3*2); let tv = read_u64(text, imm_pos) as u64; let v = if frame.read_u8(rf, c) != 0 { tv } else { frame.read_u64(rf, f_) }; frame.write_u64(rf, d, v); imm_pos + 8 }
Opcode::Select64Cc => { let (d,c)=(slot(0),slot(1)); let imm_pos = round_up4(pc + 2 + 2*2); let tv = read_u64(text, imm_pos) as u64; let fv = read_u64(text, imm_pos + 8) as u64; let v = if frame.read_u8(rf, c) != 0 { tv } else { fv }; frame.write_u64(rf, d, v); imm_pos + 8*2 }
// ---- casts ----
Opcode::Trunc64_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u64(rf, s) as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Trunc64_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u64(rf, s) as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::Trunc64_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u64(rf, s) as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::Trunc32_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u32(rf, s) as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::Trunc32_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u32(rf, s) as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::Trunc16_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u16(rf, s) as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::Zext8_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u8(rf, s) as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::Zext8_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u8(rf, s) as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Zext8_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u8(rf, s) as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Zext16_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u16(rf, s) as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Zext16_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u16(rf, s) as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Zext32_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u32(rf, s) as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Sext8_16 => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u8(rf, s) as i8) as i16 as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::Sext8_32 => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u8(rf, s) as i8) as i32 as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Sext8_64 => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u8(rf, s) as i8) as i64 as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Sext16_32 => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u16(rf, s) as i16) as i32 as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Sext16_64 => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u16(rf, s) as i16) as i64 as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Sext32_64 => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u32(rf, s) as i32) as i64 as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiF_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as i8 as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiF_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as i16 as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiF_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as i32 as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiF_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as i64 as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiF_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiF_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiF_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiF_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiD_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as i8 as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiD_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as i16 as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiD_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as i32 as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::FptosiD_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as i64 as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiD_8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as u8; frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiD_16 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as u16; frame.write_u16(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiD_32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as u32; frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::FptouiD_64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as u64; frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Sitofp8_F => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u8(rf, s) as i8) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp8_F => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u8(rf, s) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp8_D => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u8(rf, s) as i8) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp8_D => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u8(rf, s) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp16_F => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u16(rf, s) as i16) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp16_F => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u16(rf, s) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp16_D => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u16(rf, s) as i16) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp16_D => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u16(rf, s) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp32_F => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u32(rf, s) as i32) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp32_F => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u32(rf, s) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp32_D => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u32(rf, s) as i32) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp32_D => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u32(rf, s) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp64_F => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u64(rf, s) as i64) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp64_F => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u64(rf, s) as f64; frame.write_f32(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Sitofp64_D => { let (d,s)=(slot(0),slot(1)); let v = (frame.read_u64(rf, s) as i64) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Uitofp64_D => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u64(rf, s) as f64; frame.write_f64(rf, d, v as _); pc + 2 + 2*2 }
Opcode::Fpext => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f32(rf, s) as f64; frame.write_f64(rf, d, v); pc + 2 + 2*2 }
Opcode::Fptrunc => { let (d,s)=(slot(0),slot(1)); let v = frame.read_f64(rf, s) as f32; frame.write_f32(rf, d, v); pc + 2 + 2*2 }
// ---- move ----
Opcode::Mov8 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u8(rf, s); frame.write_u8(rf, d, v); pc + 2 + 2*2 }
Opcode::Mov32 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u32(rf, s); frame.write_u32(rf, d, v); pc + 2 + 2*2 }
Opcode::Mov64 => { let (d,s)=(slot(0),slot(1)); let v = frame.read_u64(rf, s); frame.write_u64(rf, d, v); pc + 2 + 2*2 }
Opcode::Mov8C => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let v = read_u32(text, imm_pos) as u8; frame.write_u8(rf, d, v); imm_pos + 4 }
Opcode::Mov16C => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let v = read_u32(text, imm_pos) as u16; frame.write_u16(rf, d, v); imm_pos + 4 }
Opcode::Mov32C => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let v = read_u32(text, imm_pos); frame.write_u32(rf, d, v); imm_pos + 4 }
Opcode::Mov64C => { let d=slot(0); let imm_pos = round_up4(pc + 2 + 1*2); let v = read_u64(text, imm_pos); frame.write_u64(rf, d, v); imm_pos + 8 }
        // --- control: misc ---
        Opcode::Nop => pc + 2,
        Opcode::InstrumentCount => pc + 2 + 1 * 2,
        Opcode::B => {
            let slot_pos = pc + 2;
            branch_target(slot_pos, slot(0))
        }
        Opcode::Bcond => {
            let c = slot(0);
            let slot_pos = pc + 2 + 1 * 2;
            let end = pc + 2 + 2 * 2;
            if frame.read_u8(rf, c) != 0 {
                branch_target(slot_pos, slot(1))
            } else {
                end
            }
        }
        Opcode::Unreachable => return Err(StopReason::Unreachable),

        // --- control: calls ---
        // JSR_VM and JSR_EXT both resolve through the same function table at
        // dispatch time (`call_function` picks host vs. VM-bodied), so the
        // two opcodes share a body; the distinction only guided the emitter.
        Opcode::JsrVm | Opcode::JsrExt | Opcode::JitCall => {
            let d = slot(0);
            let imm_pos = round_up4(pc + 2 + 1 * 2);
            let func_idx = read_u32(text, imm_pos);
            let new_rf = rf + frame_size;
            call_function(unit, func_idx, new_rf)?;
            let v = unit.frames.read_u32(new_rf, ACC_OFFSET);
            unit.frames.write_u32(rf, d, v);
            imm_pos + 4
        }
        Opcode::JsrR => {
            let (d, target_reg) = (slot(0), slot(1));
            let func_idx = frame.read_u32(rf, target_reg);
            let new_rf = rf + frame_size;
            call_function(unit, func_idx, new_rf)?;
            let v = unit.frames.read_u32(new_rf, ACC_OFFSET);
            unit.frames.write_u32(rf, d, v);
            pc + 2 + 2 * 2
        }

        // --- control: returns ---
        Opcode::RetVoid => RETURNED,
        Opcode::RetR8 => {
            let s = slot(0);
            let v = frame.read_u8(rf, s);
            frame.write_u8(rf, ACC_OFFSET, v);
            RETURNED
        }
        Opcode::RetR16 => {
            let s = slot(0);
            let v = frame.read_u16(rf, s);
            frame.write_u16(rf, ACC_OFFSET, v);
            RETURNED
        }
        Opcode::RetR32 => {
            let s = slot(0);
            let v = frame.read_u32(rf, s);
            frame.write_u32(rf, ACC_OFFSET, v);
            RETURNED
        }
        Opcode::RetR64 => {
            let s = slot(0);
            let v = frame.read_u64(rf, s);
            frame.write_u64(rf, ACC_OFFSET, v);
            RETURNED
        }
        Opcode::RetR32C => {
            let imm_pos = round_up4(pc + 2);
            let v = read_u32(text, imm_pos);
            frame.write_u32(rf, ACC_OFFSET, v);
            RETURNED
        }
        Opcode::RetR64C => {
            let imm_pos = round_up4(pc + 2);
            let v = read_u64(text, imm_pos);
            frame.write_u64(rf, ACC_OFFSET, v);
            RETURNED
        }

        // --- control: switches ---
        // A dense, small case set (at most `JUMPTABLE_MAX_CASES`) masks the
        // selector into an array of displacements sized to a power of two;
        // `Switch*Bs` binary-searches a sorted (key, displacement) pair for
        // everything else. Neither falls through sequentially — every case,
        // including the default, is an explicit branch.
        Opcode::Jumptable => {
            let (idx_reg, num_cases) = (slot(0), slot(1));
            let array_start = pc + 2 + 2 * 2;
            let mask = num_cases as i64 - 1;
            let key = (frame.read_u32(rf, idx_reg) as i64) & mask;
            let case_pos = array_start + (key as usize) * 2;
            branch_target(case_pos, read_i16(text, case_pos))
        }
        Opcode::Switch8Bs => {
            let (idx_reg, num_cases) = (slot(0), slot(1));
            let default_slot_pos = pc + 2 + 2 * 2;
            let keys_start = round_up4(default_slot_pos + 2);
            let n = num_cases as usize;
            let disp_start = keys_start + n * 4;
            let key = frame.read_u8(rf, idx_reg) as u32;
            let mut lo = 0usize;
            let mut hi = n;
            let mut found = None;
            while lo < hi {
                let mid = (lo + hi) / 2;
                let k = read_u32(text, keys_start + mid * 4);
                if k == key {
                    found = Some(mid);
                    break;
                } else if k < key {
                    lo = mid + 1;
                } else {
                    hi = mid;
                }
            }
            match found {
                Some(mid) => {
                    let p = disp_start + mid * 2;
                    branch_target(p, read_i16(text, p))
                }
                None => branch_target(default_slot_pos, read_i16(text, default_slot_pos)),
            }
        }
        Opcode::Switch32Bs => {
            let (idx_reg, num_cases) = (slot(0), slot(1));
            let default_slot_pos = pc + 2 + 2 * 2;
            let keys_start = round_up4(default_slot_pos + 2);
            let n = num_cases as usize;
            let disp_start = keys_start + n * 4;
            let key = frame.read_u32(rf, idx_reg);
            let mut lo = 0usize;
            let mut hi = n;
            let mut found = None;
            while lo < hi {
                let mid = (lo + hi) / 2;
                let k = read_u32(text, keys_start + mid * 4);
                if k == key {
                    found = Some(mid);
                    break;
                } else if k < key {
                    lo = mid + 1;
                } else {
                    hi = mid;
                }
            }
            match found {
                Some(mid) => {
                    let p = disp_start + mid * 2;
                    branch_target(p, read_i16(text, p))
                }
                None => branch_target(default_slot_pos, read_i16(text, default_slot_pos)),
            }
        }
        Opcode::Switch64Bs => {
            let (idx_reg, num_cases) = (slot(0), slot(1));
            let default_slot_pos = pc + 2 + 2 * 2;
            let keys_start = round_up4(default_slot_pos + 2);
            let n = num_cases as usize;
            let disp_start = keys_start + n * 8;
            let key = frame.read_u64(rf, idx_reg);
            let mut lo = 0usize;
            let mut hi = n;
            let mut found = None;
            while lo < hi {
                let mid = (lo + hi) / 2;
                let k = read_u64(text, keys_start + mid * 8);
                if k == key {
                    found = Some(mid);
                    break;
                } else if k < key {
                    lo = mid + 1;
                } else {
                    hi = mid;
                }
            }
            match found {
                Some(mid) => {
                    let p = disp_start + mid * 2;
                    branch_target(p, read_i16(text, p))
                }
                None => branch_target(default_slot_pos, read_i16(text, default_slot_pos)),
            }
        }

        // --- address arithmetic ---
        Opcode::LeaShl => {
            let (d, b, i, s) = (slot(0), slot(1), slot(2), slot(3));
            let addr = frame
                .read_u32(rf, b)
                .wrapping_add(frame.read_u32(rf, i).wrapping_shl(frame.read_u32(rf, s)));
            frame.write_u32(rf, d, addr);
            pc + 2 + 4 * 2
        }
        Opcode::LeaShl2 => {
            let (d, b, i) = (slot(0), slot(1), slot(2));
            let imm_pos = round_up4(pc + 2 + 3 * 2);
            let shift = read_u32(text, imm_pos);
            let addr = frame
                .read_u32(rf, b)
                .wrapping_add(frame.read_u32(rf, i).wrapping_shl(shift));
            frame.write_u32(rf, d, addr);
            imm_pos + 4
        }
        Opcode::LeaShlOff => {
            let (d, b, i, s) = (slot(0), slot(1), slot(2), slot(3));
            let imm_pos = round_up4(pc + 2 + 4 * 2);
            let off = read_u32(text, imm_pos);
            let addr = frame
                .read_u32(rf, b)
                .wrapping_add(frame.read_u32(rf, i).wrapping_shl(frame.read_u32(rf, s)))
                .wrapping_add(off);
            frame.write_u32(rf, d, addr);
            imm_pos + 4
        }
        Opcode::LeaMulOff => {
            let (d, b, i) = (slot(0), slot(1), slot(2));
            let imm_pos = round_up4(pc + 2 + 3 * 2);
            let scale = read_u32(text, imm_pos);
            let off = read_u32(text, imm_pos + 4);
            let addr = frame
                .read_u32(rf, b)
                .wrapping_add(frame.read_u32(rf, i).wrapping_mul(scale))
                .wrapping_add(off);
            frame.write_u32(rf, d, addr);
            imm_pos + 8
        }

        // --- stack management ---
        Opcode::Alloca => {
            let d = slot(0);
            let imm_pos = round_up4(pc + 2 + 1 * 2);
            let size = read_u32(text, imm_pos);
            let align = read_u32(text, imm_pos + 4);
            let addr = unit.memory.alloca(size, align)?;
            unit.frames.write_u32(rf, d, addr);
            imm_pos + 8
        }
        Opcode::Allocad => {
            let (d, size_reg) = (slot(0), slot(1));
            let imm_pos = round_up4(pc + 2 + 2 * 2);
            let align = read_u32(text, imm_pos);
            let size = frame.read_u32(rf, size_reg);
            let addr = unit.memory.alloca(size, align)?;
            unit.frames.write_u32(rf, d, addr);
            imm_pos + 4
        }
        Opcode::StackSave => {
            let d = slot(0);
            let v = unit.memory.alloca_ptr();
            frame.write_u32(rf, d, v);
            pc + 2 + 1 * 2
        }
        Opcode::StackRestore => {
            let s = slot(0);
            let v = frame.read_u32(rf, s);
            unit.memory.stack_restore(v);
            pc + 2 + 1 * 2
        }
        Opcode::StackShrink => {
            let imm_pos = round_up4(pc + 2);
            let delta = read_u32(text, imm_pos);
            unit.memory.stack_shrink(delta);
            imm_pos + 4
        }
        Opcode::StackCopyR => {
            let (dst, src, n) = (slot(0), slot(1), slot(2));
            let (d, s, len) = (
                frame.read_u32(rf, dst),
                frame.read_u32(rf, src),
                frame.read_u32(rf, n),
            );
            intrinsics::memcpy(&mut unit.memory, d, s, len)?;
            pc + 2 + 3 * 2
        }
        Opcode::StackCopyC => {
            let (dst, src) = (slot(0), slot(1));
            let imm_pos = round_up4(pc + 2 + 2 * 2);
            let len = read_u32(text, imm_pos);
            let (d, s) = (frame.read_u32(rf, dst), frame.read_u32(rf, src));
            intrinsics::memcpy(&mut unit.memory, d, s, len)?;
            imm_pos + 4
        }

        // --- libc-style intrinsics ---
        Opcode::Memcpy => {
            let (d, s, n) = (slot(0), slot(1), slot(2));
            let (dst, src, len) = (
                frame.read_u32(rf, d),
                frame.read_u32(rf, s),
                frame.read_u32(rf, n),
            );
            intrinsics::memcpy(&mut unit.memory, dst, src, len)?;
            pc + 2 + 3 * 2
        }
        Opcode::Memmove => {
            let (d, s, n) = (slot(0), slot(1), slot(2));
            let (dst, src, len) = (
                frame.read_u32(rf, d),
                frame.read_u32(rf, s),
                frame.read_u32(rf, n),
            );
            intrinsics::memmove(&mut unit.memory, dst, src, len)?;
            pc + 2 + 3 * 2
        }
        Opcode::Memset => {
            let (d, b, n) = (slot(0), slot(1), slot(2));
            let dst = frame.read_u32(rf, d);
            let byte = frame.read_u8(rf, b);
            let len = frame.read_u32(rf, n);
            intrinsics::memset(&mut unit.memory, dst, byte, len)?;
            pc + 2 + 3 * 2
        }
        Opcode::Memcmp => {
            let (d, a, b, n) = (slot(0), slot(1), slot(2), slot(3));
            let (pa, pb, len) = (
                frame.read_u32(rf, a),
                frame.read_u32(rf, b),
                frame.read_u32(rf, n),
            );
            let v = intrinsics::memcmp(&unit.memory, pa, pb, len)?;
            frame.write_u32(rf, d, v as u32);
            pc + 2 + 4 * 2
        }
        Opcode::Strcpy => {
            let (d, dst, src) = (slot(0), slot(1), slot(2));
            let (pd, ps) = (frame.read_u32(rf, dst), frame.read_u32(rf, src));
            let r = intrinsics::strcpy(&mut unit.memory, pd, ps)?;
            frame.write_u32(rf, d, r);
            pc + 2 + 3 * 2
        }
        Opcode::Strncpy => {
            let (d, dst, src, n) = (slot(0), slot(1), slot(2), slot(3));
            let (pd, ps, len) = (
                frame.read_u32(rf, dst),
                frame.read_u32(rf, src),
                frame.read_u32(rf, n),
            );
            let r = intrinsics::strncpy(&mut unit.memory, pd, ps, len)?;
            frame.write_u32(rf, d, r);
            pc + 2 + 4 * 2
        }
        Opcode::Strcmp => {
            let (d, a, b) = (slot(0), slot(1), slot(2));
            let (pa, pb) = (frame.read_u32(rf, a), frame.read_u32(rf, b));
            let v = intrinsics::strcmp(&unit.memory, pa, pb)?;
            frame.write_u32(rf, d, v as u32);
            pc + 2 + 3 * 2
        }
        Opcode::Strncmp => {
            let (d, a, b, n) = (slot(0), slot(1), slot(2), slot(3));
            let (pa, pb, len) = (
                frame.read_u32(rf, a),
                frame.read_u32(rf, b),
                frame.read_u32(rf, n),
            );
            let v = intrinsics::strncmp(&unit.memory, pa, pb, len)?;
            frame.write_u32(rf, d, v as u32);
            pc + 2 + 4 * 2
        }
        Opcode::Strchr => {
            let (d, s, c) = (slot(0), slot(1), slot(2));
            let addr = frame.read_u32(rf, s);
            let needle = frame.read_u8(rf, c);
            let r = intrinsics::strchr(&unit.memory, addr, needle)?;
            frame.write_u32(rf, d, r);
            pc + 2 + 3 * 2
        }
        Opcode::Strrchr => {
            let (d, s, c) = (slot(0), slot(1), slot(2));
            let addr = frame.read_u32(rf, s);
            let needle = frame.read_u8(rf, c);
            let r = intrinsics::strrchr(&unit.memory, addr, needle)?;
            frame.write_u32(rf, d, r);
            pc + 2 + 3 * 2
        }
        Opcode::Strlen => {
            let (d, s) = (slot(0), slot(1));
            let addr = frame.read_u32(rf, s);
            let r = intrinsics::strlen(&unit.memory, addr)?;
            frame.write_u32(rf, d, r);
            pc + 2 + 2 * 2
        }
        Opcode::Ctz32 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::ctz32(frame.read_u32(rf, s));
            frame.write_u32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Ctz64 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::ctz64(frame.read_u64(rf, s));
            frame.write_u64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Clz32 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::clz32(frame.read_u32(rf, s));
            frame.write_u32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Clz64 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::clz64(frame.read_u64(rf, s));
            frame.write_u64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Pop32 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::pop32(frame.read_u32(rf, s));
            frame.write_u32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Pop64 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::pop64(frame.read_u64(rf, s));
            frame.write_u64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Uaddo32 => {
            let (sd, od, a, b) = (slot(0), slot(1), slot(2), slot(3));
            let (sum, carry) = intrinsics::uaddo32(frame.read_u32(rf, a), frame.read_u32(rf, b));
            frame.write_u32(rf, sd, sum);
            frame.write_u8(rf, od, carry as u8);
            pc + 2 + 4 * 2
        }
        Opcode::Mla32 => {
            let (d, a, b, c) = (slot(0), slot(1), slot(2), slot(3));
            let v = intrinsics::mla32(frame.read_u32(rf, a), frame.read_u32(rf, b), frame.read_u32(rf, c));
            frame.write_u32(rf, d, v);
            pc + 2 + 4 * 2
        }
        Opcode::Abs32 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::abs32(frame.read_u32(rf, s) as i32) as u32;
            frame.write_u32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Floor => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::floor_d(frame.read_f64(rf, s));
            frame.write_f64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::FloorF => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::floor_f(frame.read_f32(rf, s));
            frame.write_f32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Sin => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::sin_d(frame.read_f64(rf, s));
            frame.write_f64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::SinF => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::sin_f(frame.read_f32(rf, s));
            frame.write_f32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Cos => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::cos_d(frame.read_f64(rf, s));
            frame.write_f64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::CosF => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::cos_f(frame.read_f32(rf, s));
            frame.write_f32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Pow => {
            let (d, a, b) = (slot(0), slot(1), slot(2));
            let v = intrinsics::pow_d(frame.read_f64(rf, a), frame.read_f64(rf, b));
            frame.write_f64(rf, d, v);
            pc + 2 + 3 * 2
        }
        Opcode::PowF => {
            let (d, a, b) = (slot(0), slot(1), slot(2));
            let v = intrinsics::pow_f(frame.read_f32(rf, a), frame.read_f32(rf, b));
            frame.write_f32(rf, d, v);
            pc + 2 + 3 * 2
        }
        Opcode::Fabs => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::fabs_d(frame.read_f64(rf, s));
            frame.write_f64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::FabsF => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::fabs_f(frame.read_f32(rf, s));
            frame.write_f32(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Fmod => {
            let (d, a, b) = (slot(0), slot(1), slot(2));
            let v = intrinsics::fmod_d(frame.read_f64(rf, a), frame.read_f64(rf, b));
            frame.write_f64(rf, d, v);
            pc + 2 + 3 * 2
        }
        Opcode::FmodF => {
            let (d, a, b) = (slot(0), slot(1), slot(2));
            let v = intrinsics::fmod_f(frame.read_f32(rf, a), frame.read_f32(rf, b));
            frame.write_f32(rf, d, v);
            pc + 2 + 3 * 2
        }
        Opcode::Log10 => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::log10_d(frame.read_f64(rf, s));
            frame.write_f64(rf, d, v);
            pc + 2 + 2 * 2
        }
        Opcode::Log10F => {
            let (d, s) = (slot(0), slot(1));
            let v = intrinsics::log10_f(frame.read_f32(rf, s));
            frame.write_f32(rf, d, v);
            pc + 2 + 2 * 2
        }

        // --- varargs ---
        // A va_list is a frame-relative i16 offset, sign-extended into a u32
        // and stashed in guest memory at the address the list register
        // holds; the emitter knows where a function's named arguments end
        // and bakes that in as `start`.
        Opcode::Vastart => {
            let (p, start) = (slot(0), slot(1));
            let addr = frame.read_u32(rf, p);
            unit.memory.write_u32(addr, start as i32 as u32)?;
            pc + 2 + 2 * 2
        }
        Opcode::Vaarg32 => {
            let (d, p) = (slot(0), slot(1));
            let list_addr = frame.read_u32(rf, p);
            let off = unit.memory.read_u32(list_addr)? as i32 as i16;
            let v = frame.read_u32(rf, off);
            frame.write_u32(rf, d, v);
            unit.memory.write_u32(list_addr, (off as i32 + 4) as u32)?;
            pc + 2 + 2 * 2
        }
        Opcode::Vaarg64 => {
            let (d, p) = (slot(0), slot(1));
            let list_addr = frame.read_u32(rf, p);
            let off = unit.memory.read_u32(list_addr)? as i32 as i16;
            let v = frame.read_u64(rf, off);
            frame.write_u64(rf, d, v);
            unit.memory.write_u32(list_addr, (off as i32 + 8) as u32)?;
            pc + 2 + 2 * 2
        }
        Opcode::Vacopy => {
            let (dst, src) = (slot(0), slot(1));
            let (da, sa) = (frame.read_u32(rf, dst), frame.read_u32(rf, src));
            let v = unit.memory.read_u32(sa)?;
            unit.memory.write_u32(da, v)?;
            pc + 2 + 2 * 2
        }
    };
    Ok(next_pc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::text::TextBuffer;
    use crate::unit::Unit;

    fn push_text(unit: &mut Unit, frame_size: u32, arg_area_size: u32, build: impl FnOnce(&mut TextBuffer)) -> u32 {
        let mut t = TextBuffer::new();
        build(&mut t);
        let text = t.to_rc();
        unit.push_function(Function {
            name: "f".into(),
            index: 0,
            text,
            frame_size,
            arg_area_size,
        })
    }

    #[test]
    fn add_then_return_round_trips_through_acc() {
        let mut unit = Unit::new();
        let idx = push_text(&mut unit, 32, 0, |t| {
            t.emit_op(Opcode::Add32, &[16, 20, 24]).unwrap();
            t.emit_op(Opcode::RetR32, &[16]).unwrap();
        });
        unit.frames.write_u32(0, 20, 7);
        unit.frames.write_u32(0, 24, 35);
        call_function(&mut unit, idx, 0).unwrap();
        assert_eq!(unit.frames.read_acc32(0), 42);
    }

    #[test]
    fn unconditional_branch_skips_dead_code() {
        use crate::fixup::FixupTable;
        let mut unit = Unit::new();
        let mut t = TextBuffer::new();
        let mut fx = FixupTable::new();

        fx.mark_block_start(0, t.len());
        let site = t.emit_op(Opcode::B, &[0]).unwrap() + 2;
        fx.add_site(site, 1);

        // Dead code the branch must skip: if executed this would overwrite
        // register 16 with 0xdead before the real store below runs.
        t.emit_op_imm32(Opcode::Mov32C, &[16], 0xdead).unwrap();

        fx.mark_block_start(1, t.len());
        t.emit_op_imm32(Opcode::Mov32C, &[16], 7).unwrap();
        t.emit_op(Opcode::RetR32, &[16]).unwrap();

        fx.resolve(&mut t).unwrap();
        let idx = unit.push_function(Function {
            name: "f".into(),
            index: 0,
            text: t.to_rc(),
            frame_size: 32,
            arg_area_size: 0,
        });

        call_function(&mut unit, idx, 0).unwrap();
        assert_eq!(unit.frames.read_acc32(0), 7);
    }

    #[test]
    fn host_function_call_reaches_result_through_acc() {
        let mut unit = Unit::new();
        let host = unit.push_host_function(Box::new(|u, ret| {
            u.frames.write_u32(0, ret, 99);
            Ok(())
        }));
        let idx = push_text(&mut unit, 16, 0, |t| {
            t.emit_op_imm32(Opcode::JsrVm, &[8], host).unwrap();
            t.emit_op(Opcode::RetR32, &[8]).unwrap();
        });
        call_function(&mut unit, idx, 0).unwrap();
        assert_eq!(unit.frames.read_acc32(0), 99);
    }

    #[test]
    fn unreachable_stops_execution() {
        let mut unit = Unit::new();
        let idx = push_text(&mut unit, 16, 0, |t| {
            t.emit_op(Opcode::Unreachable, &[]).unwrap();
        });
        let err = call_function(&mut unit, idx, 0).unwrap_err();
        assert!(matches!(err, StopReason::Unreachable));
    }

    #[test]
    fn fibonacci_recursion_via_jsr_vm_computes_correct_values() {
        use crate::fixup::FixupTable;

        // fib(n) = n <= 1 ? n : fib(n-1) + fib(n-2), entirely self-recursive
        // through JSR_VM. Frame layout: [reserved 0..8][acc 8..16][arg n
        // 16..20][a=fib(n-1) 24..28][b=fib(n-2) 28..32]. Each recursive call
        // stages its argument at offset 48 — this frame's own size (32) plus
        // the callee's arg offset (16) — the first bytes of the frame that
        // call's `JSR_VM` is about to stand up, the same trick
        // `crate::driver::call` uses to hand a top-level call its arguments.
        const FRAME_SIZE: u32 = 32;
        const SELF: u32 = 0;

        fn build() -> std::rc::Rc<[u8]> {
            let mut t = TextBuffer::new();
            let mut fx = FixupTable::new();

            // The true arm (base case) carries the only displacement; the
            // false arm (recurse) is plain fallthrough, so it must be laid
            // out immediately after the comparison, ahead of the base block.
            fx.mark_block_start(0, t.len());
            let site = t.emit_op_imm32(Opcode::Sle32CBr, &[16], 1).unwrap();
            let disp_pos = TextBuffer::round_up4(site + 2 + 1 * 2) + 4;
            fx.add_site(disp_pos, 2);

            fx.mark_block_start(1, t.len());
            t.emit_op_imm32(Opcode::Sub32C, &[48, 16], 1).unwrap();
            t.emit_op_imm32(Opcode::JsrVm, &[24], SELF).unwrap();
            t.emit_op_imm32(Opcode::Sub32C, &[48, 16], 2).unwrap();
            t.emit_op_imm32(Opcode::JsrVm, &[28], SELF).unwrap();
            t.emit_op(Opcode::Add32, &[16, 24, 28]).unwrap();
            t.emit_op(Opcode::RetR32, &[16]).unwrap();

            fx.mark_block_start(2, t.len());
            t.emit_op(Opcode::RetR32, &[16]).unwrap();

            fx.resolve(&mut t).unwrap();
            t.to_rc()
        }

        let text = build();
        let mut unit = Unit::new();
        let idx = unit.push_function(Function {
            name: "fib".into(),
            index: 0,
            text,
            frame_size: FRAME_SIZE,
            arg_area_size: 4,
        });
        assert_eq!(idx, SELF, "fib must be function 0 for its self-call to resolve");

        for (n, expected) in [(0u32, 0u32), (1, 1), (2, 1), (3, 2), (4, 3), (5, 5), (10, 55)] {
            unit.frames.write_u32(0, 16, n);
            call_function(&mut unit, idx, 0).unwrap();
            assert_eq!(unit.frames.read_acc32(0), expected, "fib({n})");
        }
    }

    #[test]
    fn jumptable_dispatches_via_masked_index_and_aliases_out_of_range_keys() {
        use crate::fixup::FixupTable;

        fn build() -> std::rc::Rc<[u8]> {
            let mut t = TextBuffer::new();
            let mut fx = FixupTable::new();

            // index reg 16, table size n=4 (mask=3); slots 0/1 carry real
            // cases, slots 2/3 are left pointing at the default block.
            t.emit_op(Opcode::Jumptable, &[16, 4]).unwrap();
            let slot0 = t.append_i16(0).unwrap();
            let slot1 = t.append_i16(0).unwrap();
            let slot2 = t.append_i16(0).unwrap();
            let slot3 = t.append_i16(0).unwrap();

            fx.mark_block_start(0, t.len());
            t.emit_op_imm32(Opcode::Mov32C, &[16], 100).unwrap();
            t.emit_op(Opcode::RetR32, &[16]).unwrap();

            fx.mark_block_start(1, t.len());
            t.emit_op_imm32(Opcode::Mov32C, &[16], 200).unwrap();
            t.emit_op(Opcode::RetR32, &[16]).unwrap();

            fx.mark_block_start(2, t.len());
            t.emit_op_imm32(Opcode::Mov32C, &[16], 999).unwrap();
            t.emit_op(Opcode::RetR32, &[16]).unwrap();

            fx.add_site(slot0, 0);
            fx.add_site(slot1, 1);
            fx.add_site(slot2, 2);
            fx.add_site(slot3, 2);
            fx.resolve(&mut t).unwrap();
            t.to_rc()
        }

        let text = build();
        // key 4 == 0b100 masks to the same slot (4 & 3 == 0) as the
        // explicit key-0 case — masked dispatch aliases rather than
        // bounds-checking, so this is the expected result, not a miss.
        for (key, expected) in [(0u32, 100u32), (1, 200), (2, 999), (3, 999), (4, 100)] {
            let mut unit = Unit::new();
            let idx = unit.push_function(Function {
                name: "f".into(),
                index: 0,
                text: text.clone(),
                frame_size: 32,
                arg_area_size: 0,
            });
            unit.frames.write_u32(0, 16, key);
            call_function(&mut unit, idx, 0).unwrap();
            assert_eq!(unit.frames.read_acc32(0), expected);
        }
    }
}
