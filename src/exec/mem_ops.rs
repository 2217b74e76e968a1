//! Load/store execution across the addressing modes `§4.A`/`§4.C` define:
//! base (address in a register), offset (register plus an embedded
//! immediate), register-offset (two registers summed), and global (a
//! compile-time guest address with no register at all).

use crate::frame::FrameStack;
use crate::memory::Memory;
use crate::stop::StopReason;

fn guest_addr(frame: &FrameStack, rf: usize, reg: i16) -> u32 {
    frame.read_u32(rf, reg)
}

/// Read `width` bits (8/16/32/64) from `addr`, zero-extended into a `u64`.
pub fn read_width(memory: &Memory, addr: u32, width: u8) -> Result<u64, StopReason> {
    Ok(match width {
        8 => memory.read_u8(addr)? as u64,
        16 => memory.read_u16(addr)? as u64,
        32 => memory.read_u32(addr)? as u64,
        64 => memory.read_u64(addr)?,
        _ => unreachable!("load width limited to 8/16/32/64 by the emitter"),
    })
}

/// Sign-extend a `width`-bit value already zero-extended into a `u64`.
pub fn sign_extend(v: u64, width: u8) -> i64 {
    match width {
        8 => v as u8 as i8 as i64,
        16 => v as u16 as i16 as i64,
        32 => v as u32 as i32 as i64,
        64 => v as i64,
        _ => unreachable!("sign_extend width limited to 8/16/32/64"),
    }
}

pub fn write_width(memory: &mut Memory, addr: u32, width: u8, v: u64) -> Result<(), StopReason> {
    match width {
        8 => memory.write_u8(addr, v as u8),
        16 => memory.write_u16(addr, v as u16),
        32 => memory.write_u32(addr, v as u32),
        64 => memory.write_u64(addr, v),
        _ => unreachable!("store width limited to 8/16/32/64 by the emitter"),
    }
}

pub fn load_base(
    memory: &Memory,
    frame: &FrameStack,
    rf: usize,
    addr_reg: i16,
    width: u8,
) -> Result<u64, StopReason> {
    read_width(memory, guest_addr(frame, rf, addr_reg), width)
}

pub fn load_off(
    memory: &Memory,
    frame: &FrameStack,
    rf: usize,
    addr_reg: i16,
    byte_offset: i32,
    width: u8,
) -> Result<u64, StopReason> {
    let addr = (guest_addr(frame, rf, addr_reg) as i64 + byte_offset as i64) as u32;
    read_width(memory, addr, width)
}

pub fn load_roff(
    memory: &Memory,
    frame: &FrameStack,
    rf: usize,
    addr_reg: i16,
    offset_reg: i16,
    width: u8,
) -> Result<u64, StopReason> {
    let addr = guest_addr(frame, rf, addr_reg).wrapping_add(guest_addr(frame, rf, offset_reg));
    read_width(memory, addr, width)
}

pub fn load_global(memory: &Memory, addr: u32, width: u8) -> Result<u64, StopReason> {
    read_width(memory, addr, width)
}

pub fn store_base(
    memory: &mut Memory,
    frame: &FrameStack,
    rf: usize,
    addr_reg: i16,
    value_reg: i16,
    width: u8,
) -> Result<(), StopReason> {
    let addr = guest_addr(frame, rf, addr_reg);
    let value = match width {
        8 => frame.read_u8(rf, value_reg) as u64,
        16 => frame.read_u16(rf, value_reg) as u64,
        32 => frame.read_u32(rf, value_reg) as u64,
        64 => frame.read_u64(rf, value_reg),
        _ => unreachable!(),
    };
    write_width(memory, addr, width, value)
}

pub fn store_off(
    memory: &mut Memory,
    frame: &FrameStack,
    rf: usize,
    addr_reg: i16,
    value_reg: i16,
    byte_offset: i32,
    width: u8,
) -> Result<(), StopReason> {
    let addr = (guest_addr(frame, rf, addr_reg) as i64 + byte_offset as i64) as u32;
    let value = match width {
        8 => frame.read_u8(rf, value_reg) as u64,
        16 => frame.read_u16(rf, value_reg) as u64,
        32 => frame.read_u32(rf, value_reg) as u64,
        64 => frame.read_u64(rf, value_reg),
        _ => unreachable!(),
    };
    write_width(memory, addr, width, value)
}

pub fn store_const_off(
    memory: &mut Memory,
    frame: &FrameStack,
    rf: usize,
    addr_reg: i16,
    value: u64,
    byte_offset: i32,
    width: u8,
) -> Result<(), StopReason> {
    let addr = (guest_addr(frame, rf, addr_reg) as i64 + byte_offset as i64) as u32;
    write_width(memory, addr, width, value)
}

pub fn store_global(
    memory: &mut Memory,
    frame: &FrameStack,
    rf: usize,
    value_reg: i16,
    addr: u32,
    width: u8,
) -> Result<(), StopReason> {
    let value = match width {
        8 => frame.read_u8(rf, value_reg) as u64,
        16 => frame.read_u16(rf, value_reg) as u64,
        32 => frame.read_u32(rf, value_reg) as u64,
        64 => frame.read_u64(rf, value_reg),
        _ => unreachable!(),
    };
    write_width(memory, addr, width, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_and_offset_addressing_agree() {
        let mut mem = Memory::new(64);
        mem.write_u32(16, 0xcafef00d).unwrap();
        let mut frame = FrameStack::new();
        frame.write_u32(0, 8, 12); // addr_reg holds 12
        assert_eq!(load_off(&mem, &frame, 0, 8, 4, 32).unwrap(), 0xcafef00d);
        frame.write_u32(0, 8, 16);
        assert_eq!(load_base(&mem, &frame, 0, 8, 32).unwrap(), 0xcafef00d);
    }

    #[test]
    fn sign_extend_preserves_negative_byte() {
        assert_eq!(sign_extend(0xff, 8), -1);
        assert_eq!(sign_extend(0x8000, 16), -32768);
    }
}
