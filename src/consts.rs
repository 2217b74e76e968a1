//! Engine-wide layout constants.

/// Size of one opcode handle or operand slot, in bytes.
pub const SLOT_SIZE: usize = 2;

/// Number of reserved frame slots at the bottom of every activation.
pub const RESERVED_SLOTS: i16 = 4;

/// Byte offset of the accumulator register relative to the frame pointer.
///
/// Specialised `*_ACC_R32`/`*_2ACC_R32` opcodes read and/or write this slot
/// implicitly instead of naming it as an operand.
pub const ACC_OFFSET: i16 = 8;

/// Default size of a unit's flat guest memory buffer, in bytes.
pub const DEFAULT_MEM_SIZE: usize = 1024 * 1024 * 16;

/// Default size of the register-frame stack, in bytes.
pub const DEFAULT_FRAME_STACK_SIZE: usize = 1024 * 1024;

/// Initial scratch text-buffer capacity used when emitting a function, in
/// bytes. Grown geometrically; not a hard limit.
pub const SCRATCH_TEXT_INITIAL_CAPACITY: usize = 256;

/// Hard ceiling on the size of a single function's encoded text, in bytes.
/// Emission past this raises [`crate::error::EmitError::FunctionTooBig`].
pub const MAX_FUNCTION_TEXT_SIZE: usize = i32::MAX as usize;

/// Small-universe threshold under which the switch emitter prefers a
/// [`crate::opcode::Opcode`] jump table over a binary-search switch.
pub const JUMPTABLE_MAX_CASES: usize = 16;

// The reserved region is exactly `RESERVED_SLOTS` slots wide, and the
// accumulator sits right after it with no gap.
static_assertions::const_assert_eq!(ACC_OFFSET as usize, RESERVED_SLOTS as usize * SLOT_SIZE);
static_assertions::const_assert!(MAX_FUNCTION_TEXT_SIZE < usize::MAX);
// `emit_jumptable` rounds the case count up to a power of two and masks
// with `n - 1`; the threshold it's compared against should already be one,
// or the rounding silently lets through a larger table than callers expect.
static_assertions::const_assert!(JUMPTABLE_MAX_CASES.is_power_of_two());
