//! Emit-time error representation (`§7`).
//!
//! Every emit-time failure is fatal for the function being lowered: the
//! original raises through a non-returning `parser_error(unit, fmt, ...)`
//! host callback. Rust has no non-returning callback convention that fits a
//! library boundary, so the contract here is realised as `Result<_,
//! EmitError>` returned from [`crate::emit::Emitter::emit_function`]; an
//! embedder that wants the original's "log and abort the process" behaviour
//! can still do so at its own boundary.

use crate::types::{BinOp, CastKind, IrType, ValueClass};

/// Fatal failure while lowering one IR function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// The scratch text buffer would exceed
    /// [`crate::consts::MAX_FUNCTION_TEXT_SIZE`].
    #[error("function too big: emitted {attempted} bytes, limit is {limit}")]
    FunctionTooBig { attempted: usize, limit: usize },

    /// No opcode exists for the given instruction shape.
    #[error("can't emit {op:?} for type {ty:?} with operand classes {lhs:?}/{rhs:?}")]
    UnsupportedBinop {
        op: BinOp,
        ty: IrType,
        lhs: ValueClass,
        rhs: ValueClass,
    },

    /// No cast opcode exists for the given `(dst, kind, src)` triple.
    #[error("can't emit cast {kind:?} from {src:?} to {dst:?}")]
    UnsupportedCast {
        kind: CastKind,
        src: IrType,
        dst: IrType,
    },

    /// A float comparison operand was a NaN constant. Preserved for bit
    /// compatibility with the source behaviour per the Open Questions in
    /// `§9`; an implementation may reasonably choose to forward NaN
    /// constants instead.
    #[error("NaN immediate rejected in float comparison")]
    NanImmediateInComparison,

    /// Conditional branch or switch default/case target was not a known
    /// block id, or a non-branch opcode reached the fixup pass.
    #[error("bad branch opcode at text offset {offset}")]
    BadBranchOpcode { offset: usize },

    /// A computed pc-relative displacement did not fit in `i16`.
    #[error("branch displacement {displacement} overflows i16 at text offset {offset}")]
    DisplacementOverflow { offset: usize, displacement: i64 },

    /// A load/store/select/etc. instruction had no lowering for the given
    /// operand class combination.
    #[error("can't emit {class} for class combination {detail}")]
    UnsupportedShape { class: &'static str, detail: String },

    /// `value_reg` returned an offset outside the function's declared frame
    /// size — a contract violation by the register allocator.
    #[error("register offset {offset} outside frame of size {frame_size}")]
    RegisterOutOfFrame { offset: i16, frame_size: u32 },
}
