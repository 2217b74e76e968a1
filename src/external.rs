//! External collaborator interfaces (`§6`).
//!
//! The IR builder, parser, type/value tables and register allocator are out
//! of scope for this crate; it only consumes them through the traits below,
//! the same way the teacher's interpreter only ever touches chain state
//! through [`InterpreterStorage`](https://docs.rs/fuel-vm)-shaped traits
//! rather than a concrete database. An embedder supplies one concrete type
//! implementing all four and hands it to [`crate::emit::Emitter`] and
//! [`crate::driver::call`].

use crate::opcode::Opcode;
use crate::types::{BinOp, CastKind, InstrClass, IrType, Predicate, ValueClass};

/// Opaque handle to an IR value, scoped to one function traversal.
pub type ValueId = u32;

/// Opaque handle to an IR basic block, scoped to one function traversal.
pub type BlockId = u32;

/// Opaque handle to an IR instruction, scoped to one basic block.
pub type InstrId = u32;

/// Opaque handle to an IR function, scoped to one unit.
pub type FunctionId = u32;

/// Type queries against the frontend's type table.
pub trait TypeTable {
    /// The type a value carries.
    fn type_of(&self, value: ValueId) -> IrType;

    /// Resolve a type by name/id for instructions that name a destination
    /// type explicitly (casts, loads with fused widening).
    fn type_info(&self, ty: IrType) -> IrType {
        ty
    }
}

/// Queries against the frontend's value table: where a value's bits live
/// and, for compile-time-known values, what they are.
pub trait ValueTable {
    fn value_class(&self, value: ValueId) -> ValueClass;

    /// Frame offset for a [`ValueClass::RegFrame`] value. The register
    /// allocator guarantees this fits the function's declared frame size;
    /// callers that can't trust that (an untrusted allocator) should check
    /// against [`crate::error::EmitError::RegisterOutOfFrame`] themselves.
    fn value_reg(&self, value: ValueId) -> i16;

    /// Bit pattern of a [`ValueClass::Constant`] value, zero-extended to 64
    /// bits regardless of the value's declared width.
    fn value_const64(&self, value: ValueId) -> u64;

    fn value_const32(&self, value: ValueId) -> u32 {
        self.value_const64(value) as u32
    }

    /// Guest address of a [`ValueClass::GlobalVar`] value.
    fn value_global_addr(&self, value: ValueId) -> u32;

    /// Function-table index of a [`ValueClass::Function`] value.
    fn value_function_id(&self, value: ValueId) -> FunctionId;
}

/// Per-instruction operand payload, shaped by [`InstrClass`]. Each variant
/// carries exactly the operands that class's emitter in
/// [`crate::emit`] needs; unused fields for a given class are never read.
#[derive(Debug, Clone)]
pub struct InstrOperands {
    pub class: InstrClass,
    pub result: Option<ValueId>,
    /// Second destination, for the one class that writes two registers
    /// (`Uaddo32`'s sum and carry-out).
    pub extra_result: Option<ValueId>,
    pub args: Vec<ValueId>,
    /// Branch/switch/call targets, as block or function ids depending on
    /// `class`. `Call`'s callee travels in `args[0]` instead (its
    /// [`ValueClass`] already says function-table constant vs. register),
    /// so `targets` is unused there.
    pub targets: Vec<u32>,
    /// Dense switch case keys, parallel to `targets[1..]` (`targets[0]` is
    /// the default).
    pub case_keys: Vec<i64>,
    pub ty: IrType,
    /// Operator for `Binop`. `None` for every other class.
    pub bin_op: Option<BinOp>,
    /// Predicate for `Cmp2`/`CmpBranch`. `None` for every other class.
    pub predicate: Option<Predicate>,
    /// Cast kind for `Cast`. `None` for every other class.
    pub cast_kind: Option<CastKind>,
    /// The specific intrinsic opcode for `VmOp`/`Mla`, chosen by the
    /// frontend rather than discriminated from operand shape the way every
    /// other class is. `None` for every other class.
    pub vm_op: Option<Opcode>,
    /// A compile-time-only constant that isn't one of `args` because it
    /// names a byte count or frame alignment rather than a typed IR value
    /// (`Alloca`'s/`Allocad`'s alignment, `StackShrink`'s delta,
    /// `StackCopy`'s length when it's known at emit time).
    pub imm: Option<u64>,
}

/// Traversal over one unit's IR: functions, their blocks, and each block's
/// instructions in program order.
pub trait IrUnit {
    fn functions(&self) -> Vec<FunctionId>;
    fn function_name(&self, f: FunctionId) -> &str;
    fn function_frame_size(&self, f: FunctionId) -> u32;
    fn function_arg_area_size(&self, f: FunctionId) -> u32;
    fn blocks(&self, f: FunctionId) -> Vec<BlockId>;
    fn instructions(&self, b: BlockId) -> Vec<InstrId>;
    fn instr_operands(&self, i: InstrId) -> InstrOperands;
}

/// Host function binding looked up by `JSR_EXT`/`JIT_CALL`.
pub trait HostFunctions {
    /// `true` if `f` is bound to a host function rather than a VM-body
    /// function in this unit's function table.
    fn is_host_function(&self, f: FunctionId) -> bool;
}
