//! Per-instruction emitters (`§4.C`).
//!
//! [`Emitter`] walks one [`IrUnit`] function at a time: mark each block's
//! start in a fresh [`FixupTable`], dispatch every instruction to the
//! submodule for its [`InstrClass`], then resolve branch/switch/jumptable
//! displacements once the function's text and block offsets are both
//! final. Each submodule picks the most specific opcode for the operand
//! classes it's handed and writes bytes through [`TextBuffer`]; none of
//! them touch `unit.rs`'s runtime [`crate::unit::Unit`] — an emitted
//! [`Function`] is handed to that separately by the caller.

mod binop;
mod branch;
mod call;
mod cast;
mod cmp;
mod lea;
mod mov;
mod ret;
mod stack;
mod store_load;

use crate::error::EmitError;
use crate::external::{HostFunctions, InstrId, IrUnit, TypeTable, ValueTable};
use crate::fixup::FixupTable;
use crate::function::Function;
use crate::text::TextBuffer;
use crate::types::{InstrClass, ValueClass};

/// Lowers one [`IrUnit`] function at a time into a [`Function`] artefact.
/// Stateless between functions beyond the scratch buffers it reuses; an
/// embedder drives it once per function in `ir.functions()` order, though
/// nothing here requires that order.
pub struct Emitter<'u, U> {
    unit: &'u U,
}

impl<'u, U> Emitter<'u, U>
where
    U: IrUnit + TypeTable + ValueTable + HostFunctions,
{
    pub fn new(unit: &'u U) -> Self {
        Self { unit }
    }

    /// Lower every block of function `f` in the order `ir.blocks(f)`
    /// reports, resolve all deferred branch targets, and return the
    /// finished artefact. Block order is significant: fallthrough isn't a
    /// concept this format has (every instruction computes its own next
    /// `pc`), but `FixupTable::mark_block_start` must see each block before
    /// any forward branch into it is resolved, which only holds if the
    /// caller's block order matches the order instructions are emitted in.
    pub fn emit_function(&self, f: crate::external::FunctionId) -> Result<Function, EmitError> {
        let mut text = TextBuffer::new();
        let mut fx = FixupTable::new();

        for block in self.unit.blocks(f) {
            fx.mark_block_start(block, text.len());
            for instr in self.unit.instructions(block) {
                self.emit_instruction(&mut text, &mut fx, instr)?;
            }
        }

        fx.resolve(&mut text)?;

        Ok(Function {
            name: self.unit.function_name(f).into(),
            index: f,
            text: text.to_rc(),
            frame_size: self.unit.function_frame_size(f),
            arg_area_size: self.unit.function_arg_area_size(f),
        })
    }

    fn emit_instruction(
        &self,
        text: &mut TextBuffer,
        fx: &mut FixupTable,
        instr: InstrId,
    ) -> Result<(), EmitError> {
        let ops = self.unit.instr_operands(instr);
        match ops.class {
            InstrClass::Binop => binop::emit(text, self.unit, &ops),
            InstrClass::Cmp2 => cmp::emit_cmp2(text, self.unit, &ops),
            InstrClass::CmpBranch => cmp::emit_cmp_branch(text, fx, self.unit, &ops),
            InstrClass::Br => branch::emit_br(text, fx, self.unit, &ops),
            InstrClass::Switch => branch::emit_switch(text, fx, self.unit, &ops),
            InstrClass::Load => store_load::emit_load(text, self.unit, &ops),
            InstrClass::Store => store_load::emit_store(text, self.unit, &ops),
            InstrClass::Move => mov::emit_move(text, self.unit, &ops),
            InstrClass::Select => mov::emit_select(text, self.unit, &ops),
            InstrClass::Lea => lea::emit(text, self.unit, &ops),
            InstrClass::Cast => cast::emit(text, self.unit, &ops),
            InstrClass::Call => call::emit_call(text, self.unit, &ops),
            InstrClass::VmOp => call::emit_vm_op(text, self.unit, &ops),
            InstrClass::Mla => call::emit_mla(text, self.unit, &ops),
            InstrClass::Alloca => stack::emit_alloca(text, self.unit, &ops),
            InstrClass::VaArg => stack::emit_vaarg(text, self.unit, &ops),
            InstrClass::StackCopy => stack::emit_stack_copy(text, self.unit, &ops),
            InstrClass::StackShrink => stack::emit_stack_shrink(text, &ops),
            InstrClass::Ret => ret::emit(text, self.unit, &ops),
            InstrClass::Unreachable => {
                text.emit_op(crate::opcode::Opcode::Unreachable, &[])?;
                Ok(())
            }
        }
    }
}

/// Register offset or materialised-immediate slot for a value. Most
/// emitters need to know both "is this a register or a constant" and, if a
/// register, its offset — this reads both off [`ValueTable`] in one call.
pub(crate) fn classify<V: ValueTable>(table: &V, id: crate::external::ValueId) -> (ValueClass, i16) {
    let class = table.value_class(id);
    let reg = if class == ValueClass::RegFrame {
        table.value_reg(id)
    } else {
        0
    };
    (class, reg)
}

/// Bit width in 8/16/32/64, for opcode family selection. Panics on
/// [`crate::types::IrType::Int1`]/`IntX` widths the closed opcode set has
/// no dedicated family for — callers only reach here for the four named
/// integer widths or float/double, which this crate's instruction classes
/// restrict operand types to.
pub(crate) fn int_width(ty: crate::types::IrType) -> u8 {
    match ty.bits() {
        8 => 8,
        16 => 16,
        32 => 32,
        64 => 64,
        other => panic!("unsupported integer width {other} reached the emitter"),
    }
}
