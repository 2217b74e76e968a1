//! Quickcheck properties over [`regvm::emit::Emitter`] output (`§8`):
//! idempotent re-emission and switch totality. Opcode round-trip and the
//! float-comparison NaN laws are quantified over pure functions with no
//! [`regvm::test_support::Builder`] dependency, so they live next to
//! [`regvm::opcode::Opcode::from_handle`] and
//! [`regvm::exec::alu::float_cmp`] themselves instead of here.

use std::collections::BTreeSet;

use quickcheck::TestResult;
use regvm::driver::call;
use regvm::emit::Emitter;
use regvm::external::InstrOperands;
use regvm::test_support::{empty_operands, Builder};
use regvm::types::{BinOp, InstrClass, IrType};
use regvm::unit::Unit;

#[quickcheck_macros::quickcheck]
fn emitting_the_same_function_twice_is_byte_identical(imm: i32) -> bool {
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("add_const", &[IrType::Int32]);
    let sum = fb.reg(IrType::Int32);
    let blk = fb.block();
    let c = fb.const_value(IrType::Int32, imm as u32 as u64);
    fb.push(
        blk,
        InstrOperands {
            result: Some(sum),
            args: vec![args[0], c],
            bin_op: Some(BinOp::Add),
            ..empty_operands(InstrClass::Binop, IrType::Int32)
        },
    );
    fb.push(blk, InstrOperands { args: vec![sum], ..empty_operands(InstrClass::Ret, IrType::Int32) });

    let first = Emitter::new(&b).emit_function(f).unwrap();
    let second = Emitter::new(&b).emit_function(f).unwrap();
    first.text == second.text && first.frame_size == second.frame_size && first.arg_area_size == second.arg_area_size
}

/// Sparse (non-contiguous) case keys always take the binary-search switch
/// forms, which never alias: every listed key dispatches to its own case,
/// and anything else — including a value deliberately placed outside the
/// whole key range — dispatches to the default, no matter how many cases
/// there are. Keys are kept non-negative and spaced 1000 apart so the i64
/// sort order emission uses and the u32 runtime comparison agree, and so
/// the spacing itself guarantees non-contiguity once there are two or more.
#[quickcheck_macros::quickcheck]
fn sparse_switch_dispatch_is_total(seed: Vec<u16>) -> TestResult {
    let keys: Vec<i64> = seed.into_iter().map(|k| k as i64 * 1000).collect::<BTreeSet<_>>().into_iter().take(8).collect();
    if keys.len() < 2 {
        return TestResult::discard();
    }

    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("dispatch", &[IrType::Int32]);
    let entry = fb.block();
    let default_blk = fb.block();
    let case_blocks: Vec<_> = keys.iter().map(|_| fb.block()).collect();

    let mut targets = vec![default_blk];
    targets.extend(case_blocks.iter().copied());
    fb.push(
        entry,
        InstrOperands {
            args: vec![args[0]],
            targets,
            case_keys: keys.clone(),
            ..empty_operands(InstrClass::Switch, IrType::Int32)
        },
    );

    const DEFAULT_VALUE: i32 = -1;
    let c = fb.const_value(IrType::Int32, DEFAULT_VALUE as u32 as u64);
    fb.push(default_blk, InstrOperands { args: vec![c], ..empty_operands(InstrClass::Ret, IrType::Int32) });
    for (i, &blk) in case_blocks.iter().enumerate() {
        let c = fb.const_value(IrType::Int32, i as u64);
        fb.push(blk, InstrOperands { args: vec![c], ..empty_operands(InstrClass::Ret, IrType::Int32) });
    }

    let mut unit = Unit::new();
    let func = Emitter::new(&b).emit_function(f).unwrap();
    let idx = unit.push_function(func);

    for (i, &key) in keys.iter().enumerate() {
        let result = call(&mut unit, idx, &[key as u32]).unwrap() as i32;
        if result != i as i32 {
            return TestResult::failed();
        }
    }

    let probe = keys.last().copied().unwrap() + 1;
    let result = call(&mut unit, idx, &[probe as u32]).unwrap() as i32;
    TestResult::from_bool(result == DEFAULT_VALUE)
}
