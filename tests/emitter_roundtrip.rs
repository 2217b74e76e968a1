//! End-to-end coverage of [`regvm::emit::Emitter`] driven by
//! [`regvm::test_support::Builder`]: build IR, lower it, register it with a
//! [`regvm::unit::Unit`], and drive it through [`regvm::driver::call`] —
//! exercising the same path an embedder would, without a real frontend.

use regvm::driver::call;
use regvm::emit::Emitter;
use regvm::external::InstrOperands;
use regvm::stop::StopReason;
use regvm::test_support::{empty_operands, Builder};
use regvm::types::{BinOp, InstrClass, IrType, Predicate};
use regvm::unit::Unit;

fn lower_and_register(b: &Builder, unit: &mut Unit, f: u32) -> u32 {
    let func = Emitter::new(b).emit_function(f).unwrap();
    unit.push_function(func)
}

#[test]
fn binop_add_round_trips_two_arguments() {
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("add", &[IrType::Int32, IrType::Int32]);
    let sum = fb.reg(IrType::Int32);
    let blk = fb.block();
    fb.push(
        blk,
        InstrOperands {
            result: Some(sum),
            args: vec![args[0], args[1]],
            bin_op: Some(BinOp::Add),
            ..empty_operands(InstrClass::Binop, IrType::Int32)
        },
    );
    fb.push(
        blk,
        InstrOperands { args: vec![sum], ..empty_operands(InstrClass::Ret, IrType::Int32) },
    );

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    let result = call(&mut unit, idx, &[19, 23]).unwrap();
    assert_eq!(result as u32, 42);
}

#[test]
fn cmp_branch_fusion_dispatches_true_arm_by_jump_and_false_arm_by_fallthrough() {
    // The fused compare-branch only carries a displacement for the true
    // arm (`§4.C`); the false arm is whatever block the emitter places
    // immediately next, so `false_blk` must be declared (and therefore
    // emitted) right after `entry`, ahead of `true_blk`.
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("gt_ten", &[IrType::Int32]);
    let entry = fb.block();
    let false_blk = fb.block();
    let true_blk = fb.block();

    let ten = fb.const_value(IrType::Int32, 10);
    fb.push(
        entry,
        InstrOperands {
            args: vec![args[0], ten],
            predicate: Some(Predicate::Sgt),
            targets: vec![true_blk, false_blk],
            ..empty_operands(InstrClass::CmpBranch, IrType::Int32)
        },
    );
    let zero = fb.const_value(IrType::Int32, 0);
    fb.push(
        false_blk,
        InstrOperands { args: vec![zero], ..empty_operands(InstrClass::Ret, IrType::Int32) },
    );
    let one = fb.const_value(IrType::Int32, 1);
    fb.push(
        true_blk,
        InstrOperands { args: vec![one], ..empty_operands(InstrClass::Ret, IrType::Int32) },
    );

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    assert_eq!(call(&mut unit, idx, &[20]).unwrap() as u32, 1, "20 > 10 takes the jumped-to true arm");
    assert_eq!(call(&mut unit, idx, &[5]).unwrap() as u32, 0, "5 > 10 is false, falls through");
}

#[test]
fn nan_immediate_in_comparison_is_rejected_at_emit_time() {
    use regvm::error::EmitError;

    let mut b = Builder::new();
    let (_f, args, mut fb) = b.function("cmp_nan", &[IrType::Float]);
    let nan = fb.const_value(IrType::Float, f32::NAN.to_bits() as u64);
    let result = fb.reg(IrType::Int1);
    let blk = fb.block();
    fb.push(
        blk,
        InstrOperands {
            result: Some(result),
            args: vec![args[0], nan],
            predicate: Some(Predicate::Oeq),
            ..empty_operands(InstrClass::Cmp2, IrType::Float)
        },
    );

    let err = Emitter::new(&b).emit_function(_f).unwrap_err();
    assert!(matches!(err, EmitError::NanImmediateInComparison));
}

#[test]
fn unordered_predicate_is_true_when_either_operand_is_nan() {
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("is_unordered", &[IrType::Float]);
    let y = fb.const_value(IrType::Float, 1.0f32.to_bits() as u64);
    let result = fb.reg(IrType::Int8);
    let blk = fb.block();
    fb.push(
        blk,
        InstrOperands {
            result: Some(result),
            args: vec![args[0], y],
            predicate: Some(Predicate::Uno),
            ..empty_operands(InstrClass::Cmp2, IrType::Float)
        },
    );
    fb.push(
        blk,
        InstrOperands { args: vec![result], ..empty_operands(InstrClass::Ret, IrType::Int8) },
    );

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    let nan_bits = f32::NAN.to_bits();
    let result = call(&mut unit, idx, &[nan_bits]).unwrap();
    assert_eq!(result as u8, 1);
}

#[test]
fn alloca_store_load_round_trips_through_guest_memory() {
    let mut b = Builder::new();
    let (f, _args, mut fb) = b.function("alloca_roundtrip", &[]);
    let ptr = fb.reg(IrType::Pointer);
    let size = fb.const_value(IrType::Int32, 4);
    let value = fb.const_value(IrType::Int32, 0xbeef);
    let loaded = fb.reg(IrType::Int32);
    let blk = fb.block();

    fb.push(
        blk,
        InstrOperands {
            result: Some(ptr),
            args: vec![size],
            imm: Some(4),
            ..empty_operands(InstrClass::Alloca, IrType::Int32)
        },
    );
    fb.push(
        blk,
        InstrOperands { args: vec![ptr, value], ..empty_operands(InstrClass::Store, IrType::Int32) },
    );
    fb.push(
        blk,
        InstrOperands {
            result: Some(loaded),
            args: vec![ptr],
            ..empty_operands(InstrClass::Load, IrType::Int32)
        },
    );
    fb.push(
        blk,
        InstrOperands { args: vec![loaded], ..empty_operands(InstrClass::Ret, IrType::Int32) },
    );

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    let before = unit.memory.alloca_ptr();
    let result = call(&mut unit, idx, &[]).unwrap();
    assert_eq!(result as u32, 0xbeef);
    assert_eq!(unit.memory.alloca_ptr(), before, "alloca pointer must be restored after the call returns");
}

#[test]
fn dense_switch_dispatches_by_masked_case_key() {
    // Four contiguous i32 cases (0..=3) fit under `JUMPTABLE_MAX_CASES` and
    // route through the masked jumptable rather than binary search.
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("classify", &[IrType::Int32]);
    let entry = fb.block();
    let default_blk = fb.block();
    let case0 = fb.block();
    let case1 = fb.block();
    let case2 = fb.block();
    let case3 = fb.block();

    fb.push(
        entry,
        InstrOperands {
            args: vec![args[0]],
            targets: vec![default_blk, case0, case1, case2, case3],
            case_keys: vec![0, 1, 2, 3],
            ..empty_operands(InstrClass::Switch, IrType::Int32)
        },
    );
    for (blk, v) in [(default_blk, 999u32), (case0, 10), (case1, 20), (case2, 30), (case3, 40)] {
        let c = fb.const_value(IrType::Int32, v as u64);
        fb.push(blk, InstrOperands { args: vec![c], ..empty_operands(InstrClass::Ret, IrType::Int32) });
    }

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    for (selector, expected) in [(0u32, 10u32), (1, 20), (2, 30), (3, 40)] {
        assert_eq!(call(&mut unit, idx, &[selector]).unwrap() as u32, expected);
    }
    // A table sized to the next power of two (4) masks selector 4 onto the
    // same slot as key 0 rather than falling through to the default arm —
    // aliasing, not a bounds check, is the documented trade for this form.
    assert_eq!(call(&mut unit, idx, &[4]).unwrap() as u32, 10);
}

#[test]
fn sparse_switch64_bs_dispatches_widely_spaced_keys() {
    // Non-contiguous i64 keys can't fit a masked table of any reasonable
    // size, so this always takes the `SWITCH64_BS` binary-search path. The
    // call ABI only marshals 32-bit arguments, so the i32 argument is
    // widened to i64 before the switch — the keys themselves still span
    // close to the full 32-bit range, wide enough that the old (pre-fix)
    // 4-byte `Switch8Bs` key-width bug would not have caught this, but a
    // `Switch64Bs` key-width mismatch would.
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("sparse", &[IrType::Int32]);
    let entry = fb.block();
    let selector64 = fb.reg(IrType::Int64);
    let default_blk = fb.block();
    let low = fb.block();
    let mid = fb.block();
    let high = fb.block();

    fb.push(
        entry,
        InstrOperands {
            result: Some(selector64),
            args: vec![args[0]],
            cast_kind: Some(regvm::types::CastKind::Zext),
            ..empty_operands(InstrClass::Cast, IrType::Int64)
        },
    );
    let keys = [100i64, 1_000_000, 4_000_000_000];
    fb.push(
        entry,
        InstrOperands {
            args: vec![selector64],
            targets: vec![default_blk, low, mid, high],
            case_keys: keys.to_vec(),
            ..empty_operands(InstrClass::Switch, IrType::Int64)
        },
    );
    for (blk, v) in [(default_blk, 0u64), (low, 1), (mid, 2), (high, 3)] {
        let c = fb.const_value(IrType::Int64, v);
        fb.push(blk, InstrOperands { args: vec![c], ..empty_operands(InstrClass::Ret, IrType::Int64) });
    }

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    for (selector, expected) in [(100u32, 1u64), (1_000_000, 2), (4_000_000_000, 3), (42, 0)] {
        assert_eq!(call(&mut unit, idx, &[selector]).unwrap(), expected, "selector {selector}");
    }
}

#[test]
fn switch_with_no_cases_always_takes_the_default() {
    let mut b = Builder::new();
    let (f, args, mut fb) = b.function("always_default", &[IrType::Int32]);
    let entry = fb.block();
    let default_blk = fb.block();

    fb.push(
        entry,
        InstrOperands {
            args: vec![args[0]],
            targets: vec![default_blk],
            case_keys: vec![],
            ..empty_operands(InstrClass::Switch, IrType::Int32)
        },
    );
    let c = fb.const_value(IrType::Int32, 7);
    fb.push(
        default_blk,
        InstrOperands { args: vec![c], ..empty_operands(InstrClass::Ret, IrType::Int32) },
    );

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    for selector in [0u32, 1, 4, u32::MAX] {
        assert_eq!(call(&mut unit, idx, &[selector]).unwrap() as u32, 7, "selector {selector}");
    }
}

#[test]
fn unreachable_propagates_as_a_stop_reason() {
    let mut b = Builder::new();
    let (f, _args, mut fb) = b.function("trap", &[]);
    let blk = fb.block();
    fb.push(blk, empty_operands(InstrClass::Unreachable, IrType::Int32));

    let mut unit = Unit::new();
    let idx = lower_and_register(&b, &mut unit, f);
    let err = call(&mut unit, idx, &[]).unwrap_err();
    assert!(matches!(err, StopReason::Unreachable));
}
