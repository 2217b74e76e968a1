//! Scalar arithmetic and comparison execution (`§4.A`, `§4.C`, `§9`).
//!
//! One function per integer width computes the full [`BinOp`] set on that
//! width's unsigned representation, reinterpreting to the signed twin only
//! where the operator is sign-sensitive (`SDiv`/`SRem`/`AShr`). Comparisons
//! are split the same way: [`int_cmp`] takes the raw bit pattern and the
//! [`Predicate`]'s own U/S flavour tells it which reinterpretation to use,
//! while [`float_cmp`] carries the ordered/unordered NaN handling the
//! original's `UNO_DBL`/`UNO_FLT` opcodes got backwards (`§9`, Open
//! Questions) — this tests both operands for NaN, not operand one twice.

use crate::stop::StopReason;
use crate::types::{BinOp, Predicate};

macro_rules! int_binop_fn {
    ($name:ident, $u:ty, $i:ty) => {
        pub fn $name(op: BinOp, a: $u, b: $u) -> Result<$u, StopReason> {
            Ok(match op {
                BinOp::Add => a.wrapping_add(b),
                BinOp::Sub => a.wrapping_sub(b),
                BinOp::Mul => a.wrapping_mul(b),
                BinOp::UDiv => a.checked_div(b).ok_or(StopReason::BadInstruction)?,
                BinOp::SDiv => {
                    let r = (a as $i)
                        .checked_div(b as $i)
                        .ok_or(StopReason::BadInstruction)?;
                    r as $u
                }
                BinOp::URem => a.checked_rem(b).ok_or(StopReason::BadInstruction)?,
                BinOp::SRem => {
                    let r = (a as $i)
                        .checked_rem(b as $i)
                        .ok_or(StopReason::BadInstruction)?;
                    r as $u
                }
                BinOp::Shl => a.wrapping_shl(b as u32),
                BinOp::LShr => a.wrapping_shr(b as u32),
                BinOp::AShr => ((a as $i).wrapping_shr(b as u32)) as $u,
                BinOp::And => a & b,
                BinOp::Or => a | b,
                BinOp::Xor => a ^ b,
            })
        }
    };
}

int_binop_fn!(binop_u8, u8, i8);
int_binop_fn!(binop_u16, u16, i16);
int_binop_fn!(binop_u32, u32, i32);
int_binop_fn!(binop_u64, u64, i64);

pub fn binop_f32(op: BinOp, a: f32, b: f32) -> f32 {
    match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::UDiv | BinOp::SDiv => a / b,
        _ => unreachable!("float binop limited to Add/Sub/Mul/Div by the emitter"),
    }
}

pub fn binop_f64(op: BinOp, a: f64, b: f64) -> f64 {
    match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::UDiv | BinOp::SDiv => a / b,
        _ => unreachable!("float binop limited to Add/Sub/Mul/Div by the emitter"),
    }
}

macro_rules! int_cmp_fn {
    ($name:ident, $u:ty, $i:ty) => {
        /// Evaluate an integer `Predicate` over two same-width bit patterns.
        /// Only the ten integer predicates (`Eq`..`Sle`) are valid input.
        pub fn $name(pred: Predicate, a: $u, b: $u) -> bool {
            match pred {
                Predicate::Eq => a == b,
                Predicate::Ne => a != b,
                Predicate::Ugt => a > b,
                Predicate::Uge => a >= b,
                Predicate::Ult => a < b,
                Predicate::Ule => a <= b,
                Predicate::Sgt => (a as $i) > (b as $i),
                Predicate::Sge => (a as $i) >= (b as $i),
                Predicate::Slt => (a as $i) < (b as $i),
                Predicate::Sle => (a as $i) <= (b as $i),
                _ => unreachable!("non-integer predicate reached int_cmp"),
            }
        }
    };
}

int_cmp_fn!(int_cmp8, u8, i8);
int_cmp_fn!(int_cmp16, u16, i16);
int_cmp_fn!(int_cmp32, u32, i32);
int_cmp_fn!(int_cmp64, u64, i64);

/// Evaluate a float `Predicate`. The ordered family (`Oeq`..`Ord`) is false
/// whenever either operand is NaN; the unordered family (`Uno`..`Une`) is
/// true whenever either operand is NaN, deliberately testing *both*
/// operands unlike the source project's corresponding macros.
pub fn float_cmp(pred: Predicate, a: f64, b: f64) -> bool {
    let either_nan = a.is_nan() || b.is_nan();
    match pred {
        Predicate::Oeq => !either_nan && a == b,
        Predicate::Ogt => !either_nan && a > b,
        Predicate::Oge => !either_nan && a >= b,
        Predicate::Olt => !either_nan && a < b,
        Predicate::Ole => !either_nan && a <= b,
        Predicate::One => !either_nan && a != b,
        Predicate::Ord => !either_nan,
        Predicate::Uno => either_nan,
        Predicate::Ueq => either_nan || a == b,
        Predicate::Fugt => either_nan || a > b,
        Predicate::Fuge => either_nan || a >= b,
        Predicate::Fult => either_nan || a < b,
        Predicate::Fule => either_nan || a <= b,
        Predicate::Une => either_nan || a != b,
        _ => unreachable!("non-float predicate reached float_cmp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_stops_rather_than_panics() {
        assert!(matches!(
            binop_u32(BinOp::UDiv, 7, 0),
            Err(StopReason::BadInstruction)
        ));
        assert!(matches!(
            binop_u32(BinOp::SDiv, 7, 0),
            Err(StopReason::BadInstruction)
        ));
    }

    #[test]
    fn signed_division_uses_signed_semantics() {
        // -8 as u32, divided by 2: signed -4, not the huge unsigned quotient.
        let a = (-8i32) as u32;
        assert_eq!(binop_u32(BinOp::SDiv, a, 2).unwrap() as i32, -4);
        assert_eq!(binop_u32(BinOp::UDiv, a, 2).unwrap(), a / 2);
    }

    #[test]
    fn ordered_compare_rejects_any_nan_operand() {
        assert!(!float_cmp(Predicate::Oeq, f64::NAN, 1.0));
        assert!(!float_cmp(Predicate::Oeq, 1.0, f64::NAN));
        assert!(float_cmp(Predicate::Oeq, 1.0, 1.0));
    }

    #[test]
    fn unordered_compare_accepts_either_operand_nan() {
        assert!(float_cmp(Predicate::Une, f64::NAN, 1.0));
        assert!(float_cmp(Predicate::Une, 1.0, f64::NAN));
        assert!(!float_cmp(Predicate::Une, 1.0, 1.0));
    }

    #[test]
    fn unsigned_compare_is_not_signed() {
        let a = (-1i32) as u32; // 0xFFFFFFFF
        assert!(int_cmp32(Predicate::Ugt, a, 1));
        assert!(!int_cmp32(Predicate::Sgt, a, 1));
    }

    /// Force a NaN bit pattern out of arbitrary bits rather than relying on
    /// quickcheck to stumble into one: set the exponent field to all ones
    /// and the low mantissa bit, which is NaN regardless of everything else
    /// `bits` contributes.
    fn inject_nan(bits: u64) -> f64 {
        f64::from_bits(0x7ff0_0000_0000_0001 | (bits & 0x000f_ffff_ffff_fffe))
    }

    #[quickcheck_macros::quickcheck]
    fn nan_operand_satisfies_ordered_and_unordered_laws(nan_bits: u64, other_bits: u64) -> bool {
        let a = inject_nan(nan_bits);
        let b = f64::from_bits(other_bits);

        const ORDERED: [Predicate; 7] = [
            Predicate::Oeq,
            Predicate::Ogt,
            Predicate::Oge,
            Predicate::Olt,
            Predicate::Ole,
            Predicate::One,
            Predicate::Ord,
        ];
        const UNORDERED: [Predicate; 7] = [
            Predicate::Uno,
            Predicate::Ueq,
            Predicate::Fugt,
            Predicate::Fuge,
            Predicate::Fult,
            Predicate::Fule,
            Predicate::Une,
        ];

        ORDERED.iter().all(|&p| !float_cmp(p, a, b))
            && ORDERED.iter().all(|&p| !float_cmp(p, b, a))
            && UNORDERED.iter().all(|&p| float_cmp(p, a, b))
            && UNORDERED.iter().all(|&p| float_cmp(p, b, a))
    }
}
