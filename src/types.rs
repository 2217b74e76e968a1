//! The closed set of IR types and value classes consumed from the frontend.

/// A type reported by the external type table (`§6`, `type_info`).
///
/// Pointers are always 32 bits wide; `IntX` carries an explicit bit width for
/// generic small integers that don't fit the named widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IrType {
    Int1,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Pointer,
    Function,
    IntX(u16),
}

impl IrType {
    /// Bit width of a value of this type. `Function`/`Pointer` are 32-bit
    /// guest addresses.
    pub const fn bits(self) -> u16 {
        match self {
            IrType::Int1 => 1,
            IrType::Int8 => 8,
            IrType::Int16 => 16,
            IrType::Int32 => 32,
            IrType::Int64 => 64,
            IrType::Float => 32,
            IrType::Double => 64,
            IrType::Pointer => 32,
            IrType::Function => 32,
            IrType::IntX(bits) => bits,
        }
    }

    /// Byte width of a value of this type, rounded up.
    pub const fn bytes(self) -> u16 {
        (self.bits() + 7) / 8
    }

    pub const fn is_float(self) -> bool {
        matches!(self, IrType::Float | IrType::Double)
    }

    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }
}

/// How an operand's bits are materialised (`§3`, IR value classes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    /// Lives at a 16-bit frame offset relative to `RF`.
    RegFrame,
    /// Literal bits known at emit time.
    Constant,
    /// A 32-bit guest address known at emit time.
    GlobalVar,
    /// An index into the function table, materialised as a 32-bit address.
    Function,
}

impl ValueClass {
    pub const fn is_constant_like(self) -> bool {
        matches!(
            self,
            ValueClass::Constant | ValueClass::GlobalVar | ValueClass::Function
        )
    }
}

/// The instruction class an IR instruction reports during traversal (`§6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrClass {
    Ret,
    Binop,
    Load,
    Cmp2,
    Br,
    Move,
    Store,
    Lea,
    Cast,
    Call,
    Switch,
    Alloca,
    VaArg,
    Select,
    VmOp,
    StackCopy,
    StackShrink,
    Unreachable,
    CmpBranch,
    Mla,
}

/// Binary arithmetic/bitwise operator carried by a `Binop` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    UDiv,
    SDiv,
    URem,
    SRem,
    Shl,
    LShr,
    AShr,
    And,
    Or,
    Xor,
}

/// Integer or floating-point comparison predicate carried by `Cmp2`/`CmpBranch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Eq,
    Ne,
    Ugt,
    Uge,
    Ult,
    Ule,
    Sgt,
    Sge,
    Slt,
    Sle,
    /// Ordered equal: `!isnan(a) && !isnan(b) && a == b`.
    Oeq,
    Ogt,
    Oge,
    Olt,
    Ole,
    One,
    Ord,
    Uno,
    Ueq,
    Fugt,
    Fuge,
    Fult,
    Fule,
    Une,
}

impl Predicate {
    /// Swap the predicate's operand order (`lhs`/`rhs` exchanged): reverses
    /// `<`/`>` families, keeps equality untouched, and is unaffected by the
    /// ordered/unordered wrapper (`§4.C`, Cmp2 "swapPred").
    pub const fn swapped(self) -> Predicate {
        use Predicate::*;
        match self {
            Eq => Eq,
            Ne => Ne,
            Ugt => Ult,
            Uge => Ule,
            Ult => Ugt,
            Ule => Uge,
            Sgt => Slt,
            Sge => Sle,
            Slt => Sgt,
            Sle => Sge,
            Oeq => Oeq,
            Ogt => Olt,
            Oge => Ole,
            Olt => Ogt,
            Ole => Oge,
            One => One,
            Ord => Ord,
            Uno => Uno,
            Ueq => Ueq,
            Fugt => Fult,
            Fuge => Fule,
            Fult => Fugt,
            Fule => Fuge,
            Une => Une,
        }
    }
}

/// Cast kind carried by a `Cast` instruction (`§4.C`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    Trunc,
    Zext,
    Sext,
    FpToSi,
    FpToUi,
    SiToFp,
    UiToFp,
    FpExt,
    FpTrunc,
    Bitcast,
    IntToPtr,
    PtrToInt,
}
