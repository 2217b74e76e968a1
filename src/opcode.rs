//! The closed opcode set (`§4.A`).
//!
//! Variants are declared in a single block with implicit, contiguous
//! discriminants `0..COUNT`; both dispatch strategies in [`crate::exec`]
//! index off that discriminant, so the declaration order here fixes the
//! opcode handle space for the whole crate. Appending a new family at the
//! end is safe; reordering or removing a variant is not, since it would
//! silently renumber every handle after it.

use strum::EnumCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumCount)]
#[repr(u16)]
pub enum Opcode {
    // control: misc
    Nop, B, Bcond, Unreachable, JsrVm, JsrExt,
    JsrR, JitCall, InstrumentCount,

    // control: return
    RetVoid, RetR8, RetR16, RetR32, RetR64, RetR32C,
    RetR64C,

    // control: switch
    Jumptable, Switch8Bs, Switch32Bs, Switch64Bs,

    // control: fused compare-and-branch (i8/i32 only)
    Eq8Br, Eq8CBr, Eq32Br, Eq32CBr, Ne8Br, Ne8CBr,
    Ne32Br, Ne32CBr, Ugt8Br, Ugt8CBr, Ugt32Br, Ugt32CBr,
    Uge8Br, Uge8CBr, Uge32Br, Uge32CBr, Ult8Br, Ult8CBr,
    Ult32Br, Ult32CBr, Ule8Br, Ule8CBr, Ule32Br, Ule32CBr,
    Sgt8Br, Sgt8CBr, Sgt32Br, Sgt32CBr, Sge8Br, Sge8CBr,
    Sge32Br, Sge32CBr, Slt8Br, Slt8CBr, Slt32Br, Slt32CBr,
    Sle8Br, Sle8CBr, Sle32Br, Sle32CBr,

    // arithmetic/bitwise: 8-bit
    Add8, Add8C, Sub8, Sub8C, Mul8, Mul8C,
    UDiv8, UDiv8C, SDiv8, SDiv8C, URem8, URem8C,
    SRem8, SRem8C, Shl8, Shl8C, LShr8, LShr8C,
    AShr8, AShr8C, And8, And8C, Or8, Or8C,
    Xor8, Xor8C,

    // arithmetic/bitwise: 16-bit
    Add16, Add16C, Sub16, Sub16C, Mul16, Mul16C,
    UDiv16, UDiv16C, SDiv16, SDiv16C, URem16, URem16C,
    SRem16, SRem16C, Shl16, Shl16C, LShr16, LShr16C,
    AShr16, AShr16C, And16, And16C, Or16, Or16C,
    Xor16, Xor16C,

    // arithmetic/bitwise: 32-bit
    Add32, Add32C, Sub32, Sub32C, Mul32, Mul32C,
    UDiv32, UDiv32C, SDiv32, SDiv32C, URem32, URem32C,
    SRem32, SRem32C, Shl32, Shl32C, LShr32, LShr32C,
    AShr32, AShr32C, And32, And32C, Or32, Or32C,
    Xor32, Xor32C,

    // arithmetic/bitwise: 64-bit
    Add64, Add64C, Sub64, Sub64C, Mul64, Mul64C,
    UDiv64, UDiv64C, SDiv64, SDiv64C, URem64, URem64C,
    SRem64, SRem64C, Shl64, Shl64C, LShr64, LShr64C,
    AShr64, AShr64C, And64, And64C, Or64, Or64C,
    Xor64, Xor64C,

    // arithmetic: 32-bit accumulator forms
    Add32Acc, Add32AccC, Add322Acc, Add322AccC, Sub32Acc, Sub32AccC,
    Sub322Acc, Sub322AccC, Mul32Acc, Mul32AccC, Mul322Acc, Mul322AccC,
    UDiv32Acc, UDiv32AccC, UDiv322Acc, UDiv322AccC, SDiv32Acc, SDiv32AccC,
    SDiv322Acc, SDiv322AccC, URem32Acc, URem32AccC, URem322Acc, URem322AccC,
    SRem32Acc, SRem32AccC, SRem322Acc, SRem322AccC, Shl32Acc, Shl32AccC,
    Shl322Acc, Shl322AccC, LShr32Acc, LShr32AccC, LShr322Acc, LShr322AccC,
    AShr32Acc, AShr32AccC, AShr322Acc, AShr322AccC, And32Acc, And32AccC,
    And322Acc, And322AccC, Or32Acc, Or32AccC, Or322Acc, Or322AccC,
    Xor32Acc, Xor32AccC, Xor322Acc, Xor322AccC,

    // arithmetic: inc/dec specialisations
    Inc32, Dec32,

    // floating-point arithmetic
    AddF, AddFC, AddD, AddDC, SubF, SubFC,
    SubD, SubDC, MulF, MulFC, MulD, MulDC,
    DivF, DivFC, DivD, DivDC,

    // integer compare
    Eq8, Eq8C, Eq16, Eq16C, Eq32, Eq32C,
    Eq64, Eq64C, Ne8, Ne8C, Ne16, Ne16C,
    Ne32, Ne32C, Ne64, Ne64C, Ugt8, Ugt8C,
    Ugt16, Ugt16C, Ugt32, Ugt32C, Ugt64, Ugt64C,
    Uge8, Uge8C, Uge16, Uge16C, Uge32, Uge32C,
    Uge64, Uge64C, Ult8, Ult8C, Ult16, Ult16C,
    Ult32, Ult32C, Ult64, Ult64C, Ule8, Ule8C,
    Ule16, Ule16C, Ule32, Ule32C, Ule64, Ule64C,
    Sgt8, Sgt8C, Sgt16, Sgt16C, Sgt32, Sgt32C,
    Sgt64, Sgt64C, Sge8, Sge8C, Sge16, Sge16C,
    Sge32, Sge32C, Sge64, Sge64C, Slt8, Slt8C,
    Slt16, Slt16C, Slt32, Slt32C, Slt64, Slt64C,
    Sle8, Sle8C, Sle16, Sle16C, Sle32, Sle32C,
    Sle64, Sle64C,

    // floating-point compare (ordered/unordered)
    OeqF, OeqFC, OeqD, OeqDC, OgtF, OgtFC,
    OgtD, OgtDC, OgeF, OgeFC, OgeD, OgeDC,
    OltF, OltFC, OltD, OltDC, OleF, OleFC,
    OleD, OleDC, OneF, OneFC, OneD, OneDC,
    OrdF, OrdFC, OrdD, OrdDC, UnoF, UnoFC,
    UnoD, UnoDC, UeqF, UeqFC, UeqD, UeqDC,
    FugtF, FugtFC, FugtD, FugtDC, FugeF, FugeFC,
    FugeD, FugeDC, FultF, FultFC, FultD, FultDC,
    FuleF, FuleFC, FuleD, FuleDC, UneF, UneFC,
    UneD, UneDC,

    // memory: load
    Load8, Load8Off, Load8Roff, Load8G, Load8Zext32, Load8Zext32Off,
    Load8Sext32, Load8Sext32Off, Load16, Load16Off, Load16Roff, Load16G,
    Load16Zext32, Load16Zext32Off, Load16Sext32, Load16Sext32Off, Load32, Load32Off,
    Load32Roff, Load32G, Load64, Load64Off, Load64Roff, Load64G,

    // memory: store
    Store8, Store8Off, Store8COff, Store8G, Store16, Store16Off,
    Store16COff, Store16G, Store32, Store32Off, Store32COff, Store32G,
    Store64, Store64Off, Store64COff, Store64G,

    // address computation
    LeaShl, LeaShl2, LeaShlOff, LeaMulOff,

    // casts
    Trunc64_32, Trunc64_16, Trunc64_8, Trunc32_16, Trunc32_8, Trunc16_8,
    Zext8_16, Zext8_32, Zext8_64, Zext16_32, Zext16_64, Zext32_64,
    Sext8_16, Sext8_32, Sext8_64, Sext16_32, Sext16_64, Sext32_64,
    FptosiF_8, FptosiF_16, FptosiF_32, FptosiF_64, FptosiD_8, FptosiD_16,
    FptosiD_32, FptosiD_64, FptouiF_8, FptouiF_16, FptouiF_32, FptouiF_64,
    FptouiD_8, FptouiD_16, FptouiD_32, FptouiD_64, Sitofp8_F, Sitofp8_D,
    Sitofp16_F, Sitofp16_D, Sitofp32_F, Sitofp32_D, Sitofp64_F, Sitofp64_D,
    Uitofp8_F, Uitofp8_D, Uitofp16_F, Uitofp16_D, Uitofp32_F, Uitofp32_D,
    Uitofp64_F, Uitofp64_D, Fpext, Fptrunc,

    // move
    Mov8, Mov32, Mov64, Mov8C, Mov16C, Mov32C,
    Mov64C,

    // select
    Select8Rr, Select8Rc, Select8Cr, Select8Cc, Select16Rr, Select16Rc,
    Select16Cr, Select16Cc, Select32Rr, Select32Rc, Select32Cr, Select32Cc,
    Select64Rr, Select64Rc, Select64Cr, Select64Cc,

    // stack
    Alloca, Allocad, StackSave, StackRestore, StackShrink, StackCopyR,
    StackCopyC,

    // intrinsics: mem/str
    Memcpy, Memset, Memmove, Memcmp, Strcpy, Strncpy,
    Strcmp, Strncmp, Strchr, Strrchr, Strlen,

    // intrinsics: bit counting
    Ctz32, Ctz64, Clz32, Clz64, Pop32, Pop64,

    // intrinsics: overflow/fused
    Uaddo32, Mla32, Abs32,

    // intrinsics: math
    Floor, FloorF, Sin, SinF, Cos, CosF,
    Pow, PowF, Fabs, FabsF, Fmod, FmodF,
    Log10, Log10F,

    // varargs
    Vastart, Vaarg32, Vaarg64, Vacopy,
}

impl Opcode {
    /// Total number of opcode variants, i.e. the size the dispatch handle
    /// space spans.
    pub const COUNT: usize = <Opcode as EnumCount>::COUNT;

    /// Decode a handle produced by [`Opcode::to_handle`] (and stored in
    /// text by the emitter) back into an opcode. `None` for any handle at
    /// or past [`Opcode::COUNT`], which dispatch reports as
    /// [`crate::stop::StopReason::BadInstruction`] rather than panicking.
    ///
    /// Declaration order here must track the `Opcode` enum exactly; the
    /// `handle_round_trips_for_every_opcode` test below catches drift.
    pub fn from_handle(handle: u16) -> Option<Opcode> {
        use Opcode::*;
        Some(match handle {
            // control: misc
            0 => Nop, 1 => B, 2 => Bcond, 3 => Unreachable, 4 => JsrVm, 5 => JsrExt,
            6 => JsrR, 7 => JitCall, 8 => InstrumentCount,

            // control: return
            9 => RetVoid, 10 => RetR8, 11 => RetR16, 12 => RetR32, 13 => RetR64, 14 => RetR32C,
            15 => RetR64C,

            // control: switch
            16 => Jumptable, 17 => Switch8Bs, 18 => Switch32Bs, 19 => Switch64Bs,

            // control: fused compare-and-branch (i8/i32 only)
            20 => Eq8Br, 21 => Eq8CBr, 22 => Eq32Br, 23 => Eq32CBr, 24 => Ne8Br, 25 => Ne8CBr,
            26 => Ne32Br, 27 => Ne32CBr, 28 => Ugt8Br, 29 => Ugt8CBr, 30 => Ugt32Br, 31 => Ugt32CBr,
            32 => Uge8Br, 33 => Uge8CBr, 34 => Uge32Br, 35 => Uge32CBr, 36 => Ult8Br, 37 => Ult8CBr,
            38 => Ult32Br, 39 => Ult32CBr, 40 => Ule8Br, 41 => Ule8CBr, 42 => Ule32Br, 43 => Ule32CBr,
            44 => Sgt8Br, 45 => Sgt8CBr, 46 => Sgt32Br, 47 => Sgt32CBr, 48 => Sge8Br, 49 => Sge8CBr,
            50 => Sge32Br, 51 => Sge32CBr, 52 => Slt8Br, 53 => Slt8CBr, 54 => Slt32Br, 55 => Slt32CBr,
            56 => Sle8Br, 57 => Sle8CBr, 58 => Sle32Br, 59 => Sle32CBr,

            // arithmetic/bitwise: 8-bit
            60 => Add8, 61 => Add8C, 62 => Sub8, 63 => Sub8C, 64 => Mul8, 65 => Mul8C,
            66 => UDiv8, 67 => UDiv8C, 68 => SDiv8, 69 => SDiv8C, 70 => URem8, 71 => URem8C,
            72 => SRem8, 73 => SRem8C, 74 => Shl8, 75 => Shl8C, 76 => LShr8, 77 => LShr8C,
            78 => AShr8, 79 => AShr8C, 80 => And8, 81 => And8C, 82 => Or8, 83 => Or8C,
            84 => Xor8, 85 => Xor8C,

            // arithmetic/bitwise: 16-bit
            86 => Add16, 87 => Add16C, 88 => Sub16, 89 => Sub16C, 90 => Mul16, 91 => Mul16C,
            92 => UDiv16, 93 => UDiv16C, 94 => SDiv16, 95 => SDiv16C, 96 => URem16, 97 => URem16C,
            98 => SRem16, 99 => SRem16C, 100 => Shl16, 101 => Shl16C, 102 => LShr16, 103 => LShr16C,
            104 => AShr16, 105 => AShr16C, 106 => And16, 107 => And16C, 108 => Or16, 109 => Or16C,
            110 => Xor16, 111 => Xor16C,

            // arithmetic/bitwise: 32-bit
            112 => Add32, 113 => Add32C, 114 => Sub32, 115 => Sub32C, 116 => Mul32, 117 => Mul32C,
            118 => UDiv32, 119 => UDiv32C, 120 => SDiv32, 121 => SDiv32C, 122 => URem32, 123 => URem32C,
            124 => SRem32, 125 => SRem32C, 126 => Shl32, 127 => Shl32C, 128 => LShr32, 129 => LShr32C,
            130 => AShr32, 131 => AShr32C, 132 => And32, 133 => And32C, 134 => Or32, 135 => Or32C,
            136 => Xor32, 137 => Xor32C,

            // arithmetic/bitwise: 64-bit
            138 => Add64, 139 => Add64C, 140 => Sub64, 141 => Sub64C, 142 => Mul64, 143 => Mul64C,
            144 => UDiv64, 145 => UDiv64C, 146 => SDiv64, 147 => SDiv64C, 148 => URem64, 149 => URem64C,
            150 => SRem64, 151 => SRem64C, 152 => Shl64, 153 => Shl64C, 154 => LShr64, 155 => LShr64C,
            156 => AShr64, 157 => AShr64C, 158 => And64, 159 => And64C, 160 => Or64, 161 => Or64C,
            162 => Xor64, 163 => Xor64C,

            // arithmetic: 32-bit accumulator forms
            164 => Add32Acc, 165 => Add32AccC, 166 => Add322Acc, 167 => Add322AccC, 168 => Sub32Acc, 169 => Sub32AccC,
            170 => Sub322Acc, 171 => Sub322AccC, 172 => Mul32Acc, 173 => Mul32AccC, 174 => Mul322Acc, 175 => Mul322AccC,
            176 => UDiv32Acc, 177 => UDiv32AccC, 178 => UDiv322Acc, 179 => UDiv322AccC, 180 => SDiv32Acc, 181 => SDiv32AccC,
            182 => SDiv322Acc, 183 => SDiv322AccC, 184 => URem32Acc, 185 => URem32AccC, 186 => URem322Acc, 187 => URem322AccC,
            188 => SRem32Acc, 189 => SRem32AccC, 190 => SRem322Acc, 191 => SRem322AccC, 192 => Shl32Acc, 193 => Shl32AccC,
            194 => Shl322Acc, 195 => Shl322AccC, 196 => LShr32Acc, 197 => LShr32AccC, 198 => LShr322Acc, 199 => LShr322AccC,
            200 => AShr32Acc, 201 => AShr32AccC, 202 => AShr322Acc, 203 => AShr322AccC, 204 => And32Acc, 205 => And32AccC,
            206 => And322Acc, 207 => And322AccC, 208 => Or32Acc, 209 => Or32AccC, 210 => Or322Acc, 211 => Or322AccC,
            212 => Xor32Acc, 213 => Xor32AccC, 214 => Xor322Acc, 215 => Xor322AccC,

            // arithmetic: inc/dec specialisations
            216 => Inc32, 217 => Dec32,

            // floating-point arithmetic
            218 => AddF, 219 => AddFC, 220 => AddD, 221 => AddDC, 222 => SubF, 223 => SubFC,
            224 => SubD, 225 => SubDC, 226 => MulF, 227 => MulFC, 228 => MulD, 229 => MulDC,
            230 => DivF, 231 => DivFC, 232 => DivD, 233 => DivDC,

            // integer compare
            234 => Eq8, 235 => Eq8C, 236 => Eq16, 237 => Eq16C, 238 => Eq32, 239 => Eq32C,
            240 => Eq64, 241 => Eq64C, 242 => Ne8, 243 => Ne8C, 244 => Ne16, 245 => Ne16C,
            246 => Ne32, 247 => Ne32C, 248 => Ne64, 249 => Ne64C, 250 => Ugt8, 251 => Ugt8C,
            252 => Ugt16, 253 => Ugt16C, 254 => Ugt32, 255 => Ugt32C, 256 => Ugt64, 257 => Ugt64C,
            258 => Uge8, 259 => Uge8C, 260 => Uge16, 261 => Uge16C, 262 => Uge32, 263 => Uge32C,
            264 => Uge64, 265 => Uge64C, 266 => Ult8, 267 => Ult8C, 268 => Ult16, 269 => Ult16C,
            270 => Ult32, 271 => Ult32C, 272 => Ult64, 273 => Ult64C, 274 => Ule8, 275 => Ule8C,
            276 => Ule16, 277 => Ule16C, 278 => Ule32, 279 => Ule32C, 280 => Ule64, 281 => Ule64C,
            282 => Sgt8, 283 => Sgt8C, 284 => Sgt16, 285 => Sgt16C, 286 => Sgt32, 287 => Sgt32C,
            288 => Sgt64, 289 => Sgt64C, 290 => Sge8, 291 => Sge8C, 292 => Sge16, 293 => Sge16C,
            294 => Sge32, 295 => Sge32C, 296 => Sge64, 297 => Sge64C, 298 => Slt8, 299 => Slt8C,
            300 => Slt16, 301 => Slt16C, 302 => Slt32, 303 => Slt32C, 304 => Slt64, 305 => Slt64C,
            306 => Sle8, 307 => Sle8C, 308 => Sle16, 309 => Sle16C, 310 => Sle32, 311 => Sle32C,
            312 => Sle64, 313 => Sle64C,

            // floating-point compare (ordered/unordered)
            314 => OeqF, 315 => OeqFC, 316 => OeqD, 317 => OeqDC, 318 => OgtF, 319 => OgtFC,
            320 => OgtD, 321 => OgtDC, 322 => OgeF, 323 => OgeFC, 324 => OgeD, 325 => OgeDC,
            326 => OltF, 327 => OltFC, 328 => OltD, 329 => OltDC, 330 => OleF, 331 => OleFC,
            332 => OleD, 333 => OleDC, 334 => OneF, 335 => OneFC, 336 => OneD, 337 => OneDC,
            338 => OrdF, 339 => OrdFC, 340 => OrdD, 341 => OrdDC, 342 => UnoF, 343 => UnoFC,
            344 => UnoD, 345 => UnoDC, 346 => UeqF, 347 => UeqFC, 348 => UeqD, 349 => UeqDC,
            350 => FugtF, 351 => FugtFC, 352 => FugtD, 353 => FugtDC, 354 => FugeF, 355 => FugeFC,
            356 => FugeD, 357 => FugeDC, 358 => FultF, 359 => FultFC, 360 => FultD, 361 => FultDC,
            362 => FuleF, 363 => FuleFC, 364 => FuleD, 365 => FuleDC, 366 => UneF, 367 => UneFC,
            368 => UneD, 369 => UneDC,

            // memory: load
            370 => Load8, 371 => Load8Off, 372 => Load8Roff, 373 => Load8G, 374 => Load8Zext32, 375 => Load8Zext32Off,
            376 => Load8Sext32, 377 => Load8Sext32Off, 378 => Load16, 379 => Load16Off, 380 => Load16Roff, 381 => Load16G,
            382 => Load16Zext32, 383 => Load16Zext32Off, 384 => Load16Sext32, 385 => Load16Sext32Off, 386 => Load32, 387 => Load32Off,
            388 => Load32Roff, 389 => Load32G, 390 => Load64, 391 => Load64Off, 392 => Load64Roff, 393 => Load64G,

            // memory: store
            394 => Store8, 395 => Store8Off, 396 => Store8COff, 397 => Store8G, 398 => Store16, 399 => Store16Off,
            400 => Store16COff, 401 => Store16G, 402 => Store32, 403 => Store32Off, 404 => Store32COff, 405 => Store32G,
            406 => Store64, 407 => Store64Off, 408 => Store64COff, 409 => Store64G,

            // address computation
            410 => LeaShl, 411 => LeaShl2, 412 => LeaShlOff, 413 => LeaMulOff,

            // casts
            414 => Trunc64_32, 415 => Trunc64_16, 416 => Trunc64_8, 417 => Trunc32_16, 418 => Trunc32_8, 419 => Trunc16_8,
            420 => Zext8_16, 421 => Zext8_32, 422 => Zext8_64, 423 => Zext16_32, 424 => Zext16_64, 425 => Zext32_64,
            426 => Sext8_16, 427 => Sext8_32, 428 => Sext8_64, 429 => Sext16_32, 430 => Sext16_64, 431 => Sext32_64,
            432 => FptosiF_8, 433 => FptosiF_16, 434 => FptosiF_32, 435 => FptosiF_64, 436 => FptosiD_8, 437 => FptosiD_16,
            438 => FptosiD_32, 439 => FptosiD_64, 440 => FptouiF_8, 441 => FptouiF_16, 442 => FptouiF_32, 443 => FptouiF_64,
            444 => FptouiD_8, 445 => FptouiD_16, 446 => FptouiD_32, 447 => FptouiD_64, 448 => Sitofp8_F, 449 => Sitofp8_D,
            450 => Sitofp16_F, 451 => Sitofp16_D, 452 => Sitofp32_F, 453 => Sitofp32_D, 454 => Sitofp64_F, 455 => Sitofp64_D,
            456 => Uitofp8_F, 457 => Uitofp8_D, 458 => Uitofp16_F, 459 => Uitofp16_D, 460 => Uitofp32_F, 461 => Uitofp32_D,
            462 => Uitofp64_F, 463 => Uitofp64_D, 464 => Fpext, 465 => Fptrunc,

            // move
            466 => Mov8, 467 => Mov32, 468 => Mov64, 469 => Mov8C, 470 => Mov16C, 471 => Mov32C,
            472 => Mov64C,

            // select
            473 => Select8Rr, 474 => Select8Rc, 475 => Select8Cr, 476 => Select8Cc, 477 => Select16Rr, 478 => Select16Rc,
            479 => Select16Cr, 480 => Select16Cc, 481 => Select32Rr, 482 => Select32Rc, 483 => Select32Cr, 484 => Select32Cc,
            485 => Select64Rr, 486 => Select64Rc, 487 => Select64Cr, 488 => Select64Cc,

            // stack
            489 => Alloca, 490 => Allocad, 491 => StackSave, 492 => StackRestore, 493 => StackShrink, 494 => StackCopyR,
            495 => StackCopyC,

            // intrinsics: mem/str
            496 => Memcpy, 497 => Memset, 498 => Memmove, 499 => Memcmp, 500 => Strcpy, 501 => Strncpy,
            502 => Strcmp, 503 => Strncmp, 504 => Strchr, 505 => Strrchr, 506 => Strlen,

            // intrinsics: bit counting
            507 => Ctz32, 508 => Ctz64, 509 => Clz32, 510 => Clz64, 511 => Pop32, 512 => Pop64,

            // intrinsics: overflow/fused
            513 => Uaddo32, 514 => Mla32, 515 => Abs32,

            // intrinsics: math
            516 => Floor, 517 => FloorF, 518 => Sin, 519 => SinF, 520 => Cos, 521 => CosF,
            522 => Pow, 523 => PowF, 524 => Fabs, 525 => FabsF, 526 => Fmod, 527 => FmodF,
            528 => Log10, 529 => Log10F,

            // varargs
            530 => Vastart, 531 => Vaarg32, 532 => Vaarg64, 533 => Vacopy,

            _ => return None,
        })
    }

    /// The opcode handle resolution used by both dispatch strategies
    /// (`§4.A`, `§6`). Threaded dispatch has no safe Rust equivalent to the
    /// original's computed-goto label arithmetic, so both the switched core
    /// in [`crate::exec`] and the function-pointer table built over it key
    /// on the bare discriminant; resolution is the identity map.
    pub const fn to_handle(self) -> i16 {
        self as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trips_for_every_opcode() {
        for h in 0..Opcode::COUNT as u16 {
            let op = Opcode::from_handle(h).expect("handle in range must decode");
            assert_eq!(op.to_handle() as u16, h);
        }
    }

    #[test]
    fn out_of_range_handle_is_none() {
        assert!(Opcode::from_handle(Opcode::COUNT as u16).is_none());
        assert!(Opcode::from_handle(u16::MAX).is_none());
    }

    #[test]
    fn opcode_count_matches_generated_family_total() {
        assert_eq!(Opcode::COUNT, 534);
    }

    #[quickcheck_macros::quickcheck]
    fn any_handle_round_trips_or_is_rejected(handle: u16) -> bool {
        match Opcode::from_handle(handle) {
            Some(op) => op.to_handle() as u16 == handle,
            None => handle as usize >= Opcode::COUNT,
        }
    }
}
