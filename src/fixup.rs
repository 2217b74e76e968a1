//! Deferred branch fixup (`§4.B`, `§4.D`).
//!
//! Branch, fused compare-branch, switch-case and jumptable targets are
//! emitted against block ids the frontend hands out, since the byte offset
//! a block ends up at isn't known until every block before it has been
//! emitted. [`FixupTable`] records where each placeholder slot landed;
//! [`FixupTable::resolve`] runs once a function's text and block offsets
//! are both final, rewriting every placeholder into a signed pc-relative
//! byte displacement.

use std::collections::HashMap;

use crate::error::EmitError;
use crate::external::BlockId;
use crate::text::TextBuffer;

/// One placeholder slot awaiting its real displacement.
#[derive(Debug, Clone, Copy)]
struct FixupSite {
    /// Byte offset of the 16-bit slot to patch.
    slot_offset: usize,
    target: BlockId,
}

/// Accumulates fixup sites and block start offsets while a function is
/// being emitted; [`Self::resolve`] consumes it once emission is done.
#[derive(Debug, Default)]
pub struct FixupTable {
    sites: Vec<FixupSite>,
    block_offsets: HashMap<BlockId, usize>,
}

impl FixupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `block` begins at the text buffer's current length.
    /// Called once per block, right before its first instruction is
    /// emitted.
    pub fn mark_block_start(&mut self, block: BlockId, text_offset: usize) {
        self.block_offsets.insert(block, text_offset);
    }

    /// Record that the 16-bit slot just written at `slot_offset` is a
    /// placeholder for a displacement to `target`.
    pub fn add_site(&mut self, slot_offset: usize, target: BlockId) {
        self.sites.push(FixupSite {
            slot_offset,
            target,
        });
    }

    /// Patch every recorded site. The displacement is relative to the byte
    /// immediately after the placeholder slot, i.e. where dispatch's
    /// cursor sits once it has finished decoding that operand.
    pub fn resolve(&self, text: &mut TextBuffer) -> Result<(), EmitError> {
        for site in &self.sites {
            let target_offset =
                *self
                    .block_offsets
                    .get(&site.target)
                    .ok_or(EmitError::BadBranchOpcode {
                        offset: site.slot_offset,
                    })?;
            let from = site.slot_offset as i64 + 2;
            let displacement = target_offset as i64 - from;
            let displacement16 = i16::try_from(displacement).map_err(|_| {
                EmitError::DisplacementOverflow {
                    offset: site.slot_offset,
                    displacement,
                }
            })?;
            text.patch_i16(site.slot_offset, displacement16);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;

    #[test]
    fn forward_and_backward_branches_resolve() {
        let mut text = TextBuffer::new();
        let mut fx = FixupTable::new();

        fx.mark_block_start(0, text.len());
        let back_site = text.emit_op(Opcode::B, &[0]).unwrap() + 2;
        fx.add_site(back_site, 0);

        fx.mark_block_start(1, text.len());
        let fwd_site = text.emit_op(Opcode::B, &[0]).unwrap() + 2;
        fx.add_site(fwd_site, 2);

        fx.mark_block_start(2, text.len());
        text.emit_op(Opcode::RetVoid, &[]).unwrap();

        fx.resolve(&mut text).unwrap();

        let back_disp = text.read_i16(back_site);
        assert_eq!((back_site as i64 + 2 + back_disp as i64) as usize, 0);

        let fwd_disp = text.read_i16(fwd_site);
        let target = *fx.block_offsets.get(&2).unwrap();
        assert_eq!((fwd_site as i64 + 2 + fwd_disp as i64) as usize, target);
    }

    #[test]
    fn unknown_target_is_bad_branch_opcode() {
        let mut text = TextBuffer::new();
        let mut fx = FixupTable::new();
        let site = text.emit_op(Opcode::B, &[0]).unwrap() + 2;
        fx.add_site(site, 99);
        assert!(matches!(
            fx.resolve(&mut text),
            Err(EmitError::BadBranchOpcode { .. })
        ));
    }
}
