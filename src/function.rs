//! A lowered function's immutable artefact (`§3`).

use std::rc::Rc;

/// The output of [`crate::emit::Emitter::emit_function`]: everything
/// [`crate::driver::call`] needs to invoke a function, and nothing it needs
/// to mutate.
///
/// `text` is reference-counted rather than boxed so [`crate::exec`] can
/// clone a cheap handle to it before a nested `JSR_VM`/`JSR_EXT` call, the
/// same way it clones into a recursive interpreter call without holding a
/// borrow of the function table across that call's own `&mut Unit`.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: Box<str>,
    /// Position in the owning [`crate::unit::Unit`]'s function table.
    pub index: u32,
    pub text: Rc<[u8]>,
    /// Total bytes the activation needs below `RF`, including
    /// [`crate::consts::RESERVED_SLOTS`] and the argument area.
    pub frame_size: u32,
    /// Bytes of `frame_size` given over to incoming arguments, laid out in
    /// descending address order by [`crate::driver::call`].
    pub arg_area_size: u32,
}

impl Function {
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}
