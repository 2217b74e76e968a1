//! The unit: one isolated VM instance (`§5`).
//!
//! Everything `call` touches lives here — guest memory, the nested register
//! frame stack, the function table, and the scratch buffer functions are
//! emitted into. All of it is mutated only from the thread that drives
//! `call`; running several units in parallel means one unit per thread,
//! never sharing one.

use crate::consts::{DEFAULT_FRAME_STACK_SIZE, DEFAULT_MEM_SIZE};
use crate::frame::FrameStack;
use crate::function::Function;
use crate::memory::Memory;
use crate::stop::StopReason;
use crate::text::TextBuffer;

/// A host function bound into the function table (`§6`, host-function
/// table). Takes the unit so it can read arguments out of the current
/// frame and guest memory, and write a result back to `ret_offset`.
pub type HostFn = Box<dyn FnMut(&mut Unit, i16) -> Result<(), StopReason>>;

/// One isolated interpreter instance: guest memory, the nested register
/// frame stack, and the function table.
///
/// `functions` and `host_fns` are two parallel `Option` vectors, indexed by
/// the same function-table id, rather than one `Vec` of an enum: `exec`'s
/// `JSR_*` handlers need to invoke a host closure with `&mut Unit` while the
/// unit itself still holds the table the closure came from. `.take()`-ing
/// the closure out of its slot for the call's duration and putting it back
/// afterward satisfies the borrow checker without an enum match holding a
/// live borrow across the reentrant call. Each index has an entry in at
/// most one of the two vectors at a time.
pub struct Unit {
    functions: Vec<Option<Function>>,
    host_fns: Vec<Option<HostFn>>,
    pub memory: Memory,
    pub frames: FrameStack,
    /// Scratch buffer [`crate::emit::Emitter`] appends into; owned here so
    /// emitting successive functions reuses its allocation instead of
    /// starting a fresh `Vec` each time.
    pub scratch: TextBuffer,
    exit_code: i32,
}

impl std::fmt::Debug for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unit")
            .field("functions", &self.functions)
            .field("host_fns", &format_args!("[{} slot(s)]", self.host_fns.len()))
            .field("memory", &self.memory)
            .field("frames", &self.frames)
            .field("scratch", &self.scratch)
            .field("exit_code", &self.exit_code)
            .finish()
    }
}

impl Unit {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEM_SIZE, DEFAULT_FRAME_STACK_SIZE)
    }

    pub fn with_capacity(mem_size: usize, frame_stack_size: usize) -> Self {
        Self {
            functions: Vec::new(),
            host_fns: Vec::new(),
            memory: Memory::new(mem_size),
            frames: FrameStack::with_capacity(frame_stack_size),
            scratch: TextBuffer::new(),
            exit_code: 0,
        }
    }

    /// Register a lowered function, returning its function-table index.
    pub fn push_function(&mut self, func: Function) -> u32 {
        let index = self.functions.len() as u32;
        self.functions.push(Some(func));
        self.host_fns.push(None);
        index
    }

    /// Register a host binding, returning its function-table index.
    pub fn push_host_function(&mut self, f: HostFn) -> u32 {
        let index = self.functions.len() as u32;
        self.functions.push(None);
        self.host_fns.push(Some(f));
        index
    }

    pub fn function(&self, index: u32) -> Option<&Function> {
        self.functions.get(index as usize).and_then(|f| f.as_ref())
    }

    pub fn is_host_function(&self, index: u32) -> bool {
        matches!(self.host_fns.get(index as usize), Some(Some(_)))
    }

    /// Take the host closure at `index` out of the table for the duration
    /// of a call, so the caller can invoke it with `&mut Unit`. The caller
    /// must put it back with [`Unit::restore_host_function`] once done.
    pub(crate) fn take_host_function(&mut self, index: u32) -> Option<HostFn> {
        self.host_fns.get_mut(index as usize).and_then(|f| f.take())
    }

    pub(crate) fn restore_host_function(&mut self, index: u32, f: HostFn) {
        self.host_fns[index as usize] = Some(f);
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub(crate) fn set_exit_code(&mut self, code: i32) {
        self.exit_code = code;
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_table_indices_are_assigned_in_order() {
        let mut unit = Unit::new();
        let f0 = unit.push_function(Function {
            name: "a".into(),
            index: 0,
            text: std::rc::Rc::from([]),
            frame_size: 16,
            arg_area_size: 0,
        });
        let f1 = unit.push_host_function(Box::new(|_, _| Ok(())));
        assert_eq!(f0, 0);
        assert_eq!(f1, 1);
        assert!(unit.function(0).is_some());
        assert!(!unit.is_host_function(0));
        assert!(unit.function(1).is_none());
        assert!(unit.is_host_function(1));
        assert!(unit.function(2).is_none());
        assert!(!unit.is_host_function(2));
    }

    #[test]
    fn host_function_can_be_taken_and_restored() {
        let mut unit = Unit::new();
        let idx = unit.push_host_function(Box::new(|u, _| {
            u.set_exit_code(7);
            Ok(())
        }));
        let mut f = unit.take_host_function(idx).expect("host fn present");
        assert!(unit.take_host_function(idx).is_none());
        f(&mut unit, 0).unwrap();
        unit.restore_host_function(idx, f);
        assert_eq!(unit.exit_code(), 7);
        assert!(unit.is_host_function(idx));
    }
}
