use crate::language::{token::Identifier, types::Type};
use crate::runtime::{
    error::{MemoryError, MemoryResult},
    value::Value,
};
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Position of a string payload in the heap segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeapIndex(usize);

/// Append-only storage for string payloads. Slots are never freed or reused,
/// so the heap only grows for the life of the memory space.
#[derive(Debug, Default)]
struct Heap {
    cells: Vec<Value>,
}

impl Heap {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    fn alloc(&mut self, value: Value) -> HeapIndex {
        self.cells.push(value);
        HeapIndex(self.cells.len() - 1)
    }

    fn get(&self, index: HeapIndex) -> MemoryResult<&Value> {
        self.cells
            .get(index.0)
            .ok_or(MemoryError::CorruptHeapIndex {
                index: index.0,
                len: self.cells.len(),
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Slot {
    Direct(Value),
    Heap(HeapIndex),
}

#[derive(Clone, Debug)]
struct Binding {
    ty: Type,
    slot: Option<Slot>,
}

/// Variable storage for a running program.
///
/// Scalar bindings hold their value in the binding table (the stack segment).
/// String bindings hold an index into the heap segment, and every store to one
/// appends a fresh heap entry instead of overwriting the old payload.
///
/// The memory space is `Send` but not `Sync`: it belongs to exactly one
/// evaluator at a time and has no internal locking.
#[derive(Debug, Default)]
pub struct MemorySpace {
    bindings: HashMap<Identifier, Binding>,
    heap: Heap,
    _single_owner: PhantomData<Cell<()>>,
}

impl MemorySpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bindings: usize, heap: usize) -> Self {
        Self {
            bindings: HashMap::with_capacity(bindings),
            heap: Heap::with_capacity(heap),
            _single_owner: PhantomData,
        }
    }

    /// Binds `variable` to `ty` with no value yet.
    ///
    /// Declaring an existing name replaces its binding; whether that is legal
    /// is up to the caller. Heap entries written through the old binding stay
    /// where they are.
    pub fn declare(&mut self, variable: &Identifier, ty: Type) {
        self.bindings
            .insert(variable.clone(), Binding { ty, slot: None });
    }

    pub fn is_declared(&self, variable: &Identifier) -> bool {
        self.bindings.contains_key(variable)
    }

    /// Whether `variable` is declared and has been assigned at least once.
    pub fn is_populated(&self, variable: &Identifier) -> bool {
        self.bindings
            .get(variable)
            .is_some_and(|binding| binding.slot.is_some())
    }

    pub fn get_type(&self, variable: &Identifier) -> MemoryResult<Type> {
        self.binding(variable).map(|binding| binding.ty)
    }

    /// Returns the current value of `variable`, following the heap index for
    /// string bindings.
    pub fn get_value(&self, variable: &Identifier) -> MemoryResult<&Value> {
        let binding = self.binding(variable)?;
        match &binding.slot {
            Some(Slot::Direct(value)) => Ok(value),
            Some(Slot::Heap(index)) => self.heap.get(*index),
            None => Err(MemoryError::UnpopulatedRead {
                name: variable.name.clone(),
                span: variable.span,
            }),
        }
    }

    /// Stores `value` in `variable`.
    ///
    /// Scalars overwrite the binding in place. Strings are appended to the heap
    /// and the binding is pointed at the new entry, so every string store grows
    /// the heap by exactly one. A rejected store leaves memory untouched.
    pub fn set_value(&mut self, variable: &Identifier, value: Value) -> MemoryResult<()> {
        let binding = self
            .bindings
            .get_mut(variable)
            .ok_or_else(|| undeclared(variable))?;
        if value.ty() != binding.ty {
            return Err(MemoryError::TypeMismatch {
                name: variable.name.clone(),
                span: variable.span,
                expected: binding.ty,
                found: value.ty(),
            });
        }
        let slot = if binding.ty.is_heap_allocated() {
            Slot::Heap(self.heap.alloc(value))
        } else {
            Slot::Direct(value)
        };
        binding.slot = Some(slot);
        Ok(())
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn heap_len(&self) -> usize {
        self.heap.cells.len()
    }

    /// Every payload ever stored to a string variable, oldest first.
    pub fn heap(&self) -> &[Value] {
        &self.heap.cells
    }

    pub fn heap_get(&self, index: usize) -> Option<&Value> {
        self.heap.cells.get(index)
    }

    /// Declared variables and their types, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = (&Identifier, Type)> + '_ {
        self.bindings
            .iter()
            .map(|(variable, binding)| (variable, binding.ty))
    }

    fn binding(&self, variable: &Identifier) -> MemoryResult<&Binding> {
        self.bindings
            .get(variable)
            .ok_or_else(|| undeclared(variable))
    }
}

fn undeclared(variable: &Identifier) -> MemoryError {
    MemoryError::UndeclaredVariable {
        name: variable.name.clone(),
        span: variable.span,
    }
}

impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&Identifier> = self.bindings.keys().collect();
        names.sort_by(|a, b| a.name.cmp(&b.name));

        writeln!(f, "stack:")?;
        for name in names {
            let binding = &self.bindings[name];
            write!(f, "  {} {} = ", binding.ty, name)?;
            match &binding.slot {
                Some(Slot::Direct(value)) => writeln!(f, "{value}")?,
                Some(Slot::Heap(index)) => writeln!(f, "@{}", index.0)?,
                None => writeln!(f, "<undefined>")?,
            }
        }
        writeln!(f, "heap:")?;
        for (index, value) in self.heap.cells.iter().enumerate() {
            writeln!(f, "  @{index} {value}")?;
        }
        Ok(())
    }
}
