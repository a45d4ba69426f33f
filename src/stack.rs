use std::fmt;

/// Running totals of successful pushes and pops on a stack.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StackOps {
    pub pushes: usize,
    pub pops: usize,
}

impl StackOps {
    pub fn total(&self) -> usize {
        self.pushes + self.pops
    }
}

impl std::ops::Add for StackOps {
    type Output = StackOps;

    fn add(self, other: StackOps) -> StackOps {
        StackOps {
            pushes: self.pushes + other.pushes,
            pops: self.pops + other.pops,
        }
    }
}

/// A LIFO stack that counts the work done on it.
pub struct Stack<T> {
    items: Vec<T>,
    ops: StackOps,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            items: Vec::new(),
            ops: StackOps::default(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.ops.pushes += 1;
    }

    /// Removes and returns the top item, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        self.ops.pops += 1;
        Some(item)
    }

    /// Returns a reference to the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ops(&self) -> StackOps {
        self.ops
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // bottom to top
        f.debug_list().entries(self.items.iter()).finish()
    }
}
