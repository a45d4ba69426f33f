use crate::error::{Error, Result};
use crate::stack::{Stack, StackOps};

/// A FIFO queue built from two stacks.
///
/// New items land on `in_stack`. When `out_stack` runs dry, `in_stack` is
/// poured into it, which reverses the order and leaves the oldest item on top.
/// Items only ever move from `in_stack` to `out_stack`, so each one is
/// transferred at most once and `m` calls cost O(m) in total.
#[derive(Debug)]
pub struct TwoStackQueue<T> {
    in_stack: Stack<T>,
    out_stack: Stack<T>,
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TwoStackQueue<T> {
    pub fn new() -> Self {
        Self {
            in_stack: Stack::new(),
            out_stack: Stack::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.in_stack.push(item);
    }

    /// Removes and returns the oldest item.
    ///
    /// Returns `Error::EmptyQueue` if there is nothing to dequeue; the queue
    /// stays usable afterwards.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.out_stack.is_empty() {
            self.transfer();
        }
        self.out_stack.pop().ok_or_else(|| {
            log::debug!("dequeue on empty queue");
            Error::EmptyQueue
        })
    }

    pub fn len(&self) -> usize {
        self.in_stack.len() + self.out_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_stack.is_empty() && self.out_stack.is_empty()
    }

    /// Combined push/pop counts of both stacks.
    pub fn stack_ops(&self) -> StackOps {
        self.in_stack.ops() + self.out_stack.ops()
    }

    fn transfer(&mut self) {
        let moving = self.in_stack.len();
        while let Some(item) = self.in_stack.pop() {
            self.out_stack.push(item);
        }
        if moving > 0 {
            log::trace!("moved {} items to the out stack", moving);
        }
    }
}

impl<T> Extend<T> for TwoStackQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for TwoStackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = TwoStackQueue::new();
        for i in 1..=5 {
            queue.enqueue(i);
        }
        for i in 1..=5 {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: TwoStackQueue<&str> = TwoStackQueue::new();
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));

        // still usable
        queue.enqueue("a");
        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_interleaving() {
        let mut queue = TwoStackQueue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.dequeue(), Ok('a'));
        queue.enqueue('c');
        assert_eq!(queue.dequeue(), Ok('b'));
        assert_eq!(queue.dequeue(), Ok('c'));
    }

    #[test]
    fn test_len_spans_both_stacks() {
        let mut queue = TwoStackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.dequeue().unwrap();
        queue.enqueue(3);

        assert_eq!(queue.in_stack.len(), 1);
        assert_eq!(queue.out_stack.len(), 1);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_no_transfer_while_out_stack_has_items() {
        let mut queue: TwoStackQueue<i32> = (0..3).collect();
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.stack_ops(), StackOps { pushes: 6, pops: 4 });

        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        // 3 is still waiting on the in stack
        assert_eq!(queue.in_stack.len(), 1);
        assert_eq!(queue.stack_ops(), StackOps { pushes: 7, pops: 6 });
    }

    #[test]
    fn test_failed_dequeue_does_no_stack_work() {
        let mut queue: TwoStackQueue<u8> = TwoStackQueue::new();
        let _ = queue.dequeue();
        let _ = queue.dequeue();
        assert_eq!(queue.stack_ops().total(), 0);
    }
}
