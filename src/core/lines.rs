use crate::domain::model::Customer;
use std::collections::VecDeque;

/// Arrival-ordered line: joins at the tail, served from the head.
#[derive(Debug, Clone, Default)]
pub struct GeneralLine {
    queue: VecDeque<Customer>,
}

impl GeneralLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, customer: Customer) {
        self.queue.push_back(customer);
    }

    pub fn dequeue(&mut self) -> Option<Customer> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Head first.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.queue.iter()
    }
}

/// Priority line: the most recent arrival is served first.
#[derive(Debug, Clone, Default)]
pub struct VipLine {
    stack: Vec<Customer>,
}

impl VipLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, customer: Customer) {
        self.stack.push(customer);
    }

    pub fn pop(&mut self) -> Option<Customer> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Top of the stack first.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.stack.iter().rev()
    }
}
