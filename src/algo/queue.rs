use std::collections::{LinkedList, VecDeque};

/// A queue that supports both popping and pushing at front and back.
///
/// The traversal algorithms are generic over this trait, so the same code runs depth first or
/// breadth first depending on which end the strategy pops from, and with whatever container
/// backs the frontier.
pub trait BidirectedQueue<T>: Default {
    /// Inserts an element at the front of the queue.
    fn push_front(&mut self, t: T);
    /// Inserts an element at the back of the queue.
    fn push_back(&mut self, t: T);
    /// Removes and returns the element at the front of the queue, if any.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes and returns the element at the back of the queue, if any.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes all elements from the queue.
    fn clear(&mut self);
    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;
    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BidirectedQueue<T> for VecDeque<T> {
    fn push_front(&mut self, t: T) {
        VecDeque::<T>::push_front(self, t)
    }

    fn push_back(&mut self, t: T) {
        VecDeque::<T>::push_back(self, t)
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::<T>::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::<T>::pop_back(self)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        VecDeque::<T>::len(self)
    }
}

impl<T> BidirectedQueue<T> for LinkedList<T> {
    fn push_front(&mut self, t: T) {
        LinkedList::<T>::push_front(self, t)
    }

    fn push_back(&mut self, t: T) {
        LinkedList::<T>::push_back(self, t)
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::<T>::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::<T>::pop_back(self)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        LinkedList::<T>::len(self)
    }
}
