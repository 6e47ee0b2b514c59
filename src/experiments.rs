//! An experimental rendition of the sequence's endpoint surface with no
//! raw pointers: ownership of every node is split into two static halves,
//! one held by each neighbour (or by the sequence itself at the ends), and
//! the links are only readable through a `GhostToken`. It exists as a
//! compile-time-checked cross-check of the ring discipline, not as public
//! API; indexed access is deliberately not mirrored here.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

type Half<'id, T> = StaticRc<GhostCell<'id, RawNode<'id, T>>, 1, 2>;
type Full<'id, T> = StaticRc<GhostCell<'id, RawNode<'id, T>>, 2, 2>;

struct RawNode<'id, T> {
    prev: Option<Half<'id, T>>,
    next: Option<Half<'id, T>>,
    element: T,
}

impl<'id, T> RawNode<'id, T> {
    fn new(element: T) -> Self {
        Self {
            prev: None,
            next: None,
            element,
        }
    }
}

pub struct Sequence<'id, T> {
    /// Half of the first node; its other half is held by the second node's
    /// `prev` (or by `tail` when there is only one node).
    head: Option<Half<'id, T>>,
    /// Half of the last node, symmetrically.
    tail: Option<Half<'id, T>>,
    len: usize,
}

impl<'id, T> Default for Sequence<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> Sequence<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (inner, outer) = Full::split(Full::new(GhostCell::new(RawNode::new(element))));
        match self.head.take() {
            Some(first) => {
                first.borrow_mut(token).prev = Some(inner);
                outer.borrow_mut(token).next = Some(first);
                self.head = Some(outer);
            }
            None => {
                self.tail = Some(inner);
                self.head = Some(outer);
            }
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (inner, outer) = Full::split(Full::new(GhostCell::new(RawNode::new(element))));
        match self.tail.take() {
            Some(last) => {
                last.borrow_mut(token).next = Some(inner);
                outer.borrow_mut(token).prev = Some(last);
                self.tail = Some(outer);
            }
            None => {
                self.head = Some(inner);
                self.tail = Some(outer);
            }
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let first = self.head.take()?;
        let second = first.borrow_mut(token).next.take();
        let other_half = match second {
            Some(second) => {
                let half = second
                    .borrow_mut(token)
                    .prev
                    .take()
                    .expect("ring halves out of sync");
                self.head = Some(second);
                half
            }
            None => self.tail.take().expect("ring halves out of sync"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(first, other_half)).into_inner().element)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let last = self.tail.take()?;
        let second_to_last = last.borrow_mut(token).prev.take();
        let other_half = match second_to_last {
            Some(second_to_last) => {
                let half = second_to_last
                    .borrow_mut(token)
                    .next
                    .take()
                    .expect("ring halves out of sync");
                self.tail = Some(second_to_last);
                half
            }
            None => self.head.take().expect("ring halves out of sync"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(last, other_half)).into_inner().element)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Sequence;
    use ghost_cell::GhostToken;

    #[test]
    fn seq_push_pop() {
        GhostToken::new(|mut token| {
            let mut seq = Sequence::new();
            assert!(seq.is_empty());
            seq.push_back(1, &mut token);
            seq.push_front(2, &mut token);
            assert_eq!(seq.len(), 2);
            assert!(!seq.is_empty());
            assert_eq!(seq.pop_back(&mut token), Some(1));
            assert_eq!(seq.pop_front(&mut token), Some(2));
            assert_eq!(seq.pop_front(&mut token), None);
            assert!(seq.is_empty());
        })
    }

    #[test]
    fn seq_endpoint_order() {
        GhostToken::new(|mut token| {
            let mut seq = Sequence::new();
            for i in 0..4 {
                seq.push_back(i, &mut token);
            }
            assert_eq!(seq.len(), 4);
            for expected in 0..4 {
                assert_eq!(seq.pop_front(&mut token), Some(expected));
            }
            assert_eq!(seq.pop_back(&mut token), None);
        })
    }
}
