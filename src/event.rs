//! UI events and the queue the menu consumes them from.
//!
//! Producers (debounced button tasks) enqueue; the menu only ever calls
//! [`EventSource::try_dequeue`], which never blocks.

use heapless::Deque;

use crate::config::EVENT_QUEUE_CAPACITY;
use crate::error::Error;

/// Discrete UI events (after debouncing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEvent {
    /// Nothing pressed yet.
    #[default]
    Idle,
    /// Advance the cursor at the current menu level.
    NavigateNext,
    /// Enter the selected item / commit and return.
    Confirm,
    /// Go back one menu level.
    Cancel,
}

/// Non-blocking, FIFO source of UI events.
pub trait EventSource {
    /// Take the oldest queued event, or `None` if the queue is empty.
    fn try_dequeue(&mut self) -> Option<MenuEvent>;
}

impl<T: EventSource + ?Sized> EventSource for &mut T {
    fn try_dequeue(&mut self) -> Option<MenuEvent> {
        (**self).try_dequeue()
    }
}

/// Fixed-capacity FIFO of menu events.
pub struct EventQueue<const N: usize = EVENT_QUEUE_CAPACITY> {
    events: Deque<MenuEvent, N>,
}

impl<const N: usize> EventQueue<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Append an event. When the queue is full the event is dropped.
    pub fn put(&mut self, event: MenuEvent) -> Result<(), Error> {
        self.events.push_back(event).map_err(|dropped| {
            warn!("Event queue full - dropping {}", dropped);
            Error::EventQueueFull
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventSource for EventQueue<N> {
    fn try_dequeue(&mut self) -> Option<MenuEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_yields_nothing() {
        let mut queue: EventQueue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.try_dequeue(), None);
    }

    #[test]
    fn events_come_out_in_fifo_order() {
        let mut queue: EventQueue = EventQueue::new();
        queue.put(MenuEvent::Confirm).unwrap();
        queue.put(MenuEvent::NavigateNext).unwrap();
        queue.put(MenuEvent::Cancel).unwrap();
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.try_dequeue(), Some(MenuEvent::Confirm));
        assert_eq!(queue.try_dequeue(), Some(MenuEvent::NavigateNext));
        assert_eq!(queue.try_dequeue(), Some(MenuEvent::Cancel));
        assert_eq!(queue.try_dequeue(), None);
    }

    #[test]
    fn full_queue_rejects_and_keeps_existing_events() {
        let mut queue: EventQueue<2> = EventQueue::new();
        queue.put(MenuEvent::Confirm).unwrap();
        queue.put(MenuEvent::Cancel).unwrap();
        assert_eq!(queue.put(MenuEvent::NavigateNext), Err(Error::EventQueueFull));

        assert_eq!(queue.try_dequeue(), Some(MenuEvent::Confirm));
        assert_eq!(queue.try_dequeue(), Some(MenuEvent::Cancel));
        assert_eq!(queue.try_dequeue(), None);
    }

    #[test]
    fn default_event_is_idle() {
        assert_eq!(MenuEvent::default(), MenuEvent::Idle);
    }
}
