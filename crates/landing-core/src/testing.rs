//! In-memory viewport shared by the unit tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::latch::IntersectionSample;
use crate::observation::Observation;

pub type Callback = Box<dyn FnMut(IntersectionSample)>;

type Subscribers = Rc<RefCell<Vec<(usize, Callback)>>>;

/// Stand-in for the browser observer
#[derive(Default)]
pub struct FakeViewport {
    subscribers: Subscribers,
    disconnects: Rc<Cell<usize>>,
    observes: Cell<usize>,
}

pub struct FakeObservation {
    id: usize,
    subscribers: Subscribers,
    disconnects: Rc<Cell<usize>>,
}

impl Observation for FakeObservation {
    fn disconnect(&mut self) {
        self.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        self.disconnects.set(self.disconnects.get() + 1);
    }
}

impl FakeViewport {
    pub fn observe(&self, callback: Callback) -> FakeObservation {
        let id = self.observes.get();
        self.observes.set(id + 1);
        self.subscribers.borrow_mut().push((id, callback));
        FakeObservation {
            id,
            subscribers: self.subscribers.clone(),
            disconnects: self.disconnects.clone(),
        }
    }

    pub fn emit(&self, sample: IntersectionSample) {
        for (_, callback) in self.subscribers.borrow_mut().iter_mut() {
            callback(sample);
        }
    }

    /// Live registrations
    pub fn registered(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Total `observe` calls so far
    pub fn observes(&self) -> usize {
        self.observes.get()
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects.get()
    }
}
