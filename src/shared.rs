use std::{cell::RefCell, rc::Rc};

use crate::calculator::{Accumulate, Calculator};

/// A cloneable handle to one [`Calculator`].
///
/// Every clone refers to the same running total. The handle is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    inner: Rc<RefCell<Calculator>>,
}

impl SharedCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Calculator {
        self.inner.borrow().clone()
    }

    /// Whether both handles point at the same calculator.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Calculator> for SharedCalculator {
    fn from(calculator: Calculator) -> Self {
        Self {
            inner: Rc::new(RefCell::new(calculator)),
        }
    }
}

impl Accumulate for SharedCalculator {
    fn add(&mut self, value: f64) -> f64 {
        self.inner.borrow_mut().add(value)
    }

    fn sub(&mut self, value: f64) -> f64 {
        self.inner.borrow_mut().sub(value)
    }

    fn clear(&mut self) -> f64 {
        self.inner.borrow_mut().clear()
    }

    fn get(&self) -> f64 {
        self.inner.borrow().get()
    }
}
