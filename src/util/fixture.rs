use std::cell::Cell;
use std::rc::Rc;

/// A shared counter, used to observe how many times a callback was invoked.
#[derive(Debug, Clone, Default)]
pub struct CountedCalls(pub Rc<Cell<usize>>);

impl CountedCalls {
    pub fn new() -> CountedCalls {
        CountedCalls::default()
    }

    pub fn tick(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn take(&self) -> usize {
        self.0.replace(0)
    }
}

/// A value that compares equal to another based only on its key, so that tests can tell which
/// of two equal elements ended up in a result.
#[derive(Debug, Clone, Default)]
pub struct Keyed<K: Eq> {
    pub key: K,
    pub label: &'static str,
}

impl<K: Eq> Keyed<K> {
    pub const fn new(key: K, label: &'static str) -> Keyed<K> {
        Keyed { key, label }
    }
}

impl<K: Eq> PartialEq for Keyed<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Keyed<K> {}
