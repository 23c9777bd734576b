use chartgrid::Rect;
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Records render-callback invocations across a layout pass so tests can
/// assert on ordering, indices, and the rects handed to each node.
#[derive(Clone, Default)]
pub struct CallbackLog {
    entries: Arc<Mutex<Vec<(String, usize, Rect)>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder closure suitable for `with_render`, tagged with `name`.
    pub fn recorder(&self, name: &str) -> impl Fn(Rect, usize) + Send + Sync + 'static {
        let name = name.to_string();
        let entries = self.entries.clone();
        move |rect, index| entries.lock().unwrap().push((name.clone(), index, rect))
    }

    pub fn entries(&self) -> Vec<(String, usize, Rect)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries().into_iter().map(|(name, _, _)| name).collect()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.entries().into_iter().map(|(_, index, _)| index).collect()
    }
}

#[macro_export]
macro_rules! assert_rect_eq {
    ($actual:expr, $expected:expr) => {
        let actual = $actual;
        let expected = $expected;
        assert!(
            actual.fuzzy_eq(&expected),
            "rect mismatch: got {:?}, expected {:?}",
            actual,
            expected
        );
    };
}
