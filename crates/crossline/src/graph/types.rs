/// Unordered vertex pair plus the derived `crossed` flag.
///
/// The pair is fixed for the level; `crossed` reflects the last detector run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub crossed: bool,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            crossed: false,
        }
    }

    #[inline]
    pub fn touches(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }
}
