use crate::measure::Measurement;

/// Element-wise sum of every measurement in a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTotals {
    sum: Measurement,
    sources: usize,
}

impl RunTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, m: &Measurement) {
        self.sum.lines += m.lines;
        self.sum.words += m.words;
        self.sum.tokens += m.tokens;
        self.sum.chars += m.chars;
        self.sources += 1;
    }

    /// The summed counts.
    pub fn sum(&self) -> &Measurement {
        &self.sum
    }

    /// How many measurements were accumulated. Sources that failed to open
    /// or read are not included.
    pub fn sources(&self) -> usize {
        self.sources
    }
}
