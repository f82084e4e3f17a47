use smallvec::SmallVec;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Rolling window of the most recent key names, compared against the
/// Konami sequence after every key. Key names are matched exactly.
#[derive(Debug, Default)]
pub struct KonamiMatcher {
    recent: SmallVec<[String; 10]>,
}

impl KonamiMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key; returns true when the last keys spell the sequence.
    /// A match clears the window so the sequence must be typed again.
    pub fn push(&mut self, key: &str) -> bool {
        if self.recent.len() == KONAMI_SEQUENCE.len() {
            self.recent.remove(0);
        }
        self.recent.push(key.to_string());
        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self
                .recent
                .iter()
                .zip(KONAMI_SEQUENCE.iter())
                .all(|(a, b)| a == b);
        if matched {
            self.recent.clear();
        }
        matched
    }

    pub fn buffered(&self) -> usize {
        self.recent.len()
    }

    #[cfg(test)]
    pub fn spilled(&self) -> bool {
        self.recent.spilled()
    }
}
