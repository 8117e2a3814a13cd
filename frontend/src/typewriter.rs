pub const TYPE_DELAY_MS: u32 = 80;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const DELETE_DELAY_MS: u32 = 40;

/// Cursor into a rotating list of words: which word, how many characters of
/// it are shown, and whether they are being typed or erased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
    pub word: usize,
    pub shown: usize,
    pub deleting: bool,
}

impl TypewriterState {
    pub fn text(&self, words: &[&str]) -> String {
        words
            .get(self.word)
            .map(|w| w.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// The state to move to next and how long to wait before moving.
    pub fn step(&self, words: &[&str]) -> (TypewriterState, u32) {
        if words.is_empty() {
            return (*self, HOLD_DELAY_MS);
        }
        let word = self.word % words.len();
        let len = words[word].chars().count();

        match (self.deleting, self.shown) {
            (false, shown) if shown < len => (
                TypewriterState { word, shown: shown + 1, deleting: false },
                TYPE_DELAY_MS,
            ),
            (false, _) => (TypewriterState { word, shown: len, deleting: true }, HOLD_DELAY_MS),
            (true, shown) if shown > 0 => (
                TypewriterState { word, shown: shown - 1, deleting: true },
                DELETE_DELAY_MS,
            ),
            (true, _) => (
                TypewriterState { word: (word + 1) % words.len(), shown: 0, deleting: false },
                0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "ĉd"];

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut state = TypewriterState::default();
        let mut delays = Vec::new();
        let mut texts = Vec::new();
        for _ in 0..7 {
            let (next, delay) = state.step(WORDS);
            delays.push(delay);
            state = next;
            texts.push(state.text(WORDS));
        }
        assert_eq!(texts, ["a", "ab", "ab", "a", "", "", "ĉ"]);
        assert_eq!(
            delays,
            [TYPE_DELAY_MS, TYPE_DELAY_MS, HOLD_DELAY_MS, DELETE_DELAY_MS, DELETE_DELAY_MS, 0, TYPE_DELAY_MS]
        );
        assert_eq!(state.word, 1);
    }

    #[test]
    fn wraps_to_first_word() {
        let state = TypewriterState { word: 1, shown: 0, deleting: true };
        let (next, _) = state.step(WORDS);
        assert_eq!(next, TypewriterState::default());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let state = TypewriterState { word: 1, shown: 2, deleting: false };
        let (next, delay) = state.step(WORDS);
        assert!(next.deleting);
        assert_eq!(delay, HOLD_DELAY_MS);
        assert_eq!(next.text(WORDS), "ĉd");
    }

    #[test]
    fn empty_word_list_is_inert() {
        let state = TypewriterState::default();
        assert_eq!(state.step(&[]).0, state);
        assert_eq!(state.text(&[]), "");
    }
}
