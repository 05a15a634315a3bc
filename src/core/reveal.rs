//! Per-position visibility of the hidden word
//!
//! A `RevealMask` holds one flag per character of the word. A round starts with
//! the first and last characters shown, along with every character that is not
//! an ASCII letter (spaces, hyphens, apostrophes): those can never be guessed.

use super::Word;

/// Placeholder rendered for a hidden position
pub const HIDDEN: char = '_';

/// Which positions of a word are currently visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    visible: Vec<bool>,
}

impl RevealMask {
    /// Build the mask a round starts with
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RevealMask, Word};
    ///
    /// let word = Word::new("apple").unwrap();
    /// let mask = RevealMask::initial(&word);
    /// assert_eq!(mask.render(&word), "A _ _ _ E");
    /// ```
    #[must_use]
    pub fn initial(word: &Word) -> Self {
        let last = word.len() - 1;
        let visible = word
            .chars()
            .iter()
            .enumerate()
            .map(|(i, c)| i == 0 || i == last || !c.is_ascii_alphabetic())
            .collect();

        Self { visible }
    }

    /// Mark a position visible
    ///
    /// Returns `true` if the position was hidden before.
    ///
    /// # Panics
    /// Panics if position >= `len()`
    pub fn reveal(&mut self, position: usize) -> bool {
        !std::mem::replace(&mut self.visible[position], true)
    }

    /// Mark every position visible
    pub fn reveal_all(&mut self) {
        self.visible.fill(true);
    }

    /// Whether a position is visible
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn is_visible(&self, position: usize) -> bool {
        self.visible[position]
    }

    /// True once nothing is left to guess
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.visible.iter().all(|&v| v)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.visible.iter().filter(|&&v| !v).count()
    }

    /// Number of positions tracked
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether the mask tracks no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Render the word as the player sees it
    ///
    /// Hidden positions show [`HIDDEN`]; positions are separated by a single space.
    #[must_use]
    pub fn render(&self, word: &Word) -> String {
        debug_assert_eq!(word.len(), self.len(), "mask built for another word");

        let mut out = String::with_capacity(self.len() * 2);
        for (i, (&c, &shown)) in word.chars().iter().zip(&self.visible).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if shown { c } else { HIDDEN });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_for(text: &str) -> (Word, RevealMask) {
        let word = Word::new(text).unwrap();
        let mask = RevealMask::initial(&word);
        (word, mask)
    }

    #[test]
    fn initial_reveals_ends_only_for_plain_word() {
        let (word, mask) = mask_for("apple");
        assert!(mask.is_visible(0));
        assert!(mask.is_visible(4));
        assert!((1..4).all(|i| !mask.is_visible(i)));
        assert_eq!(mask.hidden_count(), 3);
        assert_eq!(mask.render(&word), "A _ _ _ E");
    }

    #[test]
    fn initial_reveals_non_letters() {
        let (word, mask) = mask_for("jack-in-the-box");
        for (i, c) in word.chars().iter().enumerate() {
            let expected = i == 0 || i == word.len() - 1 || *c == '-';
            assert_eq!(mask.is_visible(i), expected, "position {i} ({c})");
        }
        assert_eq!(mask.render(&word), "J _ _ _ - _ _ - _ _ _ - _ _ X");
    }

    #[test]
    fn initial_reveals_spaces_and_apostrophes() {
        let (word, mask) = mask_for("rock'n'roll");
        assert_eq!(mask.render(&word), "R _ _ _ ' _ ' _ _ _ L");

        let (word, mask) = mask_for("hot dog");
        assert_eq!(mask.render(&word), "H _ _   _ _ G");
    }

    #[test]
    fn initial_two_letter_word_is_complete() {
        let (word, mask) = mask_for("go");
        assert!(mask.is_complete());
        assert_eq!(mask.render(&word), "G O");
    }

    #[test]
    fn initial_word_with_only_punctuation_inside_is_complete() {
        let (_, mask) = mask_for("a-b");
        assert!(mask.is_complete());
    }

    #[test]
    fn reveal_is_idempotent() {
        let (word, mut mask) = mask_for("apple");
        assert!(mask.reveal(2));
        let after_first = mask.clone();
        assert!(!mask.reveal(2));
        assert_eq!(mask, after_first);
        assert_eq!(mask.render(&word), "A _ P _ E");
    }

    #[test]
    fn revealing_every_position_completes() {
        let (word, mut mask) = mask_for("apple");
        for i in 1..4 {
            assert!(!mask.is_complete());
            mask.reveal(i);
        }
        assert!(mask.is_complete());
        assert_eq!(mask.hidden_count(), 0);
        assert_eq!(mask.render(&word), "A P P L E");
    }

    #[test]
    fn reveal_all_shows_full_word() {
        let (word, mut mask) = mask_for("ice cream");
        mask.reveal_all();
        assert!(mask.is_complete());
        assert_eq!(mask.render(&word), "I C E   C R E A M");
    }

    #[test]
    fn long_words_are_not_capped() {
        let text = "a".repeat(200);
        let (word, mut mask) = mask_for(&text);
        assert_eq!(mask.len(), 200);
        assert_eq!(mask.hidden_count(), 198);
        mask.reveal(150);
        assert!(mask.is_visible(150));
        assert_eq!(mask.render(&word).len(), 399);
    }
}
