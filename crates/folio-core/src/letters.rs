use crate::constants::{LETTER_STAGGER_MS, NBSP};

/// Splits `text` into one entry per character, in order, turning literal
/// spaces into non-breaking spaces so each one keeps its width once wrapped.
pub fn split_letters(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c == ' ' { NBSP } else { c })
        .collect()
}

pub fn letter_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(LETTER_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_and_newlines_are_kept() {
        assert_eq!(split_letters("a\tb\n"), vec!['a', '\t', 'b', '\n']);
    }

    #[test]
    fn delays_are_linear() {
        assert_eq!(letter_delay_ms(0), 0);
        assert_eq!(letter_delay_ms(1), 30);
        assert_eq!(letter_delay_ms(10), 300);
    }
}
