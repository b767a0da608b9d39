use crate::constants::{BENTO_STAGGER_MS, HERO_REVEAL_DELAY_MS, PRELOADER_HIDE_DELAY_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStep {
    /// Mark the preloader as loaded so its fade-out starts.
    DismissPreloader,
    /// Take the faded preloader out of layout.
    HidePreloader,
    RevealBento(usize),
    RevealHero,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedStep {
    pub at_ms: u32,
    pub step: LoadStep,
}

/// Delays for the one-shot sequence run when the page finishes loading.
#[derive(Clone, Copy, Debug)]
pub struct LoadSchedule {
    pub preloader_hide_ms: u32,
    pub bento_stagger_ms: u32,
    pub hero_reveal_ms: u32,
}

impl Default for LoadSchedule {
    fn default() -> Self {
        Self {
            preloader_hide_ms: PRELOADER_HIDE_DELAY_MS,
            bento_stagger_ms: BENTO_STAGGER_MS,
            hero_reveal_ms: HERO_REVEAL_DELAY_MS,
        }
    }
}

impl LoadSchedule {
    pub fn bento_delay_ms(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.bento_stagger_ms)
    }

    /// All steps ordered by start time; ties keep declaration order.
    pub fn steps(&self, bento_count: usize) -> Vec<TimedStep> {
        let mut steps = Vec::with_capacity(bento_count + 3);
        steps.push(TimedStep {
            at_ms: 0,
            step: LoadStep::DismissPreloader,
        });
        steps.push(TimedStep {
            at_ms: self.preloader_hide_ms,
            step: LoadStep::HidePreloader,
        });
        steps.extend((0..bento_count).map(|i| TimedStep {
            at_ms: self.bento_delay_ms(i),
            step: LoadStep::RevealBento(i),
        }));
        steps.push(TimedStep {
            at_ms: self.hero_reveal_ms,
            step: LoadStep::RevealHero,
        });
        steps.sort_by_key(|s| s.at_ms);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preloader_is_dismissed_first() {
        let steps = LoadSchedule::default().steps(3);
        assert_eq!(steps[0].step, LoadStep::DismissPreloader);
        assert_eq!(steps[1].step, LoadStep::RevealBento(0));
    }

    #[test]
    fn bento_delays_are_linear_in_index() {
        let s = LoadSchedule::default();
        let delays: Vec<u32> = (0..4).map(|i| s.bento_delay_ms(i)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn steps_are_sorted() {
        let steps = LoadSchedule::default().steps(12);
        assert_eq!(steps.len(), 15);
        assert!(steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
    }
}
