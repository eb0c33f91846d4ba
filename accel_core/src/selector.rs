//! Button-driven rate selection shared between the EXTI handler and the
//! sampling loop.
//!
//! `pending` is written by [`RateSelector::trigger`], `active` only by the
//! loop through [`RateSelector::settle`]. A trigger always asks for the
//! successor of `active`, so several presses between two commits still only
//! advance by one step.

use portable_atomic::{AtomicU8, Ordering};

use crate::rate::SampleRate;

pub struct RateSelector {
    active: AtomicU8,
    pending: AtomicU8,
}

impl RateSelector {
    pub const fn new(initial: SampleRate) -> Self {
        Self {
            active: AtomicU8::new(initial as u8),
            pending: AtomicU8::new(initial as u8),
        }
    }

    /// Puts both selections at `rate`. Only meant for boot, before the
    /// trigger interrupt is unmasked.
    pub fn restore(&self, rate: SampleRate) {
        self.active.store(rate as u8, Ordering::Release);
        self.pending.store(rate as u8, Ordering::Release);
    }

    /// Interrupt context. Returns the rate now pending.
    pub fn trigger(&self) -> SampleRate {
        let requested = self.active().next();
        self.pending.store(requested as u8, Ordering::Release);
        requested
    }

    pub fn active(&self) -> SampleRate {
        Self::decode(self.active.load(Ordering::Acquire))
    }

    pub fn pending(&self) -> SampleRate {
        Self::decode(self.pending.load(Ordering::Acquire))
    }

    /// The rate to commit, if a trigger moved `pending` away from `active`.
    pub fn pending_change(&self) -> Option<SampleRate> {
        let pending = self.pending();
        (pending != self.active()).then_some(pending)
    }

    /// Ends a commit of `requested` with the sensor running at `applied`.
    /// When those differ, `pending` is pulled back to `applied` unless a
    /// trigger has already replaced the request.
    pub fn settle(&self, requested: SampleRate, applied: SampleRate) {
        self.active.store(applied as u8, Ordering::Release);
        let _ = self.pending.compare_exchange(
            requested as u8,
            applied as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    fn decode(index: u8) -> SampleRate {
        // Only ever stores `SampleRate as u8`
        SampleRate::from_index(index).unwrap_or_default()
    }
}

impl Default for RateSelector {
    fn default() -> Self {
        Self::new(SampleRate::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_is_1hz_with_nothing_pending() {
        let selector = RateSelector::default();
        assert_eq!(selector.active(), SampleRate::Hz1);
        assert_eq!(selector.pending(), SampleRate::Hz1);
        assert_eq!(selector.pending_change(), None);
    }

    #[test]
    fn trigger_requests_successor_of_active() {
        let selector = RateSelector::default();
        assert_eq!(selector.trigger(), SampleRate::Hz10);
        assert_eq!(selector.active(), SampleRate::Hz1);
        assert_eq!(selector.pending_change(), Some(SampleRate::Hz10));
    }

    #[test]
    fn repeated_triggers_before_commit_do_not_skip() {
        let selector = RateSelector::new(SampleRate::Hz25);
        selector.trigger();
        selector.trigger();
        selector.trigger();
        assert_eq!(selector.pending_change(), Some(SampleRate::Hz50));
    }

    #[test]
    fn trigger_during_commit_is_absorbed() {
        let selector = RateSelector::default();
        selector.trigger();

        // Loop took its snapshot, press arrives before `active` moves
        let snapshot = selector.pending_change();
        selector.trigger();
        selector.settle(SampleRate::Hz10, SampleRate::Hz10);

        assert_eq!(snapshot, Some(SampleRate::Hz10));
        assert_eq!(selector.active(), SampleRate::Hz10);
        assert_eq!(selector.pending_change(), None);
    }

    #[test]
    fn one_trigger_per_commit_walks_every_rate() {
        let selector = RateSelector::default();
        let mut seen = [SampleRate::Hz1; 6];

        for slot in seen.iter_mut() {
            selector.trigger();
            let rate = selector.pending_change().unwrap();
            selector.settle(rate, rate);
            *slot = rate;
        }

        assert_eq!(
            seen,
            [
                SampleRate::Hz10,
                SampleRate::Hz25,
                SampleRate::Hz50,
                SampleRate::Hz100,
                SampleRate::Hz200,
                SampleRate::Hz1,
            ]
        );
    }

    #[test]
    fn restore_sets_both_selections() {
        let selector = RateSelector::default();
        selector.restore(SampleRate::Hz100);
        assert_eq!(selector.active(), SampleRate::Hz100);
        assert_eq!(selector.pending(), SampleRate::Hz100);
        assert_eq!(selector.pending_change(), None);
    }

    #[test]
    fn settling_elsewhere_drops_the_request() {
        let selector = RateSelector::default();
        selector.trigger();

        selector.settle(SampleRate::Hz10, SampleRate::Hz25);

        assert_eq!(selector.active(), SampleRate::Hz25);
        assert_eq!(selector.pending(), SampleRate::Hz25);
        assert_eq!(selector.pending_change(), None);
    }

    #[test]
    fn settling_keeps_a_newer_request() {
        let selector = RateSelector::new(SampleRate::Hz50);
        selector.trigger();

        // `pending` no longer holds the settled request
        selector.settle(SampleRate::Hz200, SampleRate::Hz50);

        assert_eq!(selector.active(), SampleRate::Hz50);
        assert_eq!(selector.pending_change(), Some(SampleRate::Hz100));
    }
}
