//! Texts waiting for a translation response.

use std::collections::{HashMap, HashSet};

use crate::i18n::Language;

/// Insertion-ordered set of queued texts for one language.
#[derive(Debug, Default)]
struct QueuedKeys {
    /// Registration order.
    order: Vec<String>,
    /// Membership index over `order`.
    members: HashSet<String>,
}

/// Pending-key tracker.
///
/// A text is pending for a language while it is either *queued* (registered,
/// waiting for the debounce to elapse) or *in flight* (part of a dispatched
/// batch whose response has not been applied). A text is never queued while
/// it is in flight for the same language, which keeps dispatch idempotent.
#[derive(Debug, Default)]
pub struct PendingTracker {
    /// Queued texts per language.
    queued: HashMap<Language, QueuedKeys>,
    /// Dispatched texts per language.
    in_flight: HashMap<Language, HashSet<String>>,
}

impl PendingTracker {
    /// Empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Queue `text` for `language`.
    ///
    /// Output:
    /// - `true` when the text was newly queued; `false` when it was already
    ///   queued or in flight.
    pub fn register(&mut self, language: Language, text: &str) -> bool {
        if self
            .in_flight
            .get(&language)
            .is_some_and(|s| s.contains(text))
        {
            return false;
        }
        let queue = self.queued.entry(language).or_default();
        if !queue.members.insert(text.to_string()) {
            return false;
        }
        queue.order.push(text.to_string());
        true
    }

    /// `true` while `text` is queued or in flight for `language`.
    #[must_use]
    pub fn contains(&self, language: Language, text: &str) -> bool {
        self.queued
            .get(&language)
            .is_some_and(|q| q.members.contains(text))
            || self
                .in_flight
                .get(&language)
                .is_some_and(|s| s.contains(text))
    }

    /// What: Drain the queue of `language` for dispatch.
    ///
    /// Inputs:
    /// - `language`: Language active at flush time
    ///
    /// Output:
    /// - `(texts, dropped)`: queued texts of `language` in registration order,
    ///   and how many texts queued under other languages were discarded.
    ///
    /// Details:
    /// - Queues of other languages belong to a selection that is no longer
    ///   current; rendering re-registers them if that language returns.
    /// - In-flight texts are untouched.
    pub fn take_queued(&mut self, language: Language) -> (Vec<String>, usize) {
        let texts = self
            .queued
            .remove(&language)
            .map(|q| q.order)
            .unwrap_or_default();
        let dropped = self.queued.values().map(|q| q.order.len()).sum();
        self.queued.clear();
        (texts, dropped)
    }

    /// Record `texts` as dispatched for `language`.
    pub fn mark_in_flight(&mut self, language: Language, texts: &[String]) {
        self.in_flight
            .entry(language)
            .or_default()
            .extend(texts.iter().cloned());
    }

    /// Remove `texts` once the response that owns them has been applied.
    pub fn resolve(&mut self, language: Language, texts: &[String]) {
        if let Some(set) = self.in_flight.get_mut(&language) {
            for text in texts {
                set.remove(text);
            }
            if set.is_empty() {
                self.in_flight.remove(&language);
            }
        }
    }

    /// `true` when nothing is queued or in flight for `language`.
    #[must_use]
    pub fn is_idle(&self, language: Language) -> bool {
        self.queued.get(&language).is_none_or(|q| q.order.is_empty())
            && !self.in_flight.contains_key(&language)
    }

    /// Number of texts queued or in flight for `language`.
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.queued.get(&language).map_or(0, |q| q.order.len())
            + self.in_flight.get(&language).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_idempotent_and_ordered() {
        let mut p = PendingTracker::new();
        assert!(p.register(Language::Hindi, "B"));
        assert!(p.register(Language::Hindi, "A"));
        assert!(!p.register(Language::Hindi, "B"));
        assert_eq!(p.len(Language::Hindi), 2);

        let (texts, dropped) = p.take_queued(Language::Hindi);
        assert_eq!(texts, vec!["B".to_string(), "A".to_string()]);
        assert_eq!(dropped, 0);
    }

    #[test]
    /// What: An in-flight text is still pending and cannot be queued again.
    fn in_flight_blocks_requeue_until_resolved() {
        let mut p = PendingTracker::new();
        p.register(Language::Tamil, "Hello");
        let (texts, _) = p.take_queued(Language::Tamil);
        p.mark_in_flight(Language::Tamil, &texts);

        assert!(p.contains(Language::Tamil, "Hello"));
        assert!(!p.register(Language::Tamil, "Hello"));
        assert!(!p.is_idle(Language::Tamil));

        p.resolve(Language::Tamil, &texts);
        assert!(!p.contains(Language::Tamil, "Hello"));
        assert!(p.is_idle(Language::Tamil));
        assert!(p.register(Language::Tamil, "Hello"));
    }

    #[test]
    fn flush_discards_queues_of_other_languages() {
        let mut p = PendingTracker::new();
        p.register(Language::Hindi, "A");
        p.register(Language::Hindi, "B");
        p.register(Language::Tamil, "C");

        let (texts, dropped) = p.take_queued(Language::Tamil);
        assert_eq!(texts, vec!["C".to_string()]);
        assert_eq!(dropped, 2);
        assert!(!p.contains(Language::Hindi, "A"));
    }

    #[test]
    fn languages_do_not_share_pending_entries() {
        let mut p = PendingTracker::new();
        p.register(Language::Hindi, "Hello");
        let (texts, _) = p.take_queued(Language::Hindi);
        p.mark_in_flight(Language::Hindi, &texts);

        assert!(!p.contains(Language::Tamil, "Hello"));
        assert!(p.register(Language::Tamil, "Hello"));
    }
}
