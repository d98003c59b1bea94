//! Composite rules combining the results of child rules.

use super::FilterRule;
use crate::error::Result;
use crate::model::ItemId;
use std::collections::HashSet;
use tracing::trace;

/// Items matched by every child rule.
///
/// Keeps the order of the first child's result. Evaluation stops as soon as
/// the intersection is empty; remaining children are not evaluated. A
/// condition without children matches nothing.
#[derive(Default)]
pub struct ConditionAnd<'a> {
    rules: Vec<Box<dyn FilterRule + 'a>>,
}

impl<'a> ConditionAnd<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl FilterRule + 'a) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FilterRule for ConditionAnd<'_> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        let mut rules = self.rules.iter();
        let Some(first) = rules.next() else {
            return Ok(Vec::new());
        };

        let mut ids = first.matching_ids()?;
        for rule in rules {
            if ids.is_empty() {
                trace!("and-condition empty, skipping remaining rules");
                break;
            }
            let matched: HashSet<ItemId> = rule.matching_ids()?.into_iter().collect();
            ids.retain(|id| matched.contains(id));
        }
        Ok(ids)
    }
}

/// Items matched by at least one child rule.
///
/// Ids appear in the order they are first produced, without duplicates. With
/// `stop_after_match`, the first non-empty child result is returned as-is and
/// later children are not evaluated. A condition without children matches
/// nothing.
#[derive(Default)]
pub struct ConditionOr<'a> {
    rules: Vec<Box<dyn FilterRule + 'a>>,
    stop_after_match: bool,
}

impl<'a> ConditionOr<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_after_match(mut self, stop: bool) -> Self {
        self.stop_after_match = stop;
        self
    }

    pub fn with_rule(mut self, rule: impl FilterRule + 'a) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FilterRule for ConditionOr<'_> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for rule in &self.rules {
            let matched = rule.matching_ids()?;
            if self.stop_after_match && !matched.is_empty() {
                trace!("or-condition matched, skipping remaining rules");
                return Ok(matched);
            }
            ids.extend(matched.into_iter().filter(|id| seen.insert(*id)));
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::testing::RecordingAttribute;
    use crate::filter::{GreaterThan, StaticIdList};

    #[test]
    fn and_intersects_in_first_rule_order() {
        let rule = ConditionAnd::new()
            .with_rule(StaticIdList::new([4, 1, 3, 2]))
            .with_rule(StaticIdList::new([2, 3, 4]));
        assert_eq!(rule.matching_ids().unwrap(), vec![4, 3, 2]);
    }

    #[test]
    fn and_without_rules_matches_nothing() {
        let rule = ConditionAnd::new();
        assert!(rule.is_empty());
        assert!(rule.matching_ids().unwrap().is_empty());
    }

    #[test]
    fn and_short_circuits_on_empty_intersection() {
        let attr = RecordingAttribute::new("score").returning([1]);
        let rule = ConditionAnd::new()
            .with_rule(StaticIdList::new([1]))
            .with_rule(StaticIdList::new([2]))
            .with_rule(GreaterThan::new(&attr, 0));

        assert!(rule.matching_ids().unwrap().is_empty());
        assert!(attr.calls().is_empty());
    }

    #[test]
    fn and_propagates_child_faults() {
        let attr = RecordingAttribute::new("score").failing("boom");
        let rule = ConditionAnd::new()
            .with_rule(StaticIdList::new([1]))
            .with_rule(GreaterThan::new(&attr, 0));
        assert_eq!(rule.matching_ids().unwrap_err().to_string(), "boom");
    }

    #[test]
    fn or_unions_without_duplicates() {
        let rule = ConditionOr::new()
            .with_rule(StaticIdList::new([3, 1]))
            .with_rule(StaticIdList::new([1, 2, 3]))
            .with_rule(StaticIdList::new([5]));
        assert_eq!(rule.len(), 3);
        assert_eq!(rule.matching_ids().unwrap(), vec![3, 1, 2, 5]);
    }

    #[test]
    fn or_without_rules_matches_nothing() {
        assert!(ConditionOr::new().matching_ids().unwrap().is_empty());
    }

    #[test]
    fn or_stop_after_match_returns_first_hit() {
        let attr = RecordingAttribute::new("score").returning([9]);
        let rule = ConditionOr::new()
            .stop_after_match(true)
            .with_rule(StaticIdList::default())
            .with_rule(StaticIdList::new([2, 2]))
            .with_rule(GreaterThan::new(&attr, 0));

        assert_eq!(rule.matching_ids().unwrap(), vec![2, 2]);
        assert!(attr.calls().is_empty());
    }

    #[test]
    fn or_propagates_child_faults() {
        let attr = RecordingAttribute::new("score").failing("boom");
        let rule = ConditionOr::new()
            .with_rule(StaticIdList::new([1]))
            .with_rule(GreaterThan::new(&attr, 0));
        assert!(rule.matching_ids().is_err());
    }

    #[test]
    fn conditions_nest() {
        let rule = ConditionOr::new()
            .with_rule(
                ConditionAnd::new()
                    .with_rule(StaticIdList::new([1, 2, 3]))
                    .with_rule(StaticIdList::new([2, 3])),
            )
            .with_rule(StaticIdList::new([7]));
        assert_eq!(rule.matching_ids().unwrap(), vec![2, 3, 7]);
    }
}
