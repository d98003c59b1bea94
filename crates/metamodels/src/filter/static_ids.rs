use super::FilterRule;
use crate::error::Result;
use crate::model::ItemId;

/// A fixed list of ids, returned as given.
///
/// Useful for seeding a condition with a pre-computed selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdList {
    ids: Vec<ItemId>,
}

impl StaticIdList {
    pub fn new(ids: impl Into<Vec<ItemId>>) -> Self {
        Self { ids: ids.into() }
    }
}

impl FilterRule for StaticIdList {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        Ok(self.ids.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_ids_unchanged() {
        let rule = StaticIdList::new([5, 1, 5]);
        assert_eq!(rule.matching_ids().unwrap(), vec![5, 1, 5]);
    }

    #[test]
    fn default_is_empty() {
        assert!(StaticIdList::default().matching_ids().unwrap().is_empty());
    }
}
