use crate::domain::{ServiceCategory, ServiceRecord};

/// The two-column service view: studio and nature buckets in presentation
/// order. Updates are targeted by identifier; there is no refetch.
#[derive(Debug, Clone, Default)]
pub struct ServiceColumns {
    studio: Vec<ServiceRecord>,
    nature: Vec<ServiceRecord>,
}

impl ServiceColumns {
    /// Partitions a flat record list, preserving its order within each
    /// bucket.
    pub fn partition(records: impl IntoIterator<Item = ServiceRecord>) -> Self {
        let mut columns = Self::default();
        for record in records {
            columns.bucket_mut(record.category).push(record);
        }
        columns
    }

    pub fn studio(&self) -> &[ServiceRecord] {
        &self.studio
    }

    pub fn nature(&self) -> &[ServiceRecord] {
        &self.nature
    }

    pub fn len(&self) -> usize {
        self.studio.len() + self.nature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studio.is_empty() && self.nature.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ServiceRecord> {
        self.studio
            .iter()
            .chain(self.nature.iter())
            .find(|record| record.id == id)
    }

    /// Replaces exactly the matching entry, leaving every other entry and
    /// the bucket order untouched. A category change moves the entry to the
    /// end of its new bucket in the same call. Returns false when no entry
    /// matches.
    pub fn apply_update(&mut self, updated: ServiceRecord) -> bool {
        let Some((current_category, index)) = self.locate(&updated.id) else {
            return false;
        };
        if current_category == updated.category {
            self.bucket_mut(current_category)[index] = updated;
        } else {
            self.bucket_mut(current_category).remove(index);
            self.bucket_mut(updated.category).push(updated);
        }
        true
    }

    /// Appends a newly created service to its bucket.
    pub fn insert(&mut self, record: ServiceRecord) {
        self.bucket_mut(record.category).push(record);
    }

    fn locate(&self, id: &str) -> Option<(ServiceCategory, usize)> {
        if let Some(index) = self.studio.iter().position(|record| record.id == id) {
            return Some((ServiceCategory::Studio, index));
        }
        self.nature
            .iter()
            .position(|record| record.id == id)
            .map(|index| (ServiceCategory::Nature, index))
    }

    fn bucket_mut(&mut self, category: ServiceCategory) -> &mut Vec<ServiceRecord> {
        match category {
            ServiceCategory::Studio => &mut self.studio,
            ServiceCategory::Nature => &mut self.nature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: ServiceCategory, price: f64) -> ServiceRecord {
        let mut record = ServiceRecord::new(id, category, id.to_uppercase());
        record.price = price;
        record
    }

    fn sample() -> ServiceColumns {
        ServiceColumns::partition(vec![
            record("stickwork", ServiceCategory::Studio, 100.0),
            record("doterra", ServiceCategory::Studio, 80.0),
            record("forest-bathing", ServiceCategory::Nature, 75.0),
        ])
    }

    #[test]
    fn partition_preserves_order() {
        let columns = sample();
        let studio_ids: Vec<&str> = columns.studio().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(studio_ids, vec!["stickwork", "doterra"]);
        assert_eq!(columns.nature().len(), 1);
    }

    #[test]
    fn update_replaces_exactly_one_entry_in_place() {
        let mut columns = sample();
        let mut updated = record("doterra", ServiceCategory::Studio, 95.0);
        updated.title = "doTERRA Session".into();
        assert!(columns.apply_update(updated));

        let studio = columns.studio();
        assert_eq!(studio[0].price, 100.0, "sibling untouched");
        assert_eq!(studio[1].price, 95.0);
        assert_eq!(studio[1].title, "doTERRA Session");
        let ids: Vec<&str> = studio.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["stickwork", "doterra"], "order preserved");
    }

    #[test]
    fn category_change_moves_buckets() {
        let mut columns = sample();
        assert!(columns.apply_update(record("doterra", ServiceCategory::Nature, 80.0)));
        assert_eq!(columns.studio().len(), 1);
        let nature_ids: Vec<&str> = columns.nature().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(nature_ids, vec!["forest-bathing", "doterra"]);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut columns = sample();
        assert!(!columns.apply_update(record("hot-stone", ServiceCategory::Studio, 50.0)));
        assert_eq!(columns.len(), 3);
    }
}
