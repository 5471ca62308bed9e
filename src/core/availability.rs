use crate::domain::model::AvailabilityMap;

impl AvailabilityMap {
    /// Returns a copy of this map with `date_key` flipped. A date that was never
    /// set counts as closed, so its first toggle opens it. `self` is not touched.
    pub fn toggled(&self, date_key: &str) -> Self {
        let open = !self.is_available(date_key);
        tracing::debug!("Availability for {} -> {}", date_key, open);

        let mut entries = self.entries.clone();
        entries.insert(date_key.to_string(), open);
        Self { entries }
    }
}
