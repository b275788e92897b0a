//! List filters and their query-string encoding.
//!
//! Every filter encodes to ordered `(name, value)` pairs. Empty values are
//! omitted entirely rather than sent as `name=`.

/// Ordered query parameters.
pub type QueryParams = Vec<(&'static str, String)>;

fn push_non_empty(params: &mut QueryParams, name: &'static str, value: &str) {
    if !value.is_empty() {
        params.push((name, value.to_string()));
    }
}

/// Filter for the alumni directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub search: String,
}

impl DirectoryFilter {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_non_empty(&mut params, "search", &self.search);
        params
    }
}

/// Filter for the job board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub location: String,
    /// Job type label, empty for "All Types".
    pub job_type: String,
    pub field: String,
}

impl JobFilter {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_non_empty(&mut params, "search", &self.search);
        push_non_empty(&mut params, "location", &self.location);
        push_non_empty(&mut params, "type", &self.job_type);
        push_non_empty(&mut params, "field", &self.field);
        params
    }
}

/// Filter for the events list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub search: String,
    /// Event type label, empty for all types.
    pub event_type: String,
}

impl EventFilter {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_non_empty(&mut params, "search", &self.search);
        push_non_empty(&mut params, "type", &self.event_type);
        params
    }
}

/// Filter for the campaigns list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub search: String,
    /// Category label, empty for all categories.
    pub category: String,
}

impl CampaignFilter {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_non_empty(&mut params, "search", &self.search);
        push_non_empty(&mut params, "category", &self.category);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_params() {
        assert!(JobFilter::default().query_params().is_empty());
        assert!(EventFilter::default().query_params().is_empty());
        assert!(CampaignFilter::default().query_params().is_empty());
        assert!(DirectoryFilter::default().query_params().is_empty());
    }

    #[test]
    fn test_job_params_keep_fixed_order() {
        let filter = JobFilter {
            search: "rust".into(),
            location: String::new(),
            job_type: "Contract".into(),
            field: "Engineering".into(),
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("search", "rust".to_string()),
                ("type", "Contract".to_string()),
                ("field", "Engineering".to_string()),
            ]
        );
    }

    #[test]
    fn test_campaign_category_only() {
        let filter = CampaignFilter {
            search: String::new(),
            category: "Sports".into(),
        };
        assert_eq!(filter.query_params(), vec![("category", "Sports".to_string())]);
    }
}
