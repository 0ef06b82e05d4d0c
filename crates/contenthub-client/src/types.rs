//! Type definitions for the content hub API

/// Which API surface a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Published (ready) content served by the delivery service
    Delivery,
    /// Draft content served by the authoring service, requires an
    /// authenticated session
    Authoring,
}

impl Endpoint {
    /// Sub-path for content retrieval by id
    pub(crate) fn content_path(self) -> &'static str {
        match self {
            Endpoint::Delivery => "/delivery/v1/content",
            Endpoint::Authoring => "/authoring/v1/content",
        }
    }

    /// Sub-path for search
    pub(crate) fn search_path(self) -> &'static str {
        match self {
            Endpoint::Delivery => "/delivery/v1/search",
            Endpoint::Authoring => "/authoring/v1/search",
        }
    }
}

/// Builder for search query parameters
///
/// Collects key/value pairs and percent-encodes them into a query string,
/// so callers do not have to hand-encode Solr syntax:
///
/// ```
/// use contenthub_client::SearchQuery;
///
/// let query = SearchQuery::new()
///     .query("*:*")
///     .fields("name,document,id,classification,type,status")
///     .filter("classification:content");
/// assert!(query.encode().starts_with("q=*%3A*"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    params: Vec<(String, String)>,
}

impl SearchQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main query expression (`q` parameter)
    pub fn query(self, q: impl Into<String>) -> Self {
        self.param("q", q)
    }

    /// Restrict the fields returned per document (`fl` parameter)
    pub fn fields(self, fl: impl Into<String>) -> Self {
        self.param("fl", fl)
    }

    /// Add a filter query (`fq` parameter); may be given more than once
    pub fn filter(self, fq: impl Into<String>) -> Self {
        self.param("fq", fq)
    }

    /// Add an arbitrary parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Percent-encode the collected pairs into a query string
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Delivery.content_path(), "/delivery/v1/content");
        assert_eq!(Endpoint::Authoring.content_path(), "/authoring/v1/content");
        assert_eq!(Endpoint::Delivery.search_path(), "/delivery/v1/search");
        assert_eq!(Endpoint::Authoring.search_path(), "/authoring/v1/search");
    }

    #[test]
    fn test_empty_query_encodes_to_empty_string() {
        assert_eq!(SearchQuery::new().encode(), "");
    }

    #[test]
    fn test_query_pairs_are_encoded_in_order() {
        let query = SearchQuery::new()
            .query("*:*")
            .filter("classification:content");
        assert_eq!(query.encode(), "q=*%3A*&fq=classification%3Acontent");
    }

    #[test]
    fn test_repeated_filters_are_kept() {
        let query = SearchQuery::new()
            .filter("type:article")
            .filter("status:ready");
        assert_eq!(query.encode(), "fq=type%3Aarticle&fq=status%3Aready");
    }

    #[test]
    fn test_values_with_spaces_are_escaped() {
        let query = SearchQuery::new().param("q", "name:\"press release\"");
        assert_eq!(query.encode(), "q=name%3A%22press+release%22");
    }
}
