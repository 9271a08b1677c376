use serde::{Deserialize, Serialize};

/// One page of a list endpoint, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub size: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            number: 0,
            size: 0,
        }
    }
}

/// Sort direction appended to the `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query for a list endpoint.
///
/// `page` is zero-based, matching the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub size: usize,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<(String, SortDirection)>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            search: None,
            status: None,
            sort: None,
        }
    }
}

impl PageQuery {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    /// Sets the search term; blank input clears it.
    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        let search = search.as_ref().trim();
        self.search = (!search.is_empty()).then(|| search.to_owned());
        self
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.map(str::to_owned);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some((field.into(), direction));
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some((field, direction)) = &self.sort {
            pairs.push(("sort", format!("{field},{}", direction.as_str())));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_include_only_set_filters() {
        let query = PageQuery::new(2, 25);
        assert_eq!(
            query.to_query_pairs(),
            vec![("page", "2".to_owned()), ("size", "25".to_owned())]
        );

        let query = PageQuery::new(0, 10)
            .with_search("  dune ")
            .with_status(Some("ACTIVE"))
            .with_sort("title", SortDirection::Desc);
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "0".to_owned()),
                ("size", "10".to_owned()),
                ("search", "dune".to_owned()),
                ("status", "ACTIVE".to_owned()),
                ("sort", "title,desc".to_owned()),
            ]
        );
    }

    #[test]
    fn blank_search_is_dropped() {
        let query = PageQuery::default().with_search("   ");
        assert_eq!(query.search, None);
    }

    #[test]
    fn page_deserializes_with_missing_fields() {
        let page: Page<u32> = serde_json::from_str(r#"{"content":[1,2,3],"totalElements":42}"#)
            .expect("page should parse");

        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_elements, 42);
        assert_eq!(page.number, 0);
        assert_eq!(page.size, 0);
    }
}
