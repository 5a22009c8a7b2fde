//! Form Query Planner
//!
//! Turns a table-paging request (search, sort, page window) into bounded
//! gateway parameters and wraps the gateway's page back into a result that
//! echoes the caller's draw token.
//!
//! Sort targets are only ever taken from the declared column list, selected
//! by a bounds-checked index. Free text from the request never becomes a
//! sort column.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SortDirection;
use crate::ports::outbound::FormsPage;

/// Page size used when the request asks for zero or fewer rows
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Logical column used when no valid sort entry is present
pub const DEFAULT_SORT_COLUMN: &str = "formId";

/// Incoming paging request, shaped after the DataTables server-side protocol
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedQueryRequest {
    /// Opaque token echoed back in the result
    #[serde(default)]
    pub draw: i32,
    /// Row offset of the first requested row
    #[serde(default)]
    pub start: i32,
    /// Requested page size
    #[serde(default)]
    pub length: i32,
    /// Global search box
    #[serde(default)]
    pub search: Option<SearchSpec>,
    /// Requested orderings; only the first one is honoured
    #[serde(default)]
    pub order: Vec<SortOrder>,
    /// Declared columns, index → logical name
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// Global search term
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Search text; absent means no filtering
    #[serde(default)]
    pub value: Option<String>,
}

/// One requested ordering
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Index into the declared column list
    pub column: i64,
    /// `asc` / `desc`, any case
    #[serde(default)]
    pub dir: Option<String>,
}

/// Declared column
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Logical column name
    #[serde(default)]
    pub data: Option<String>,
}

impl ColumnSpec {
    /// Column with the given logical name
    pub fn named(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }
}

/// Bounded parameters handed to the gateway
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SanitizedQuery {
    /// Echoed draw token
    pub draw: i32,
    /// 1-based page number
    pub page_number: i32,
    /// Rows per page, always positive
    pub page_size: i32,
    /// Search text, empty for none
    pub search_text: String,
    /// Logical column name taken from the declared column list
    pub sort_column: String,
    /// Sort direction
    pub sort_direction: SortDirection,
}

impl SanitizedQuery {
    /// Row offset implied by the page number
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number - 1) * i64::from(self.page_size)
    }
}

/// Result page with counts, echoing the draw token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedQueryResult<T> {
    /// Draw token from the request
    pub draw: i32,
    /// Every stored form
    pub total_count: i64,
    /// Forms matching the search text
    pub filtered_count: i64,
    /// Rows of the requested page
    pub rows: Vec<T>,
}

/// Query planner
pub struct QueryPlanner;

impl QueryPlanner {
    /// Sanitize a request into gateway parameters
    pub fn plan(request: &PagedQueryRequest) -> SanitizedQuery {
        let page_size = if request.length <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            request.length
        };
        let offset = request.start.max(0);
        let (sort_column, sort_direction) = Self::resolve_sort(request);

        SanitizedQuery {
            draw: request.draw,
            page_number: (offset / page_size).saturating_add(1),
            page_size,
            search_text: request
                .search
                .as_ref()
                .and_then(|s| s.value.clone())
                .unwrap_or_default(),
            sort_column,
            sort_direction,
        }
    }

    /// Wrap gateway rows and counts. Counts are taken as-is.
    pub fn assemble<T>(
        rows: Vec<T>,
        total_count: i64,
        filtered_count: i64,
        draw: i32,
    ) -> PagedQueryResult<T> {
        PagedQueryResult {
            draw,
            total_count,
            filtered_count,
            rows,
        }
    }

    /// Shorthand for [`QueryPlanner::assemble`] over a gateway page
    pub fn assemble_page(
        page: FormsPage,
        draw: i32,
    ) -> PagedQueryResult<crate::domain::form::FormListItem> {
        Self::assemble(page.rows, page.total_count, page.filtered_count, draw)
    }

    fn resolve_sort(request: &PagedQueryRequest) -> (String, SortDirection) {
        let Some(order) = request.order.first() else {
            return (DEFAULT_SORT_COLUMN.to_string(), SortDirection::Desc);
        };

        let column = usize::try_from(order.column)
            .ok()
            .and_then(|index| request.columns.get(index));

        match column {
            Some(column) => (
                column
                    .data
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SORT_COLUMN.to_string()),
                SortDirection::parse_lenient(order.dir.as_deref()),
            ),
            None => (DEFAULT_SORT_COLUMN.to_string(), SortDirection::Desc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(start: i32, length: i32) -> PagedQueryRequest {
        PagedQueryRequest {
            draw: 1,
            start,
            length,
            ..Default::default()
        }
    }

    fn sorted(column: i64, dir: &str) -> PagedQueryRequest {
        PagedQueryRequest {
            order: vec![SortOrder {
                column,
                dir: Some(dir.into()),
            }],
            columns: vec![ColumnSpec::named("FormId"), ColumnSpec::named("FormTitle")],
            ..request(0, 10)
        }
    }

    #[test]
    fn test_page_number() {
        assert_eq!(QueryPlanner::plan(&request(20, 10)).page_number, 3);
        assert_eq!(QueryPlanner::plan(&request(0, 10)).page_number, 1);
        assert_eq!(QueryPlanner::plan(&request(25, 10)).page_number, 3);
    }

    #[test]
    fn test_page_size_defaults() {
        assert_eq!(QueryPlanner::plan(&request(0, 0)).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(QueryPlanner::plan(&request(0, -4)).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(QueryPlanner::plan(&request(0, 25)).page_size, 25);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let query = QueryPlanner::plan(&request(-5, 10));
        assert_eq!(query.page_number, 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_search_defaults_to_empty() {
        assert_eq!(QueryPlanner::plan(&request(0, 10)).search_text, "");

        let mut req = request(0, 10);
        req.search = Some(SearchSpec { value: None });
        assert_eq!(QueryPlanner::plan(&req).search_text, "");

        req.search = Some(SearchSpec {
            value: Some("survey".into()),
        });
        assert_eq!(QueryPlanner::plan(&req).search_text, "survey");
    }

    #[test]
    fn test_sort_column_from_declared_list() {
        let query = QueryPlanner::plan(&sorted(1, "asc"));
        assert_eq!(query.sort_column, "FormTitle");
        assert_eq!(query.sort_direction, SortDirection::Asc);

        let query = QueryPlanner::plan(&sorted(0, "DeSc"));
        assert_eq!(query.sort_column, "FormId");
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_out_of_range_sort_defaults() {
        for column in [2, 99, -1] {
            let query = QueryPlanner::plan(&sorted(column, "asc"));
            assert_eq!(query.sort_column, DEFAULT_SORT_COLUMN);
            assert_eq!(query.sort_direction, SortDirection::Desc);
        }
    }

    #[test]
    fn test_no_order_defaults() {
        let query = QueryPlanner::plan(&request(0, 10));
        assert_eq!(query.sort_column, DEFAULT_SORT_COLUMN);
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_unnamed_column_keeps_direction() {
        let mut req = sorted(0, "asc");
        req.columns[0].data = None;
        let query = QueryPlanner::plan(&req);
        assert_eq!(query.sort_column, DEFAULT_SORT_COLUMN);
        assert_eq!(query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_assemble_echoes_draw_and_counts() {
        let result = QueryPlanner::assemble(vec!["a", "b"], 40, 2, 7);
        assert_eq!(result.draw, 7);
        assert_eq!(result.total_count, 40);
        assert_eq!(result.filtered_count, 2);
        assert_eq!(result.rows, vec!["a", "b"]);
    }

    #[test]
    fn test_request_deserializes_datatables_payload() {
        let req: PagedQueryRequest = serde_json::from_str(
            r#"{
                "draw": 3, "start": 10, "length": 5,
                "search": {"value": "abc", "regex": false},
                "order": [{"column": 1, "dir": "asc"}],
                "columns": [{"data": "formId", "name": "", "searchable": true}, {"data": "formTitle"}]
            }"#,
        )
        .unwrap();

        let query = QueryPlanner::plan(&req);
        assert_eq!(query.draw, 3);
        assert_eq!(query.page_number, 3);
        assert_eq!(query.page_size, 5);
        assert_eq!(query.search_text, "abc");
        assert_eq!(query.sort_column, "formTitle");
    }

    proptest! {
        #[test]
        fn prop_plan_is_bounded(start in any::<i32>(), length in any::<i32>(), column in any::<i64>()) {
            let declared = ["formId", "formTitle", "createdDate"];
            let req = PagedQueryRequest {
                start,
                length,
                order: vec![SortOrder { column, dir: Some("asc".into()) }],
                columns: declared.iter().map(|c| ColumnSpec::named(*c)).collect(),
                ..Default::default()
            };

            let query = QueryPlanner::plan(&req);
            prop_assert!(query.page_size > 0);
            prop_assert!(query.page_number >= 1);
            prop_assert!(query.offset() >= 0);
            prop_assert!(query.offset() <= i64::from(start.max(0)));
            prop_assert!(declared.contains(&query.sort_column.as_str()));
        }
    }
}
