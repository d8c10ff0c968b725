//! Pagination helpers for the `cursus_users` collection
//!
//! The Intra API pages collections with `page[size]`/`page[number]` query
//! parameters. There is no total count in the response body, so retrieval
//! stops the first time a page comes back shorter than the requested size.

use serde_json::Value;

use crate::client::IntraApi;
use crate::error::Result;

/// Default number of records requested per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Query parameters for the `cursus_users` collection.
#[derive(Debug, Clone)]
pub struct CursusUsersQuery {
    /// Cursus to filter on (`filter[cursus_id]`)
    pub cursus_id: u32,
    /// Campus to filter on (`filter[campus_id]`)
    pub campus_id: u32,
    /// Records per page (`page[size]`)
    pub page_size: usize,
}

impl Default for CursusUsersQuery {
    fn default() -> Self {
        Self {
            cursus_id: 21,
            campus_id: 64,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CursusUsersQuery {
    /// Convert to query string parameters for a given page number.
    ///
    /// Returns (key, value) pairs suitable for URL encoding, using the Intra
    /// API parameter names.
    pub fn to_query_params(&self, page: usize) -> Vec<(&'static str, String)> {
        vec![
            ("filter[cursus_id]", self.cursus_id.to_string()),
            ("filter[campus_id]", self.campus_id.to_string()),
            ("page[size]", self.page_size.to_string()),
            ("page[number]", page.to_string()),
        ]
    }
}

/// Fetch every page of `cursus_users` matching the query.
///
/// Pages are requested strictly one at a time starting at 1; the next page is
/// requested only after the previous one has been consumed. Retrieval stops
/// the first time a page holds fewer records than `query.page_size`. An empty
/// page is always terminal, so a zero page size cannot loop forever.
///
/// Known limitation: a short non-final page ends retrieval early. The API is
/// not expected to produce one, and there is no total count to check against.
///
/// `on_page` is invoked after each page with the page number and the running
/// record count, for progress reporting.
pub async fn fetch_all_pages<C, F>(
    client: &C,
    query: &CursusUsersQuery,
    mut on_page: F,
) -> Result<Vec<Value>>
where
    C: IntraApi + ?Sized,
    F: FnMut(usize, usize),
{
    let mut records = Vec::new();
    let mut page = 1;

    loop {
        let page_records = client.cursus_users_page(query, page).await?;
        let page_len = page_records.len();

        records.extend(page_records);
        on_page(page, records.len());

        if page_len < query.page_size || page_len == 0 {
            break;
        }

        page += 1;
    }

    Ok(records)
}
