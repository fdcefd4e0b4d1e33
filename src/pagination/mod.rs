//! Cursor pagination for list methods.
//!
//! List methods take an input cursor and limit and return a continuation
//! cursor next to the page. Callers feed the cursor back until it comes back
//! empty. [`CursorPager`] drives that loop.

use crate::errors::SlackResult;
use crate::types::Cursor;
use futures::future::BoxFuture;
use std::collections::HashSet;
use tracing::warn;

/// A single page of results plus the cursor for the next one
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Cursor for the next page, empty on the last page
    pub next_cursor: Cursor,
}

impl<T> CursorPage<T> {
    /// Creates a new page
    pub fn new(items: Vec<T>, next_cursor: Cursor) -> Self {
        Self { items, next_cursor }
    }

    /// Returns true if there is a next page
    pub fn has_next(&self) -> bool {
        !self.next_cursor.is_empty()
    }

    /// Returns the number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page and returns the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Consumes the page and returns `(items, next_cursor)`
    pub fn into_parts(self) -> (Vec<T>, Cursor) {
        (self.items, self.next_cursor)
    }
}

impl<T> IntoIterator for CursorPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Fetches the page that starts at the given cursor
pub type PageFetcher<T> = Box<dyn FnMut(Cursor) -> BoxFuture<'static, SlackResult<CursorPage<T>>> + Send>;

/// Async iterator over every page of a cursor-paginated method.
///
/// Iteration ends after a page with an empty cursor. A cursor that was
/// already requested also ends iteration, so the same page is never fetched
/// twice.
pub struct CursorPager<T> {
    fetch: PageFetcher<T>,
    next_cursor: Option<Cursor>,
    requested: HashSet<Cursor>,
}

impl<T> CursorPager<T> {
    /// Creates a pager starting from the first page
    pub fn new(fetch: PageFetcher<T>) -> Self {
        Self::from_cursor(fetch, Cursor::default())
    }

    /// Creates a pager that resumes at `cursor`
    pub fn from_cursor(fetch: PageFetcher<T>, cursor: Cursor) -> Self {
        Self {
            fetch,
            next_cursor: Some(cursor),
            requested: HashSet::new(),
        }
    }

    /// Fetches the next page, or `None` once exhausted
    pub async fn next_page(&mut self) -> SlackResult<Option<CursorPage<T>>> {
        let Some(cursor) = self.next_cursor.take() else {
            return Ok(None);
        };
        self.requested.insert(cursor.clone());

        let page = (self.fetch)(cursor).await?;

        if page.has_next() {
            if self.requested.contains(&page.next_cursor) {
                warn!(cursor = %page.next_cursor, "Cursor repeated, stopping pagination");
            } else {
                self.next_cursor = Some(page.next_cursor.clone());
            }
        }

        Ok(Some(page))
    }

    /// Collects all items from all pages
    pub async fn collect_all(mut self) -> SlackResult<Vec<T>> {
        let mut all_items = Vec::new();

        while let Some(page) = self.next_page().await? {
            all_items.extend(page.into_items());
        }

        Ok(all_items)
    }

    /// Returns true if there are more pages
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

impl<T> std::fmt::Debug for CursorPager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorPager")
            .field("next_cursor", &self.next_cursor)
            .field("pages_requested", &self.requested.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SlackError;
    use futures::FutureExt;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Static collection keyed by input cursor, recording every request
    fn static_fetcher(
        pages: Vec<(&'static str, Vec<u32>, &'static str)>,
        calls: Arc<Mutex<Vec<String>>>,
    ) -> PageFetcher<u32> {
        let pages: HashMap<String, (Vec<u32>, String)> = pages
            .into_iter()
            .map(|(input, items, next)| (input.to_string(), (items, next.to_string())))
            .collect();
        Box::new(move |cursor: Cursor| {
            calls.lock().push(cursor.as_str().to_string());
            let result = match pages.get(cursor.as_str()) {
                Some((items, next)) => Ok(CursorPage::new(items.clone(), Cursor::new(next.clone()))),
                None => Err(SlackError::api("invalid_cursor")),
            };
            async move { result }.boxed()
        })
    }

    #[tokio::test]
    async fn test_feeds_cursor_back_until_empty() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let pager = CursorPager::new(static_fetcher(
            vec![("", vec![1, 2], "c1"), ("c1", vec![3], "c2"), ("c2", vec![4], "")],
            calls.clone(),
        ));

        let items = pager.collect_all().await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(*calls.lock(), vec!["", "c1", "c2"]);
    }

    #[tokio::test]
    async fn test_repeated_cursor_stops() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut pager = CursorPager::new(static_fetcher(
            vec![("", vec![1], "c1"), ("c1", vec![2], "c1")],
            calls.clone(),
        ));

        assert!(pager.next_page().await.unwrap().is_some());
        assert!(pager.next_page().await.unwrap().is_some());
        assert!(!pager.has_more());
        assert!(pager.next_page().await.unwrap().is_none());
        assert_eq!(calls.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_error_propagates() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let pager = CursorPager::from_cursor(
            static_fetcher(vec![("", vec![1], "")], calls),
            Cursor::new("stale"),
        );

        let err = pager.collect_all().await.unwrap_err();
        assert_eq!(err.remote_code(), Some("invalid_cursor"));
    }

    #[test]
    fn test_page_operations() {
        let page = CursorPage::new(vec!["U1", "U2"], Cursor::new("abc"));
        assert_eq!(page.len(), 2);
        assert!(page.has_next());
        let (items, cursor) = page.into_parts();
        assert_eq!(items, vec!["U1", "U2"]);
        assert_eq!(cursor.as_str(), "abc");

        let last: CursorPage<u8> = CursorPage::new(vec![], Cursor::default());
        assert!(last.is_empty());
        assert!(!last.has_next());
    }
}
