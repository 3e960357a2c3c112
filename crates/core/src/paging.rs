//! Pagination helpers shared by path listing and history scans.
//!
//! Both helpers drive a paging primitive `fetch(token) -> Page<T>`, starting
//! with `None` and following `next_token` until a page arrives without one.

use crate::types::Page;

/// Accumulate every page into one ordered sequence.
///
/// Stops at the first page flagged as last; never stops earlier.
pub fn drain_pages<T, E, F>(mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, E>,
{
    let mut items = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let page = fetch(token.as_deref())?;
        items.extend(page.items);
        match page.next_token {
            Some(next) => token = Some(next),
            None => return Ok(items),
        }
    }
}

/// Return the first item matching `pred`, fetching pages only until found.
pub fn find_in_pages<T, E, F, P>(mut fetch: F, mut pred: P) -> Result<Option<T>, E>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, E>,
    P: FnMut(&T) -> bool,
{
    let mut token: Option<String> = None;
    loop {
        let page = fetch(token.as_deref())?;
        if let Some(found) = page.items.into_iter().find(|item| pred(item)) {
            return Ok(Some(found));
        }
        match page.next_token {
            Some(next) => token = Some(next),
            None => return Ok(None),
        }
    }
}
