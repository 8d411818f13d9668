//! Cursor-based pagination over a task snapshot.
//!
//! The snapshot arrives in insertion order (oldest first). The requested sort
//! direction is applied first, producing the working sequence; the cursor is
//! then resolved against that working sequence, so "the page after id X" means
//! the same thing whichever direction the caller is paging in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Task, TaskError, TaskResult};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page a single request may ask for.
pub const MAX_PAGE_SIZE: usize = 100;

/// Order in which tasks are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Insertion order, oldest first
    Asc,
    /// Reverse insertion order, newest first
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(TaskError::unknown_sort(s)),
        }
    }
}

/// A fully resolved page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page size; signed so out-of-range input can be echoed back
    pub page_size: i64,
    pub sort: SortDirection,
    /// Id of the last task seen on the previous page
    pub cursor: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE as i64,
            sort: SortDirection::default(),
            cursor: None,
        }
    }
}

/// Outcome of a pagination call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// A non-empty, contiguous batch of tasks
    Items(Vec<Task>),
    /// Nothing left to show (empty store or cursor at the end)
    Empty,
}

impl Page {
    pub fn len(&self) -> usize {
        match self {
            Page::Items(items) => items.len(),
            Page::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Page::Empty)
    }

    /// Id of the last task on this page, for use as the next cursor.
    pub fn next_cursor(&self) -> Option<&str> {
        match self {
            Page::Items(items) => items.last().map(|t| t.id.as_str()),
            Page::Empty => None,
        }
    }

    pub fn into_items(self) -> Vec<Task> {
        match self {
            Page::Items(items) => items,
            Page::Empty => Vec::new(),
        }
    }
}

/// Select one page from an insertion-ordered snapshot.
pub fn paginate(snapshot: Vec<Task>, request: &PageRequest) -> TaskResult<Page> {
    let mut working = snapshot;
    if request.sort == SortDirection::Desc {
        working.reverse();
    }

    if request.page_size > MAX_PAGE_SIZE as i64 {
        return Err(TaskError::page_size_too_large(
            request.page_size,
            MAX_PAGE_SIZE,
        ));
    }
    if request.page_size < 1 {
        return Err(TaskError::page_size_too_small(request.page_size));
    }
    let page_size = request.page_size as usize;

    let start = match request.cursor.as_deref() {
        Some(cursor) => {
            let index = working
                .iter()
                .position(|t| t.id == cursor)
                .ok_or_else(|| TaskError::unknown_cursor(cursor))?;
            index + 1
        }
        None => 0,
    };

    if start >= working.len() {
        return Ok(Page::Empty);
    }

    let items: Vec<Task> = working.into_iter().skip(start).take(page_size).collect();
    Ok(Page::Items(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Task> {
        (1..=count)
            .map(|n| Task {
                id: format!("id-{:02}", n),
                title: format!("Task #{:02}", n),
                description: String::new(),
                tags: Vec::new(),
            })
            .collect()
    }

    fn titles(page: &Page) -> Vec<String> {
        match page {
            Page::Items(items) => items.iter().map(|t| t.title.clone()).collect(),
            Page::Empty => Vec::new(),
        }
    }

    fn request(page_size: i64, sort: SortDirection, cursor: Option<&str>) -> PageRequest {
        PageRequest {
            page_size,
            sort,
            cursor: cursor.map(str::to_string),
        }
    }

    #[test]
    fn test_default_desc_pages_follow_cursor() {
        let tasks = numbered(15);

        let first = paginate(tasks.clone(), &request(5, SortDirection::Desc, None)).unwrap();
        assert_eq!(
            titles(&first),
            vec!["Task #15", "Task #14", "Task #13", "Task #12", "Task #11"]
        );

        let cursor = first.next_cursor().unwrap().to_string();
        assert_eq!(cursor, "id-11");
        let second = paginate(tasks, &request(5, SortDirection::Desc, Some(&cursor))).unwrap();
        assert_eq!(
            titles(&second),
            vec!["Task #10", "Task #09", "Task #08", "Task #07", "Task #06"]
        );
    }

    #[test]
    fn test_cursor_is_resolved_after_direction_is_applied() {
        let tasks = numbered(6);
        // In ascending order the task after id-03 is id-04; descending it is id-02.
        let asc = paginate(tasks.clone(), &request(1, SortDirection::Asc, Some("id-03"))).unwrap();
        assert_eq!(titles(&asc), vec!["Task #04"]);

        let desc = paginate(tasks, &request(1, SortDirection::Desc, Some("id-03"))).unwrap();
        assert_eq!(titles(&desc), vec!["Task #02"]);
    }

    #[test]
    fn test_page_length_is_min_of_size_and_remaining() {
        let tasks = numbered(23);
        for size in 1..=MAX_PAGE_SIZE as i64 {
            for cursor_pos in [None, Some(0usize), Some(10), Some(21)] {
                let cursor = cursor_pos.map(|i| tasks[i].id.clone());
                let req = request(size, SortDirection::Asc, cursor.as_deref());
                let page = paginate(tasks.clone(), &req).unwrap();
                let remaining = match cursor_pos {
                    Some(i) => tasks.len() - (i + 1),
                    None => tasks.len(),
                };
                assert_eq!(page.len(), (size as usize).min(remaining));
            }
        }
    }

    #[test]
    fn test_chained_pages_cover_store_exactly_once() {
        let tasks = numbered(17);
        for sort in [SortDirection::Asc, SortDirection::Desc] {
            let mut seen: Vec<String> = Vec::new();
            let mut cursor: Option<String> = None;
            loop {
                let page = paginate(tasks.clone(), &request(4, sort, cursor.as_deref())).unwrap();
                match page {
                    Page::Empty => break,
                    Page::Items(items) => {
                        cursor = items.last().map(|t| t.id.clone());
                        seen.extend(items.into_iter().map(|t| t.id));
                    }
                }
            }
            let mut expected: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
            if sort == SortDirection::Desc {
                expected.reverse();
            }
            assert_eq!(seen, expected, "sort {:?}", sort);
        }
    }

    #[test]
    fn test_empty_store_is_empty_page() {
        assert_eq!(paginate(Vec::new(), &PageRequest::default()), Ok(Page::Empty));
    }

    #[test]
    fn test_empty_store_with_cursor_is_validation_error() {
        let err = paginate(Vec::new(), &request(10, SortDirection::Desc, Some("gone"))).unwrap_err();
        assert_eq!(err, TaskError::unknown_cursor("gone"));
    }

    #[test]
    fn test_cursor_at_last_position_is_empty_page() {
        let tasks = numbered(3);
        let page = paginate(tasks, &request(10, SortDirection::Asc, Some("id-03"))).unwrap();
        assert_eq!(page, Page::Empty);
    }

    #[test]
    fn test_page_size_ceiling() {
        let tasks = numbered(3);
        assert!(paginate(tasks.clone(), &request(100, SortDirection::Desc, None)).is_ok());

        let err = paginate(tasks, &request(101, SortDirection::Desc, None)).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(message.contains("101"));
        assert!(message.contains("100"));
    }

    #[test]
    fn test_page_size_must_be_positive() {
        let err = paginate(numbered(3), &request(0, SortDirection::Desc, None)).unwrap_err();
        assert_eq!(err, TaskError::page_size_too_small(0));
        let err = paginate(numbered(3), &request(-4, SortDirection::Desc, None)).unwrap_err();
        assert_eq!(err.to_string(), "page size -4 must be at least 1");
    }

    #[test]
    fn test_unknown_cursor_names_the_id() {
        let err = paginate(numbered(3), &request(10, SortDirection::Desc, Some("1234"))).unwrap_err();
        assert_eq!(err.to_string(), "cursor id 1234 not found");
    }

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("Desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(
            "sideways".parse::<SortDirection>(),
            Err(TaskError::unknown_sort("sideways"))
        );
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }
}
