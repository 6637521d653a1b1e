//! Client-side paging of a project's task list.

/// Tasks shown per page on the project page.
pub const TASKS_PER_PAGE: usize = 15;

/// Current page over a list of `len` items. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPager {
    page: usize,
    per_page: usize,
}

impl Default for TaskPager {
    fn default() -> Self {
        Self::new(TASKS_PER_PAGE)
    }
}

impl TaskPager {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// At least one page, even for an empty list.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.per_page).max(1)
    }

    /// The selected page, clamped to what `len` items can fill.
    pub fn current(&self, len: usize) -> usize {
        self.page.clamp(1, self.page_count(len))
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current(items.len()) - 1) * self.per_page;
        let end = (start + self.per_page).min(items.len());
        &items[start.min(end)..end]
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn has_prev(&self, len: usize) -> bool {
        self.current(len) > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current(len) < self.page_count(len)
    }

    pub fn pages(&self, len: usize) -> impl Iterator<Item = usize> {
        1..=self.page_count(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_seven_tasks() {
        let tasks: Vec<u32> = (1..=37).collect();
        let mut pager = TaskPager::default();
        assert_eq!(pager.page_count(tasks.len()), 3);
        assert_eq!(pager.slice(&tasks).len(), 15);
        assert!(!pager.has_prev(tasks.len()));

        pager.go_to(3);
        assert_eq!(pager.slice(&tasks), &tasks[30..]);
        assert_eq!(pager.slice(&tasks).len(), 7);
        assert!(pager.has_prev(tasks.len()));
        assert!(!pager.has_next(tasks.len()));
    }

    #[test]
    fn test_page_clamps_when_list_shrinks() {
        let mut pager = TaskPager::new(15);
        pager.go_to(3);
        let tasks: Vec<u32> = (1..=16).collect();
        assert_eq!(pager.current(tasks.len()), 2);
        assert_eq!(pager.slice(&tasks), &[16]);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let pager = TaskPager::default();
        let empty: [u32; 0] = [];
        assert_eq!(pager.page_count(0), 1);
        assert!(pager.slice(&empty).is_empty());
        assert_eq!(pager.pages(0).collect::<Vec<_>>(), vec![1]);
    }
}
