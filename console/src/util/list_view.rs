//! Client-side search, sort and pagination for the generic list view.
//!
//! DESIGN
//! ======
//! Lists are fetched whole and shaped in the browser. Each resource renders
//! to [`ListRow`]s through [`Listed`]; [`ListQuery`] holds the view's search,
//! sort and paging controls and [`apply`] turns rows plus query into the
//! visible page.

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;

use std::cmp::Ordering;

use session::UserProfile;

use crate::net::types::{Category, Item, Stock, StockMovement, Warehouse};

pub const PAGE_SIZES: [usize; 4] = [10, 30, 60, 100];
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZES[0];
/// Page numbers shown around the current page before eliding.
pub const VISIBLE_PAGES: usize = 5;

/// A resource that can be shown in the generic list view.
pub trait Listed {
    /// Column headers, in cell order.
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
    /// Text matched by the search box.
    fn search_text(&self) -> String;
    /// Detail route for the row, if the resource has one.
    fn detail_path(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub cells: Vec<String>,
    pub link: Option<String>,
    search: String,
}

impl ListRow {
    pub fn from_listed<T: Listed>(item: &T) -> Self {
        Self {
            cells: item.cells(),
            link: item.detail_path(),
            search: item.search_text().to_lowercase(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// Column index and direction. Rows keep fetch order when `None`.
    pub sort: Option<(usize, SortDirection)>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: Some((0, SortDirection::Asc)),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Header click: flip direction on the active column, else sort the new
    /// column ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((active, dir)) if active == column => Some((column, dir.flipped())),
            _ => Some((column, SortDirection::Asc)),
        };
        self.page = 1;
    }

    /// Unsupported sizes are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    #[must_use]
    pub fn sort_marker(&self, column: usize) -> &'static str {
        match self.sort {
            Some((active, dir)) if active == column => dir.arrow(),
            _ => "",
        }
    }
}

/// The slice of rows currently visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPage {
    pub rows: Vec<ListRow>,
    /// Rows matching the search, across all pages.
    pub matched: usize,
    pub page: usize,
    pub total_pages: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

pub fn filter_rows<'a>(rows: &'a [ListRow], search: &str) -> Vec<&'a ListRow> {
    let needle = search.trim().to_lowercase();
    rows.iter().filter(|row| row.search.contains(&needle)).collect()
}

/// Numeric when both cells parse as numbers, case-insensitive text otherwise.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

pub fn sort_rows(rows: &mut [&ListRow], column: usize, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let left = a.cells.get(column).map_or("", String::as_str);
        let right = b.cells.get(column).map_or("", String::as_str);
        let ord = compare_cells(left, right);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Search, sort, then slice out the requested page (clamped to the last one).
pub fn apply(rows: &[ListRow], query: &ListQuery) -> ListPage {
    let mut matched = filter_rows(rows, &query.search);
    if let Some((column, direction)) = query.sort {
        sort_rows(&mut matched, column, direction);
    }
    let size = query.page_size.max(1);
    let total_pages = total_pages(matched.len(), size);
    let page = query.page.clamp(1, total_pages);
    let rows = matched
        .iter()
        .skip((page - 1) * size)
        .take(size)
        .map(|row| (*row).clone())
        .collect();
    ListPage {
        rows,
        matched: matched.len(),
        page,
        total_pages,
    }
}

/// Page links around `current`, always including the first and last page,
/// with an ellipsis wherever pages are skipped.
pub fn page_range(current: usize, total: usize) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let half = VISIBLE_PAGES / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = (current + half).min(total);
    if end - start + 1 < VISIBLE_PAGES {
        if start == 1 {
            end = total.min(VISIBLE_PAGES);
        } else if end == total {
            start = total.saturating_sub(VISIBLE_PAGES - 1).max(1);
        }
    }

    let mut links = Vec::with_capacity(VISIBLE_PAGES + 4);
    if start > 1 {
        links.push(PageLink::Page(1));
    }
    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Page));
    if end + 1 < total {
        links.push(PageLink::Ellipsis);
    }
    if end < total {
        links.push(PageLink::Page(total));
    }
    links
}

// =============================================================================
// Listed resources
// =============================================================================

impl Listed for Item {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Category"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.category_label()]
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn detail_path(&self) -> Option<String> {
        Some(format!("/items/{}", self.id))
    }
}

impl Listed for Category {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn detail_path(&self) -> Option<String> {
        Some(format!("/categories/{}", self.id))
    }
}

impl Listed for Warehouse {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Location"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.location.clone()]
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn detail_path(&self) -> Option<String> {
        Some(format!("/warehouses/{}", self.id))
    }
}

impl Listed for Stock {
    fn columns() -> &'static [&'static str] {
        &["ID", "Item", "Warehouse", "Stock Level", "Date Added"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.item.name.clone(),
            self.warehouse.name.clone(),
            self.stock_level.to_string(),
            self.date_added.clone(),
        ]
    }

    fn search_text(&self) -> String {
        self.item.name.clone()
    }

    fn detail_path(&self) -> Option<String> {
        Some(format!("/items/{}", self.item_id))
    }
}

impl Listed for StockMovement {
    fn columns() -> &'static [&'static str] {
        &["ID", "Item", "Warehouse", "Type", "Quantity", "Price", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.item.name.clone(),
            self.warehouse.name.clone(),
            self.movement_type.as_str().to_owned(),
            self.quantity.to_string(),
            format!("{:.2}", self.price),
            self.movement_date.clone(),
        ]
    }

    fn search_text(&self) -> String {
        self.item.name.clone()
    }
}

impl Listed for UserProfile {
    fn columns() -> &'static [&'static str] {
        &["ID", "Username", "Name", "Email", "Role"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.display_name(),
            self.email.clone(),
            self.role.clone(),
        ]
    }

    fn search_text(&self) -> String {
        self.username.clone()
    }

    fn detail_path(&self) -> Option<String> {
        Some(format!("/users/{}", self.id))
    }
}
