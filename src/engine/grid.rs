//! Packs shortcut boxes into rows and rows into pages that fit the viewport.
//!
//! The packer is greedy and order-preserving: groups are never reordered and a
//! group is never split, so pages are contiguous runs of the input.

use std::ops::Range;

use crate::engine::display_group::DisplayGroup;

/// Outer border, one cell per side.
pub const OUTER_BORDER: u16 = 1;
/// Horizontal padding inside the outer border, one cell per side.
pub const OUTER_PADDING: u16 = 1;
pub const HEADER_ROWS: u16 = 2;
pub const TAB_BAR_ROWS: u16 = 2;
pub const SEARCH_BAR_ROWS: u16 = 2;
pub const FOOTER_ROWS: u16 = 3;

pub const HORIZONTAL_CHROME: u16 = 2 * (OUTER_BORDER + OUTER_PADDING);
pub const VERTICAL_CHROME: u16 =
    2 * OUTER_BORDER + HEADER_ROWS + TAB_BAR_ROWS + SEARCH_BAR_ROWS + FOOTER_ROWS;

const TARGET_BOX_WIDTH: usize = 45;
const MAX_BOX_WIDTH: usize = 50;
/// Blank cells between neighbouring boxes, both across and down.
pub const BOX_GAP: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub box_width: usize,
    pub boxes_per_row: usize,
    pub available_height: usize,
    /// Index ranges into the laid-out groups. Never empty; the first page of an
    /// empty input is `0..0`.
    pub pages: Vec<Range<usize>>,
}

impl GridLayout {
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.pages.len().saturating_sub(1))
    }

    /// Groups on `page`, or an empty slice when the page does not exist.
    pub fn page<'a>(&self, groups: &'a [DisplayGroup], page: usize) -> &'a [DisplayGroup] {
        self.pages
            .get(page)
            .and_then(|range| groups.get(range.clone()))
            .unwrap_or(&[])
    }

    /// Rows of a page. A row only closes once full and a page break always opens
    /// a new row, so rows are fixed-size chunks of the page.
    pub fn rows<'a>(
        &self,
        page_groups: &'a [DisplayGroup],
    ) -> std::slice::Chunks<'a, DisplayGroup> {
        page_groups.chunks(self.boxes_per_row)
    }

    /// Rendered height of a page: tallest box of each row plus the gaps between rows.
    #[cfg(test)]
    fn page_height(&self, page_groups: &[DisplayGroup]) -> usize {
        let rows: Vec<usize> = self
            .rows(page_groups)
            .map(|row| row.iter().map(DisplayGroup::box_height).max().unwrap_or(0))
            .collect();
        rows.iter().sum::<usize>() + rows.len().saturating_sub(1) * BOX_GAP
    }
}

/// Box width and boxes per row for a viewport `width` cells wide.
pub fn box_metrics(width: u16) -> (usize, usize) {
    let available = usize::from(width.saturating_sub(HORIZONTAL_CHROME));
    let columns = (available / TARGET_BOX_WIDTH).max(1);
    let box_width = (available / columns)
        .saturating_sub(BOX_GAP)
        .clamp(1, MAX_BOX_WIDTH);
    let boxes_per_row = (available / (box_width + BOX_GAP)).max(1);
    (box_width, boxes_per_row)
}

pub fn available_height(height: u16) -> usize {
    usize::from(height.saturating_sub(VERTICAL_CHROME))
}

/// Lay out `groups` for a `width` x `height` viewport.
pub fn layout(groups: &[DisplayGroup], width: u16, height: u16) -> GridLayout {
    let (box_width, boxes_per_row) = box_metrics(width);
    let available_height = available_height(height);
    let pages = paginate(groups, boxes_per_row, available_height);
    GridLayout {
        box_width,
        boxes_per_row,
        available_height,
        pages,
    }
}

/// First-fit greedy packing of groups into pages of at most `available_height` rows.
///
/// A group taller than the whole viewport still gets a page of its own.
pub fn paginate(
    groups: &[DisplayGroup],
    boxes_per_row: usize,
    available_height: usize,
) -> Vec<Range<usize>> {
    let boxes_per_row = boxes_per_row.max(1);
    let mut pages = Vec::new();
    let mut page_start = 0;
    // Height of the closed rows on this page, gaps included.
    let mut closed_rows_height = 0;
    let mut row_len = 0;
    let mut row_height = 0;

    for (i, group) in groups.iter().enumerate() {
        let height = group.box_height();

        if row_len == boxes_per_row {
            closed_rows_height += row_height + BOX_GAP;
            row_len = 0;
            row_height = 0;
        }

        let projected = closed_rows_height + row_height.max(height);
        if projected > available_height && i > page_start {
            pages.push(page_start..i);
            page_start = i;
            closed_rows_height = 0;
            row_len = 0;
            row_height = 0;
        }

        row_len += 1;
        row_height = row_height.max(height);
    }

    if page_start < groups.len() || pages.is_empty() {
        pages.push(page_start..groups.len());
    }
    pages
}
