//! Pure derivations over the problem list: criteria filtering, page slicing
//! and the page-control bar.

use serde::{Deserialize, Serialize};
use shared::domain::{Problem, SearchField};

pub const PAGE_SIZE: usize = 8;
/// Pages always shown at each end of the page-control bar.
pub const MARGIN_PAGES: usize = 2;
/// Width of the page window kept around the selected page.
pub const PAGE_RANGE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: String,
    pub topic: String,
    pub level: String,
    pub platform: String,
}

impl FilterCriteria {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Topic => &self.topic,
            SearchField::Level => &self.level,
            SearchField::Platform => &self.platform,
        }
    }

    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        let slot = match field {
            SearchField::Name => &mut self.name,
            SearchField::Topic => &mut self.topic,
            SearchField::Level => &mut self.level,
            SearchField::Platform => &mut self.platform,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        SearchField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn matches(&self, problem: &Problem) -> bool {
        SearchField::ALL.iter().all(|field| {
            let needle = self.get(*field);
            needle.is_empty()
                || problem
                    .searchable(*field)
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
        })
    }
}

pub fn filter_problems(problems: &[Problem], criteria: &FilterCriteria) -> Vec<Problem> {
    problems
        .iter()
        .filter(|problem| criteria.matches(problem))
        .cloned()
        .collect()
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Items on `page`. Pages past the end are empty rather than an error.
pub fn page_slice(problems: &[Problem], page: usize) -> &[Problem] {
    let start = page.saturating_mul(PAGE_SIZE);
    if start >= problems.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(problems.len());
    &problems[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: Option<usize> },
    Page { index: usize, selected: bool },
    Break,
    Next { target: Option<usize> },
}

/// Builds the page-control bar: first/last `MARGIN_PAGES` pages, a
/// `PAGE_RANGE` window around `selected`, and a single break marker for
/// each elided run. Previous/next carry `None` when there is nowhere to go.
pub fn page_controls(page_count: usize, selected: usize) -> Vec<PageControl> {
    let previous = selected
        .checked_sub(1)
        .filter(|target| *target < page_count);
    let next = selected
        .checked_add(1)
        .filter(|target| *target < page_count);

    let mut controls = vec![PageControl::Previous { target: previous }];
    for index in visible_page_indices(page_count, selected) {
        match index {
            Some(index) => controls.push(PageControl::Page {
                index,
                selected: index == selected,
            }),
            None => controls.push(PageControl::Break),
        }
    }
    controls.push(PageControl::Next { target: next });
    controls
}

fn visible_page_indices(page_count: usize, selected: usize) -> Vec<Option<usize>> {
    if page_count <= PAGE_RANGE {
        return (0..page_count).map(Some).collect();
    }

    // Window sides are tracked in half-page units: an odd range splits
    // 2.5 / 2.5 around the selection. i128 holds twice any usize, so a
    // selection far past the end cannot overflow.
    let count = page_count as i128;
    let range = PAGE_RANGE as i128;
    let margin = MARGIN_PAGES as i128;
    let selected = selected as i128;

    let mut left = range;
    let mut right = range;
    if 2 * selected > 2 * count - range {
        right = 2 * (count - selected);
        left = 2 * range - right;
    } else if 2 * selected < range {
        left = 2 * selected;
        right = 2 * range - left;
    }
    if selected == 0 && range > 1 {
        right -= 2;
    }

    let mut out: Vec<Option<usize>> = Vec::new();
    for index in 0..count {
        let page = index + 1;
        let in_margin = page <= margin || page > count - margin;
        let in_window = 2 * index >= 2 * selected - left && 2 * index <= 2 * selected + right;
        if in_margin || in_window {
            out.push(Some(index as usize));
        } else if matches!(out.last(), Some(Some(_))) {
            out.push(None);
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
