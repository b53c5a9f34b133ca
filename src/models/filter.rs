use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: usize = 12;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    none,
    ascending,
    descending,
}

/// Directory filter owned by one client. Every filter change sends the
/// client back to the first page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub region: String,
    pub subregion: String,
    pub sort: SortOrder,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            region: String::new(),
            subregion: String::new(),
            sort: SortOrder::none,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.page = 1;
    }

    /// Region changes go through `CountryDirectory::select_region`, which
    /// also drops a subregion the new region does not contain.
    pub(crate) fn set_region(&mut self, region: &str) {
        self.region = region.to_string();
        self.page = 1;
    }

    pub fn set_subregion(&mut self, subregion: &str) {
        self.subregion = subregion.to_string();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub totalPages: usize,
    pub totalItems: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            totalPages: self.totalPages,
            totalItems: self.totalItems,
        }
    }
}
