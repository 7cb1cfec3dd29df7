use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page (1 to 100)
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_page_size(),
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.size < 1 || self.size > MAX_PAGE_SIZE {
            return Err(format!("size must be between 1 and {}", MAX_PAGE_SIZE));
        }
        Ok(())
    }

    /// Rows to skip. Widened to `i64` so any `u32` page stays in range.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.max(1)) - 1) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (size as f64)).ceil() as u32;
        Self {
            page,
            size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, size, total_items),
        }
    }

    /// Wrap one page worth of records, converting each into its response type.
    pub fn from_records<R>(records: Vec<R>, params: &PaginationParams, total_items: i64) -> Self
    where
        T: From<R>,
    {
        Self::new(
            records.into_iter().map(T::from).collect(),
            params.page,
            params.size,
            total_items,
        )
    }
}
