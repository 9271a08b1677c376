mod client;
mod error;
mod page;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use page::{Page, PageQuery, SortDirection};
