pub mod client;
pub mod console;
pub mod error;
pub mod result;
pub mod server;
pub mod view;

pub use client::{execute_query, HttpQuerySource, QuerySource, StaticQuerySource};
pub use console::Console;
pub use error::{Result, SqlPaneError};
pub use result::{ApiResponse, QueryResult};
pub use server::{router, run, serve};
pub use view::{
    escape, render_page, Banner, Controls, Pagination, TablePage, TableView, DEFAULT_PAGE_SIZE,
    PAGE_SIZES,
};
