pub mod news;

pub use news::{api_news, fetch_news};
