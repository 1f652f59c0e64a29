//! GUI module - User interface components

mod app;
mod category_view;
mod trend_view;

pub use app::CategraphApp;
pub use category_view::CategoryView;
pub use trend_view::TrendView;
