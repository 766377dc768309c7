//! surfarea trend display
//!
//! [`TrendChart`] turns a [`TimeSeries`](surfarea_algorithms::series::TimeSeries)
//! into sorted km² points; [`show_trend`] draws it in a native window.

mod app;
mod trend;

pub use app::show_trend;
pub use trend::TrendChart;
