pub mod frame;
pub mod text_plots;

pub use frame::{draw_bounce, draw_world, CLEAR_SCREEN};
pub use text_plots::plot_series;
