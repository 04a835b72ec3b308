//! SVG figure generation for coalescence analysis output.

pub mod error;
pub mod event_plots;
pub mod phi_plots;
pub mod scan_plots;
pub mod style;

pub use error::{RenderError, Result};
pub use event_plots::{render_distributions, render_projections, render_ratio_bars};
pub use phi_plots::{PhiPanels, PhiSeries, render_overlay, render_phi_panels};
pub use scan_plots::render_scan;
