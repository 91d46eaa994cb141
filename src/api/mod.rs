mod axis_controller;
mod history_controller;
mod layout_controller;
mod presentation_controller;
mod range_controller;
mod surface;
mod surface_config;
mod surface_core;
mod surface_init;
mod trace_controller;

pub use range_controller::{
    AUTO_SCALE_LABEL, PAN_LABEL, SET_RANGE_LABEL, STAGGER_LABEL, ZOOM_LABEL,
};
pub use surface::ChartSurface;
pub use surface_config::SurfaceConfig;
pub use surface_init::{DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID};
pub use trace_controller::TraceAxisReport;
