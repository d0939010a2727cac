//! One module per screen

pub mod control_center;
pub mod dashboard;
pub mod home;
pub mod lock;
pub mod model_viewer;
pub mod navigation;
