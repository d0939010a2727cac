//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::app::{App, ScreenState};

/// Main render function - delegates to appropriate screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.screen()), area);

    match &app.state.screen {
        ScreenState::Home(home) => screens::home::draw(frame, area, app, home),
        ScreenState::Lock(lock) => screens::lock::draw(frame, area, app, lock),
        ScreenState::Dashboard(dashboard) => {
            screens::dashboard::draw(frame, area, app, dashboard)
        }
        ScreenState::ControlCenter(center) => {
            screens::control_center::draw(frame, area, app, center)
        }
        ScreenState::Navigation(nav) => screens::navigation::draw(frame, area, app, nav),
        ScreenState::ModelViewer(model) => screens::model_viewer::draw(frame, area, app, model),
    }

    app.notifications.render(frame, area, &app.theme);
}

/// Header title for the current screen, e.g. "Infotainment › Navigation"
pub fn breadcrumb(app: &App) -> String {
    app.state.navigator.breadcrumb().join(" › ")
}
