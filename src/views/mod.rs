//! Terminal renditions of the login screen and role dashboards.

mod dashboard;
mod login;

use avdesk_core::error::AppError;
use avdesk_entity::view::ViewId;
use avdesk_shell::ViewRegistry;

pub use dashboard::DashboardView;
pub use login::LoginView;

/// A registry with the login view and one dashboard per role.
pub fn terminal_registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register(LoginView::new());
    for id in ViewId::ALL.into_iter().filter(ViewId::is_dashboard) {
        registry.register(DashboardView::new(id));
    }
    registry
}

/// Neutral screen shown while startup is in progress.
pub fn show_loading() {
    println!("Initializing system...");
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::input(format!("Input error: {}", e))
}
