//! Terminal dashboards, one per role.

use async_trait::async_trait;
use dialoguer::Select;

use avdesk_core::error::AppError;
use avdesk_core::result::AppResult;
use avdesk_entity::view::ViewId;
use avdesk_shell::{View, ViewAction, ViewContext};

use super::input_error;

const MENU: [&str; 3] = ["Refresh", "Log out", "Quit"];

/// A role dashboard. Shows who is signed in and offers logout.
#[derive(Debug)]
pub struct DashboardView {
    id: ViewId,
}

impl DashboardView {
    pub fn new(id: ViewId) -> Self {
        Self { id }
    }

    fn title(&self) -> &'static str {
        match self.id {
            ViewId::AdminDashboard => "Administration",
            ViewId::AudiovisualDashboard => "Audiovisual loans",
            ViewId::ConsultantDashboard => "Consultation",
            ViewId::TeacherDashboard => "Teacher desk",
            ViewId::StudentDashboard => "Student desk",
            ViewId::Login => "Sign in",
        }
    }

    fn sections(&self) -> &'static [&'static str] {
        match self.id {
            ViewId::AdminDashboard => &["Users", "Resources", "Loans", "Schedules", "Reports"],
            ViewId::AudiovisualDashboard => &["Resources", "Loans", "Returns"],
            ViewId::ConsultantDashboard => &["Resources", "Loans (read-only)"],
            ViewId::TeacherDashboard => &["My schedule", "My loans"],
            ViewId::StudentDashboard => &["My schedule"],
            ViewId::Login => &[],
        }
    }
}

#[async_trait]
impl View for DashboardView {
    fn id(&self) -> ViewId {
        self.id
    }

    async fn render(&mut self, ctx: ViewContext<'_>) -> AppResult<ViewAction> {
        let ViewContext::Dashboard { display_name, role } = ctx else {
            return Err(AppError::internal("Dashboard rendered without a session"));
        };

        println!();
        println!("══ {} ══", self.title());
        println!("Signed in as {} ({})", display_name, role.label());
        for section in self.sections() {
            println!("  • {section}");
        }

        let choice = Select::new()
            .with_prompt("Action")
            .items(&MENU)
            .default(0)
            .interact()
            .map_err(input_error)?;

        Ok(match choice {
            1 => ViewAction::Logout,
            2 => ViewAction::Quit,
            _ => ViewAction::Stay,
        })
    }
}
