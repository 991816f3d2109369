use glint_core::*;
use glint_ui::*;

use crate::config::SiteConfig;
use crate::sections::{CompanyOverview, HeroBanner, ServiceShowcase};

pub const TITLE: &str = "Home | glint studio";
pub const DESCRIPTION: &str = "Welcome to glint studio";

/// Hero, company overview and services, top to bottom.
pub fn LandingPage(cfg: &SiteConfig) -> View {
    Column(
        Modifier::new()
            .fill_max_width()
            .background(theme().background)
            .semantics(Semantics::new(Role::Region).label(TITLE)),
    )
    .child((
        HeroBanner(cfg),
        CompanyOverview(cfg),
        ServiceShowcase(cfg),
    ))
}
