#![allow(non_snake_case)]
//! The glint studio landing page.
//!
//! Three sections stacked in one scrolling column, each revealing its
//! content as it scrolls into view:
//!
//! - [`sections::HeroBanner`]: the banner fades in once seen, then its
//!   tagline and call-to-action links fly up one after another.
//! - [`sections::CompanyOverview`]: header, then the about text a moment
//!   later, then the core values grid when it is reached.
//! - [`sections::ServiceShowcase`]: the service cards are laid out from the
//!   start; their icons and the closing call to action appear on a stagger.
//!
//! ```rust
//! use glint_platform::HeadlessHost;
//! use glint_site::{LandingPage, config::SiteConfig};
//!
//! let cfg = SiteConfig::default();
//! let mut host = HeadlessHost::new(cfg.viewport, move |_| LandingPage(&cfg));
//! let frame = host.frame();
//! assert!(frame.has_tag("hero"));
//! assert!(frame.content_size.height > 800.0);
//! ```

pub mod config;
pub mod content;
pub mod icons;
pub mod page;
pub mod sections;

pub use config::{ConfigError, RevealTimings, SiteConfig, Thresholds};
pub use icons::{Glyph, service_icon};
pub use page::{DESCRIPTION, LandingPage, TITLE};
