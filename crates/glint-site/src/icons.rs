use glint_core::*;
use glint_ui::Icon;

/// The glyph vocabulary the page draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Glyph {
    Rocket,
    AccountGroup,
    ChartLine,
    #[default]
    CheckCircle,
    LightbulbOn,
    HumanGreeting,
    HandHeart,
    Home,
    Idea,
}

impl Glyph {
    /// Icon-set name handed to the renderer.
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Rocket => "mdi:rocket-launch-outline",
            Glyph::AccountGroup => "mdi:account-group-outline",
            Glyph::ChartLine => "mdi:chart-line",
            Glyph::CheckCircle => "mdi:check-circle-outline",
            Glyph::LightbulbOn => "mdi:lightbulb-on",
            Glyph::HumanGreeting => "mdi:human-greeting",
            Glyph::HandHeart => "mdi:hand-heart",
            Glyph::Home => "mdi-light:home",
            Glyph::Idea => "mdi:idea",
        }
    }
}

/// Icon for a service card, keyed by its catchphrase.
pub fn service_icon(catchphrase: &str) -> Glyph {
    match catchphrase {
        "Build & Integrate" => Glyph::Rocket,
        "Collaborate & Share" => Glyph::AccountGroup,
        "Optimize & Scale" => Glyph::ChartLine,
        _ => Glyph::default(),
    }
}

pub fn GlyphIcon(glyph: Glyph, size: f32, color: Color) -> View {
    Icon(glyph.name(), size, color)
}
