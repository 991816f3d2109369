//! Copy shown on the landing page.

use glint_navigation::Destination;

use crate::icons::Glyph;

pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Glyph,
}

pub struct Service {
    pub catchphrase: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
}

/// A call-to-action link. `label` is what is shown, `aria_label` what is
/// announced.
pub struct CtaLink {
    pub tag: &'static str,
    pub label: &'static str,
    pub aria_label: &'static str,
    pub destination: Destination,
}

pub mod hero {
    use super::*;

    pub const TITLE: &str = "build a better web";
    pub const SUBTITLE: &str = "build a better future";
    pub const TAGLINE: &str =
        "We help people to create a more responsive, adaptive, and accessible web experience.";

    /// In display order.
    pub const LINKS: [CtaLink; 3] = [
        CtaLink {
            tag: "hero.about",
            label: "About Us",
            aria_label: "Learn more about our company",
            destination: Destination::About,
        },
        CtaLink {
            tag: "hero.services",
            label: "Our Services",
            aria_label: "Explore our services",
            destination: Destination::Services,
        },
        CtaLink {
            tag: "hero.team",
            label: "Our Team",
            aria_label: "Meet our team",
            destination: Destination::Team,
        },
    ];
}

pub mod company {
    use super::*;

    pub const HEADING: &str = "not your typical";
    pub const HEADING_ACCENT: &str = "design studio";
    pub const ABOUT: &str = "Founded in 2018, we've grown from a tiny apartment to an \
        award-winning team of 30+ creatives. We believe digital experiences should feel \
        as intuitive as a conversation with a friend, where creativity meets functionality \
        to create spaces that feel alive, responsive, and distinctly human.";
    pub const VALUES_HEADING: &str = "Our Core Values";

    pub const VALUES: [CoreValue; 3] = [
        CoreValue {
            title: "Creativity First",
            description: "We embrace unconventional thinking and the most interesting solutions.",
            icon: Glyph::LightbulbOn,
        },
        CoreValue {
            title: "Human-Centered",
            description:
                "We design for humans first, algorithms second, prioritizing real experiences.",
            icon: Glyph::HumanGreeting,
        },
        CoreValue {
            title: "Purposeful Fun",
            description:
                "Good design should delight with moments of joy that turn users into fans.",
            icon: Glyph::HandHeart,
        },
    ];

    pub const LEARN_MORE: CtaLink = CtaLink {
        tag: "company.learn_more",
        label: "Learn More About Us!",
        aria_label: "Learn More About Us!",
        destination: Destination::Team,
    };
}

pub mod services {
    use super::*;

    pub const HEADING: &str = "design-driven solutions for the";
    pub const HEADING_ACCENT: &str = "digital future";
    pub const INTRO: &str = "Combine creative design thinking with technical expertise to \
        build faster, more intuitive applications that delight your users and grow with \
        your business.";
    pub const GRID_LABEL: &str = "Our services";

    pub const SERVICES: [Service; 3] = [
        Service {
            catchphrase: "Build & Integrate",
            heading: "Make faster app",
            description: "Accelerate your development cycle with our specialized UI/UX design \
                expertise. We build intuitive interfaces and seamlessly integrate them into \
                your existing systems for rapid deployment.",
        },
        Service {
            catchphrase: "Collaborate & Share",
            heading: "Iterate together",
            description: "Experience a truly collaborative design process. We work closely \
                with your team, sharing insights and iterating on feedback to ensure your \
                vision comes to life exactly as you imagined.",
        },
        Service {
            catchphrase: "Optimize & Scale",
            heading: "Grow efficiently",
            description: "Future-proof your digital presence with scalable design solutions. \
                We optimize your app architecture and user flows to handle growing user bases \
                and evolving business needs without compromising performance.",
        },
    ];

    pub const EXPLORE: CtaLink = CtaLink {
        tag: "services.explore",
        label: "Explore Our Services",
        aria_label: "Explore all our services",
        destination: Destination::Services,
    };
}
