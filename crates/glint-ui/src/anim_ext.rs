use glint_core::*;
use web_time::Duration;

use crate::anim::animate_f32;

/// How content moves in when it is revealed. Distances are in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnterTransition {
    FadeIn,
    /// Fade in while rising from `dy` below the resting position.
    FadeInUp(f32),
    /// Fade in while sliding from `dx` left of the resting position.
    FadeInLeft(f32),
    /// Slide from `dx` left without fading (accent bars).
    SlideInLeft(f32),
}

/// Animate `content` from hidden to its resting state once `visible` turns
/// true.
///
/// The content stays in the tree while hidden (alpha 0), so it keeps its
/// layout slot and its text. Under `MotionPreference::Reduced` every
/// transition becomes a short opacity-only fade.
pub fn Reveal(
    key: impl Into<String>,
    visible: bool,
    enter: EnterTransition,
    spec: AnimationSpec,
    mut content: View,
) -> View {
    let key = key.into();
    let reduced = motion() == MotionPreference::Reduced;
    let spec = if reduced { AnimationSpec::reduced() } else { spec };

    let target = if visible { 1.0 } else { 0.0 };
    let p = animate_f32(format!("reveal:{key}"), 0.0, target, spec);

    let (alpha, dx, dy) = match (reduced, enter) {
        (true, _) => (p, 0.0, 0.0),
        (false, EnterTransition::FadeIn) => (p, 0.0, 0.0),
        (false, EnterTransition::FadeInUp(d)) => (p, 0.0, d * (1.0 - p)),
        (false, EnterTransition::FadeInLeft(d)) => (p, -d * (1.0 - p), 0.0),
        (false, EnterTransition::SlideInLeft(d)) => (1.0, -d * (1.0 - p), 0.0),
    };

    let m = std::mem::take(&mut content.modifier);
    let base = m.alpha.unwrap_or(1.0);
    let m = m.alpha(base * alpha);
    content.modifier = if dx != 0.0 || dy != 0.0 {
        m.translate(dx, dy)
    } else {
        m
    };
    content
}

/// Lift `content` by `lift` dp while the pointer hovers the view tagged
/// `tag`; disabled under reduced motion.
pub fn HoverLift(tag: &str, lift: f32, mut content: View) -> View {
    let lifted = is_hovered(tag) && motion() == MotionPreference::Full;
    let spec = AnimationSpec::tween(Duration::from_millis(500), Easing::EaseInOut);
    let dy = animate_f32(
        format!("hover:{tag}"),
        0.0,
        if lifted { -lift } else { 0.0 },
        spec,
    );
    if dy != 0.0 {
        content.modifier = std::mem::take(&mut content.modifier).translate(0.0, dy);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use std::rc::Rc;
    use web_time::Instant;

    fn setup() -> ManualClock {
        clear_slots();
        let clock = ManualClock::new(Instant::now());
        animation::set_clock(Rc::new(clock.clone()));
        clock
    }

    fn alpha_and_dy(v: &View) -> (f32, f32) {
        (
            v.modifier.alpha.unwrap_or(1.0),
            v.modifier.transform.map(|t| t.translate_y).unwrap_or(0.0),
        )
    }

    #[test]
    fn hidden_content_is_transparent_and_offset() {
        let _clock = setup();
        let v = Reveal(
            "card",
            false,
            EnterTransition::FadeInUp(40.0),
            AnimationSpec::reveal(),
            Text("Creativity First"),
        );
        assert_eq!(alpha_and_dy(&v), (0.0, 40.0));
        assert_eq!(v.collect_text(), vec!["Creativity First"]);
    }

    #[test]
    fn reveal_scales_existing_alpha() {
        let clock = setup();
        let spec = AnimationSpec::tween(Duration::from_millis(100), Easing::Linear);
        let divider = || Box(Modifier::new().alpha(0.7));
        Reveal("divider", true, EnterTransition::FadeIn, spec, divider());
        clock.advance(Duration::from_millis(50));
        let half = Reveal("divider", true, EnterTransition::FadeIn, spec, divider());
        assert!((half.modifier.alpha.unwrap_or(1.0) - 0.35).abs() < 0.01);

        clock.advance(Duration::from_millis(50));
        let full = Reveal("divider", true, EnterTransition::FadeIn, spec, divider());
        assert!((full.modifier.alpha.unwrap_or(1.0) - 0.7).abs() < 0.01);
        animation::reset_clock();
    }

    #[test]
    fn fade_in_up_reaches_rest_after_duration() {
        let clock = setup();
        let spec = AnimationSpec::tween(Duration::from_millis(700), Easing::Linear);
        Reveal("card", false, EnterTransition::FadeInUp(40.0), spec, Text("x"));

        // Becomes visible; animation starts now.
        Reveal("card", true, EnterTransition::FadeInUp(40.0), spec, Text("x"));
        clock.advance(Duration::from_millis(350));
        let (a, dy) = alpha_and_dy(&Reveal(
            "card",
            true,
            EnterTransition::FadeInUp(40.0),
            spec,
            Text("x"),
        ));
        assert!((a - 0.5).abs() < 0.01);
        assert!((dy - 20.0).abs() < 0.5);

        clock.advance(Duration::from_millis(400));
        let v = Reveal("card", true, EnterTransition::FadeInUp(40.0), spec, Text("x"));
        assert_eq!(alpha_and_dy(&v), (1.0, 0.0));
        animation::reset_clock();
    }

    #[test]
    fn reduced_motion_fades_without_offset() {
        let clock = setup();
        with_motion(MotionPreference::Reduced, || {
            let v = Reveal(
                "bar",
                false,
                EnterTransition::SlideInLeft(96.0),
                AnimationSpec::reveal(),
                Box(Modifier::new()),
            );
            assert_eq!(v.modifier.alpha, Some(0.0));
            assert!(v.modifier.transform.is_none());

            Reveal(
                "bar",
                true,
                EnterTransition::SlideInLeft(96.0),
                AnimationSpec::reveal(),
                Box(Modifier::new()),
            );
            clock.advance(Duration::from_millis(100));
            let v = Reveal(
                "bar",
                true,
                EnterTransition::SlideInLeft(96.0),
                AnimationSpec::reveal(),
                Box(Modifier::new()),
            );
            assert_eq!(v.modifier.alpha, Some(1.0));
        });
        animation::reset_clock();
    }

    #[test]
    fn hover_lift_follows_interactions() {
        let clock = setup();
        let hovered = Interactions {
            hover: Some("value.0".into()),
        };
        with_interactions(hovered.clone(), || HoverLift("value.0", 8.0, Box(Modifier::new())));
        clock.advance(Duration::from_millis(600));
        let v = with_interactions(hovered, || HoverLift("value.0", 8.0, Box(Modifier::new())));
        assert_eq!(v.modifier.transform.map(|t| t.translate_y), Some(-8.0));

        // Other cards stay put.
        let other = HoverLift("value.1", 8.0, Box(Modifier::new()));
        assert!(other.modifier.transform.is_none());
        animation::reset_clock();
    }
}
