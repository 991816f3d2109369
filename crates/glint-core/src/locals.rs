//! # Theming and locals
//!
//! Glint uses thread-local "composition locals" for parameters that every
//! composable may read but nobody wants to thread through arguments:
//!
//! - `Theme`: the palette.
//! - `Density`: dp→px scale factor.
//! - `Viewport`: size of the visible window (sections sized "one screen
//!   tall" read it).
//! - `MotionPreference`: full or reduced motion.
//! - `Interactions`: what the pointer currently hovers.
//!
//! Override any of them for a subtree with the matching `with_*` helper:
//!
//! ```rust
//! use glint_core::*;
//!
//! let reduced = with_motion(MotionPreference::Reduced, motion);
//! assert_eq!(reduced, MotionPreference::Reduced);
//! assert_eq!(motion(), MotionPreference::Full);
//! ```
//!
//! Arbitrary `Clone` values can be provided with `provide_local` and read back
//! with `local::<T>()`; that is how hosts hand the visibility observer to the
//! widgets that need it.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// density-independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

/// Convenience: convert a raw dp scalar into px using current Density.
pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}

/// Provide `value` to everything composed inside `f`.
pub fn provide_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided value of type `T`, if any.
pub fn local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>()))
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    })
}

// Typed API

/// Palette used by widgets and sections.
///
/// The names follow the site's design tokens: `primary_*` is the dark
/// blue-violet ramp the sections sit on, `secondary_*` the warm accent,
/// `tertiary_*` the border/outline tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub on_background: Color,
    pub primary_50: Color,
    pub primary_100: Color,
    pub primary_700: Color,
    pub primary_800: Color,
    pub primary_900: Color,
    pub secondary_500: Color,
    pub secondary_600: Color,
    pub secondary_700: Color,
    pub tertiary_500: Color,
    pub tertiary_600: Color,
    pub tertiary_900: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            on_background: Color::from_hex("#DDDDDD"),
            primary_50: Color::from_hex("#F4F3FF"),
            primary_100: Color::from_hex("#E6E4FB"),
            primary_700: Color::from_hex("#3B3486"),
            primary_800: Color::from_hex("#2C2766"),
            primary_900: Color::from_hex("#1D1A45"),
            secondary_500: Color::from_hex("#FF9F5A"),
            secondary_600: Color::from_hex("#F57E2E"),
            secondary_700: Color::from_hex("#CC6020"),
            tertiary_500: Color::from_hex("#8F86D9"),
            tertiary_600: Color::from_hex("#6F66C2"),
            tertiary_900: Color::from_hex("#2A2559"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Visible window size in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}
impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    /// Opacity-only, near-instant transitions; no lifts or slides.
    Reduced,
}

/// Pointer state the host feeds into composition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interactions {
    /// Tag of the hover target under the pointer.
    pub hover: Option<String>,
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    provide_local(theme, f)
}

pub fn with_viewport<R>(viewport: Viewport, f: impl FnOnce() -> R) -> R {
    provide_local(viewport, f)
}

pub fn with_motion<R>(pref: MotionPreference, f: impl FnOnce() -> R) -> R {
    provide_local(pref, f)
}

pub fn with_interactions<R>(interactions: Interactions, f: impl FnOnce() -> R) -> R {
    provide_local(interactions, f)
}

// Getters with defaults if not set

pub fn theme() -> Theme {
    local::<Theme>().unwrap_or_default()
}

pub fn density() -> Density {
    local::<Density>().unwrap_or_default()
}

pub fn viewport() -> Viewport {
    local::<Viewport>().unwrap_or_default()
}

pub fn motion() -> MotionPreference {
    local::<MotionPreference>().unwrap_or_default()
}

pub fn is_hovered(tag: &str) -> bool {
    local::<Interactions>()
        .and_then(|i| i.hover)
        .is_some_and(|h| h == tag)
}
