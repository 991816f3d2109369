#![allow(non_snake_case)]
//! Widgets, layout, enter transitions and scroll-triggered reveals.

pub mod anim;
pub mod anim_ext;
pub mod error;
pub mod layout;
pub mod reveal;
pub mod text;
pub mod viewport;

use glint_core::*;

pub use anim::animate_f32;
pub use anim_ext::{EnterTransition, HoverLift, Reveal};
pub use error::{LayoutError, ObserveError};
pub use layout::{layout_and_paint, try_layout_and_paint};
pub use reveal::{Latch, RevealFlags, Stagger, use_delayed, use_reveal};
pub use viewport::{
    LayoutObserver, ManualObserver, SharedObserver, UnsupportedObserver, VisibilityObserver,
    use_in_view, with_observer,
};

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: Color::WHITE,
            font_size: 16.0, // dp (converted to px in layout/paint)
            soft_wrap: false,
            max_lines: None,
        },
    )
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

pub fn Grid(
    columns: usize,
    modifier: Modifier,
    children: Vec<View>,
    row_gap: f32,
    column_gap: f32,
) -> View {
    Column(modifier.grid(columns, row_gap, column_gap)).with_children(children)
}

/// A named glyph; decorative, so it stays out of the semantics tree.
pub fn Icon(name: &'static str, size: f32, color: Color) -> View {
    View::new(0, ViewKind::Icon { name, color, size })
        .modifier(Modifier::new().semantics(Semantics::hidden()))
}

/// Navigates to `href` when activated. Children form the visible content;
/// attach `Semantics::new(Role::Link).label(..)` to override the announced
/// name.
pub fn Link(href: impl Into<String>, modifier: Modifier) -> View {
    View::new(0, ViewKind::Link { href: href.into() }).modifier(modifier)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp: f32) -> View;
    fn max_lines(self, n: usize) -> View;
    fn wrap(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text {
            font_size: text_size_dp,
            ..
        } = &mut self.kind
        {
            *text_size_dp = dp_font;
        }
        self
    }
    fn max_lines(mut self, n: usize) -> View {
        if let ViewKind::Text {
            max_lines,
            soft_wrap,
            ..
        } = &mut self.kind
        {
            *max_lines = Some(n);
            *soft_wrap = true;
        }
        self
    }
    fn wrap(mut self) -> View {
        if let ViewKind::Text { soft_wrap, .. } = &mut self.kind {
            *soft_wrap = true;
        }
        self
    }
}
