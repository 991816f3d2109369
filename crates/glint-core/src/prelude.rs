pub use crate::animation::{AnimatedValue, AnimationSpec, Clock, Easing, ManualClock, now};
pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::locals::{
    Density, Dp, Interactions, MotionPreference, Theme, Viewport, density, dp_to_px, is_hovered,
    local, motion, provide_local, theme, viewport, with_interactions, with_motion,
    with_theme, with_viewport,
};
pub use crate::modifier::Modifier;
pub use crate::runtime::{
    Frame, HitRegion, Scheduler, SemNode, TaggedRect, remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{TimerGroup, TimerHandle, set_timeout};
pub use crate::view::{Scene, SceneNode, View, ViewId, ViewKind};
pub use taffy::{AlignItems, FlexWrap, JustifyContent};
