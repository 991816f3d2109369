use glint_core::{
    animation::{AnimatedValue, AnimationSpec},
    remember_state_with_key,
};

/// Animate f32 to the given target; returns the current value each frame.
///
/// The first call for a key starts at `initial`, so a value can animate in
/// from its resting state on the frame it first appears.
pub fn animate_f32(key: impl Into<String>, initial: f32, target: f32, spec: AnimationSpec) -> f32 {
    let key = key.into();
    let anim = remember_state_with_key(format!("anim:f32:{key}"), || {
        AnimatedValue::new(initial, spec)
    });
    let mut a = anim.borrow_mut();
    a.set_spec(spec);
    if *a.target() != target {
        a.set_target(target);
    }
    a.update();
    *a.get()
}

