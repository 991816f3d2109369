//! # State, Scopes, Timers
//!
//! Glint renders a page by recomposing a `View` tree every frame. The tree is
//! cheap and throw-away; anything that has to survive between frames lives in
//! remembered slots, and anything that has to be released when the page goes
//! away is registered on a `Scope`.
//!
//! - `Signal<T>`: observable value with subscribers.
//! - `remember_with_key`: keyed storage bound to the current mount.
//! - `effect` / `on_unmount`: side-effects whose cleanup runs when the mount
//!   scope is disposed.
//! - `set_timeout` / `TimerGroup`: cancellable timers on the animation clock.
//!
//! ## Signals
//!
//! ```rust
//! use glint_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.set(count.get() + 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! Slots are keyed, so conditional composition (a block that only appears
//! after it scrolled into view) never shifts another block's state:
//!
//! ```rust
//! use glint_core::*;
//!
//! let hovered = remember_state_with_key("card:hover", || false);
//! *hovered.borrow_mut() = true;
//! assert!(*remember_state_with_key("card:hover", || false).borrow());
//! ```
//!
//! ## Effects and cleanup
//!
//! ```rust
//! use glint_core::*;
//!
//! let scope = Scope::new();
//! scope.run(|| {
//!     effect(|| {
//!         log::info!("mounted");
//!         on_unmount(|| log::info!("unmounted"))
//!     });
//! });
//! scope.dispose();
//! ```
//!
//! Timers scheduled through a `TimerGroup` are cancelled the same way, so a
//! section that disappears before its delayed reveals fire leaves nothing
//! behind in the queue.

pub mod animation;
pub mod color;
pub mod effects;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod timer;
pub mod view;


pub use color::*;
pub use effects::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use timer::*;
pub use view::*;
