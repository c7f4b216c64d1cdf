//! Screen host trait
//!
//! The screen host is the external UI layer that builds and tears down
//! presented content (watch faces, the app grid, stats pages). This core
//! only ever tells it *which* screen to show.

use crate::nav::ScreenId;

/// Trait for the UI layer that constructs presented screens.
///
/// `show` builds the content for a screen and returns a handle that owns
/// it. The caller keeps exactly one handle - the screen currently
/// presented - and dropping a handle releases that screen's resources, so
/// stale references across transitions cannot exist.
pub trait ScreenHost {
    /// Handle owning one constructed screen
    type Handle;

    /// Build and present the given screen
    fn show(&mut self, screen: ScreenId) -> Self::Handle;
}
