//! Screen hosting for the watch UI
//!
//! The renderer proper lives on the display pipeline; until that lands,
//! `LogScreenHost` satisfies the navigation seam by logging each
//! transition and holding a handle for the visible screen.

use defmt::*;

use armilla_core::nav::ScreenId;
use armilla_core::traits::ScreenHost;

/// Handle for the currently presented screen.
///
/// Dropped by the navigation controller when another screen replaces it.
pub struct ActiveScreen {
    screen: ScreenId,
}

impl ActiveScreen {
    pub fn screen(&self) -> ScreenId {
        self.screen
    }
}

impl Drop for ActiveScreen {
    fn drop(&mut self) {
        trace!("Retiring screen {:?}", self.screen);
    }
}

/// Logging screen host.
pub struct LogScreenHost;

impl ScreenHost for LogScreenHost {
    type Handle = ActiveScreen;

    fn show(&mut self, screen: ScreenId) -> ActiveScreen {
        info!("Presenting screen {:?}", screen);
        ActiveScreen { screen }
    }
}
