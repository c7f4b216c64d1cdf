//! Screen navigation
//!
//! Maps swipe gestures onto a 3-element category ring (horizontal) plus a
//! two-page grid dimension (vertical, AppGrid only) and issues show-screen
//! commands to the screen host. Anything that doesn't apply - wrong
//! gesture for the current category, cooldown still running, transition in
//! flight - is a silent no-op, never an error.

use crate::gesture::GestureEvent;
use crate::time::elapsed_ms;
use crate::traits::ScreenHost;

/// Minimum time between two accepted transitions (ms)
pub const NAV_COOLDOWN_MS: u32 = 300;

/// Position on the category ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    #[default]
    Home,
    AppGrid,
    CharacterStats,
}

impl Category {
    /// Ring size
    pub const COUNT: u8 = 3;

    fn index(self) -> u8 {
        match self {
            Category::Home => 0,
            Category::AppGrid => 1,
            Category::CharacterStats => 2,
        }
    }

    fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => Category::Home,
            1 => Category::AppGrid,
            _ => Category::CharacterStats,
        }
    }

    /// Next category on the ring
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    /// Previous category on the ring
    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
    }
}

/// Identifier of a presentable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    /// Watch face
    Home,
    /// App launcher grid, paged
    AppGrid { page: u8 },
    /// Character/stats view
    CharacterStats,
}

/// The screen a ring position maps to
pub fn screen_for(category: Category, grid_page: u8) -> ScreenId {
    match category {
        Category::Home => ScreenId::Home,
        Category::AppGrid => ScreenId::AppGrid { page: grid_page },
        Category::CharacterStats => ScreenId::CharacterStats,
    }
}

/// Navigation state. Mutated only by [`NavigationController`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState {
    /// Current category on the ring
    pub category: Category,
    /// Grid page, meaningful only while `category == AppGrid`
    pub grid_page: u8,
    /// A show-screen call is in flight
    pub transitioning: bool,
    /// Timestamp of the last accepted transition
    pub last_nav_ms: u32,
    /// Input is deferred while set
    pub locked: bool,
}

/// Navigation controller
///
/// Owns the screen host and the handle of the screen currently presented;
/// accepting a transition builds the next screen and drops the previous
/// handle, so stale screens cannot outlive their transition.
pub struct NavigationController<H: ScreenHost> {
    host: H,
    state: NavigationState,
    current: Option<H::Handle>,
}

impl<H: ScreenHost> NavigationController<H> {
    /// Create the controller and present the home screen
    pub fn new(mut host: H, now_ms: u32) -> Self {
        let current = host.show(ScreenId::Home);
        Self {
            host,
            state: NavigationState {
                category: Category::Home,
                grid_page: 0,
                transitioning: false,
                // Let the first gesture through immediately
                last_nav_ms: now_ms.wrapping_sub(NAV_COOLDOWN_MS),
                locked: false,
            },
            current: Some(current),
        }
    }

    /// Current navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Access to the screen host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Dispatch one gesture. Returns true if a transition was accepted.
    pub fn handle(&mut self, gesture: &GestureEvent, now_ms: u32) -> bool {
        if self.state.locked || elapsed_ms(now_ms, self.state.last_nav_ms) < NAV_COOLDOWN_MS {
            // Deferred, not an error: the gesture is simply dropped
            return false;
        }

        let (category, grid_page) = match gesture {
            GestureEvent::SwipeLeft { .. } => (self.state.category.next(), self.state.grid_page),
            GestureEvent::SwipeRight { .. } => (self.state.category.prev(), self.state.grid_page),
            GestureEvent::SwipeDown { .. }
                if self.state.category == Category::AppGrid && self.state.grid_page == 0 =>
            {
                (Category::AppGrid, 1)
            }
            GestureEvent::SwipeUp { .. }
                if self.state.category == Category::AppGrid && self.state.grid_page == 1 =>
            {
                (Category::AppGrid, 0)
            }
            _ => return false,
        };

        self.state.locked = true;
        self.state.transitioning = true;
        self.state.category = category;
        self.state.grid_page = grid_page;

        // Build the new screen first, then drop the old handle
        let handle = self.host.show(screen_for(category, grid_page));
        self.current = Some(handle);

        self.state.transitioning = false;
        self.state.locked = false;
        self.state.last_nav_ms = now_ms;
        true
    }

    /// Explicit application request to present a screen (e.g. the user
    /// tapped an app icon). Bypasses the ring but honors the cooldown.
    pub fn present(&mut self, screen: ScreenId, now_ms: u32) -> bool {
        if self.state.locked || elapsed_ms(now_ms, self.state.last_nav_ms) < NAV_COOLDOWN_MS {
            return false;
        }

        self.state.locked = true;
        self.state.transitioning = true;
        let handle = self.host.show(screen);
        self.current = Some(handle);
        self.state.transitioning = false;
        self.state.locked = false;
        self.state.last_nav_ms = now_ms;
        true
    }
}
