//! Platform capabilities resolved once per widget instance

use serde::{Deserialize, Serialize};

/// Platform traits that alter interaction behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTraits {
    /// Touch-primary device (iOS): autoselect is disabled, and an open menu
    /// survives the input losing focus.
    pub is_touch_primary: bool,
    /// Pointer hover suppresses keyboard-focus styling on option rows
    pub supports_hover_styling: bool,
    /// The hint overlay can be drawn (requires click-through pointer events)
    pub supports_pointer_events: bool,
}

impl Default for PlatformTraits {
    fn default() -> Self {
        Self::desktop()
    }
}

impl PlatformTraits {
    /// Mouse and keyboard desktop browser
    pub fn desktop() -> Self {
        Self {
            is_touch_primary: false,
            supports_hover_styling: true,
            supports_pointer_events: true,
        }
    }

    /// Touch-primary mobile browser
    pub fn touch() -> Self {
        Self {
            is_touch_primary: true,
            supports_hover_styling: false,
            supports_pointer_events: true,
        }
    }

    /// Resolve traits from a browser user agent string.
    ///
    /// iPod, iPhone and iPad running WebKit are treated as touch-primary.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ios_device = ["iPod", "iPhone", "iPad"]
            .iter()
            .any(|d| user_agent.contains(d));
        if ios_device && user_agent.contains("AppleWebKit") {
            Self::touch()
        } else {
            Self::desktop()
        }
    }
}
