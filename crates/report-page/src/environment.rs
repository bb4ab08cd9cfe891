//! What the page knows about the device it runs on.

use regex::Regex;
use std::sync::OnceLock;

/// Host properties the page scripts inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// Whether `window.MSStream` is defined (IE Mobile pretends to be an iPhone)
    pub ms_stream: bool,
    /// Whether `ontouchstart` exists on the window
    pub touch_events: bool,
    /// `navigator.maxTouchPoints`
    pub max_touch_points: u32,
    /// `window.innerWidth` in CSS pixels
    pub viewport_width: u32,
}

const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) \
                         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Mobile Safari/537.36";

fn ios_pattern() -> &'static Regex {
    static IOS_REGEX: OnceLock<Regex> = OnceLock::new();
    IOS_REGEX.get_or_init(|| Regex::new(r"iPad|iPhone|iPod").expect("iOS regex should compile"))
}

impl Environment {
    /// A desktop browser with a mouse.
    pub fn desktop() -> Self {
        Self {
            user_agent: DESKTOP_UA.to_string(),
            ms_stream: false,
            touch_events: false,
            max_touch_points: 0,
            viewport_width: 1280,
        }
    }

    /// Safari on an iPhone.
    pub fn iphone() -> Self {
        Self {
            user_agent: IPHONE_UA.to_string(),
            ms_stream: false,
            touch_events: true,
            max_touch_points: 5,
            viewport_width: 390,
        }
    }

    /// Chrome on an Android phone.
    pub fn android() -> Self {
        Self {
            user_agent: ANDROID_UA.to_string(),
            ms_stream: false,
            touch_events: true,
            max_touch_points: 5,
            viewport_width: 412,
        }
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    /// iPad, iPhone or iPod, excluding IE Mobile.
    pub fn is_ios(&self) -> bool {
        ios_pattern().is_match(&self.user_agent) && !self.ms_stream
    }

    pub fn is_touch_device(&self) -> bool {
        self.touch_events || self.max_touch_points > 0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!Environment::desktop().is_ios());
        assert!(!Environment::desktop().is_touch_device());
        assert!(Environment::iphone().is_ios());
        assert!(Environment::iphone().is_touch_device());
        assert!(!Environment::android().is_ios());
        assert!(Environment::android().is_touch_device());
    }

    #[test]
    fn test_ms_stream_is_not_ios() {
        let env = Environment {
            ms_stream: true,
            ..Environment::iphone()
        };
        assert!(!env.is_ios());
    }

    #[test]
    fn test_touch_points_alone_mean_touch() {
        let env = Environment {
            max_touch_points: 10,
            ..Environment::desktop()
        };
        assert!(env.is_touch_device());
    }

    #[test]
    fn test_ipad_user_agent() {
        let env = Environment {
            user_agent: "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X)".to_string(),
            ..Environment::desktop()
        };
        assert!(env.is_ios());
    }
}
