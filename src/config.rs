use std::time::Duration;

const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/get";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_DELAY_MIN_MS: u64 = 1000;
const DEFAULT_DELAY_MAX_MS: u64 = 3000;
const DEFAULT_USER_AGENT: &str = concat!("pagetext/", env!("CARGO_PKG_VERSION"));

/// Bounds (inclusive, milliseconds) of the simulated processing delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    pub const NONE: DelayWindow = DelayWindow { min_ms: 0, max_ms: 0 };

    pub fn sample(&self) -> Duration {
        use rand::Rng;
        let (lo, hi) = if self.min_ms <= self.max_ms { (self.min_ms, self.max_ms) } else { (self.max_ms, self.min_ms) };
        if lo == hi {
            return Duration::from_millis(lo);
        }
        Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self { min_ms: DEFAULT_DELAY_MIN_MS, max_ms: DEFAULT_DELAY_MAX_MS }
    }
}

#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    pub relay_url: String,
    pub timeout: Duration,
    pub delay: DelayWindow,
    pub user_agent: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: DelayWindow::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(relay) = std::env::var("PAGETEXT_RELAY_URL") {
            cfg.relay_url = relay;
        }
        if let Ok(timeout) = std::env::var("PAGETEXT_TIMEOUT_SECS") {
            if let Ok(parsed) = timeout.parse::<u64>() {
                cfg.timeout = Duration::from_secs(parsed);
            }
        }
        if let Ok(min) = std::env::var("PAGETEXT_DELAY_MIN_MS") {
            if let Ok(parsed) = min.parse::<u64>() {
                cfg.delay.min_ms = parsed;
            }
        }
        if let Ok(max) = std::env::var("PAGETEXT_DELAY_MAX_MS") {
            if let Ok(parsed) = max.parse::<u64>() {
                cfg.delay.max_ms = parsed;
            }
        }
        if let Ok(ua) = std::env::var("PAGETEXT_USER_AGENT") {
            cfg.user_agent = ua;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_samples_stay_in_window() {
        let w = DelayWindow { min_ms: 10, max_ms: 20 };
        for _ in 0..100 {
            let d = w.sample().as_millis();
            assert!((10..=20).contains(&d));
        }
    }

    #[test]
    fn inverted_and_empty_windows() {
        assert_eq!(DelayWindow::NONE.sample(), Duration::ZERO);
        let inverted = DelayWindow { min_ms: 5, max_ms: 1 };
        let d = inverted.sample().as_millis();
        assert!((1..=5).contains(&d));
    }

    #[test]
    fn defaults_match_relay_and_delay_window() {
        let cfg = ExtractorConfig::default();
        assert_eq!(cfg.relay_url, "https://api.allorigins.win/get");
        assert_eq!(cfg.delay, DelayWindow { min_ms: 1000, max_ms: 3000 });
        assert_eq!(cfg.timeout, Duration::from_secs(20));
    }
}
