use focusgate_domain::{Settings, Verdict};

/// The in-memory matching engine behind the navigation guard.
///
/// All operations are synchronous: the live structures are swapped
/// atomically by the engine's own load/update paths, so readers never
/// block or observe a half-built index.
pub trait FilterEnginePort: Send + Sync {
    /// Pure decision function for one candidate navigation.
    fn evaluate(&self, tab_id: i64, url: &str) -> Verdict;

    /// Decision path for browser tab events: consults the short-TTL
    /// decision cache and the per-tab debouncer before evaluating.
    fn evaluate_tab_event(&self, tab_id: i64, url: &str) -> Verdict;

    fn set_active(&self, active: bool);
    fn is_active(&self) -> bool;

    /// Rebuilds every live structure from the given settings and swaps
    /// them in atomically.
    fn reload(&self, settings: &Settings);

    /// Replaces only the consolidated community domain set.
    fn install_community(&self, domains: &[String]);
    fn install_custom(&self, domains: &[String]);
    fn install_keywords(&self, keywords: &[String]);
    fn install_allowlist(&self, domains: &[String]);

    fn community_len(&self) -> usize;
    fn custom_len(&self) -> usize;
}
