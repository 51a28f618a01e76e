/// Navigation input produced by a reaction press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Stop,
}

impl Control {
    pub const PREVIOUS_EMOJI: &'static str = "◀️";
    pub const NEXT_EMOJI: &'static str = "▶️";
    pub const STOP_EMOJI: &'static str = "⏹️";

    /// Maps a reaction emoji to its control, ignoring unrelated reactions.
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            Self::PREVIOUS_EMOJI => Some(Self::Previous),
            Self::NEXT_EMOJI => Some(Self::Next),
            Self::STOP_EMOJI => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Previous => Self::PREVIOUS_EMOJI,
            Self::Next => Self::NEXT_EMOJI,
            Self::Stop => Self::STOP_EMOJI,
        }
    }
}

/// Result of feeding one control into a [`Navigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The index did not change; nothing to re-render.
    Unchanged,
    /// Show the page at this index.
    Show(usize),
    /// Navigation ended.
    Stopped,
}

/// Page index state machine for one presented list.
///
/// The index stays within `[0, page_count - 1]`. Presses that would leave it unchanged
/// are no-ops, and once stopped every further control is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    page: usize,
    page_count: usize,
    allow_stop: bool,
    stopped: bool,
}

impl Navigator {
    pub fn new(page_count: usize, allow_stop: bool) -> Self {
        Self {
            page: 0,
            page_count: page_count.max(1),
            allow_stop,
            stopped: false,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Controls to attach as reactions, in display order.
    pub fn controls(&self) -> Vec<Control> {
        if self.allow_stop {
            vec![Control::Previous, Control::Stop, Control::Next]
        } else {
            vec![Control::Previous, Control::Next]
        }
    }

    pub fn apply(&mut self, control: Control) -> Transition {
        if self.stopped {
            return Transition::Unchanged;
        }

        let next = match control {
            Control::Previous => self.page.saturating_sub(1),
            Control::Next => (self.page + 1).min(self.page_count - 1),
            Control::Stop if self.allow_stop => {
                self.stopped = true;
                return Transition::Stopped;
            }
            Control::Stop => return Transition::Unchanged,
        };

        if next == self.page {
            return Transition::Unchanged;
        }
        self.page = next;
        Transition::Show(next)
    }

    /// Marks the navigation as finished, e.g. when its lifetime elapsed.
    pub fn expire(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests two Next presses from the first page.
    ///
    /// Expected: the navigator shows page 1 then page 2
    #[test]
    fn two_next_presses_reach_third_page() {
        let mut nav = Navigator::new(3, false);

        assert_eq!(nav.apply(Control::Next), Transition::Show(1));
        assert_eq!(nav.apply(Control::Next), Transition::Show(2));
        assert_eq!(nav.page(), 2);
    }

    #[test]
    fn boundary_presses_are_noops() {
        let mut nav = Navigator::new(2, false);

        assert_eq!(nav.apply(Control::Previous), Transition::Unchanged);
        assert_eq!(nav.apply(Control::Next), Transition::Show(1));
        assert_eq!(nav.apply(Control::Next), Transition::Unchanged);
        assert_eq!(nav.page(), 1);
        assert_eq!(nav.apply(Control::Previous), Transition::Show(0));
    }

    #[test]
    fn stop_is_terminal_when_enabled() {
        let mut nav = Navigator::new(3, true);

        assert_eq!(nav.apply(Control::Stop), Transition::Stopped);
        assert!(nav.is_stopped());
        assert_eq!(nav.apply(Control::Next), Transition::Unchanged);
        assert_eq!(nav.page(), 0);
    }

    #[test]
    fn stop_is_ignored_when_disabled() {
        let mut nav = Navigator::new(3, false);

        assert_eq!(nav.apply(Control::Stop), Transition::Unchanged);
        assert!(!nav.is_stopped());
        assert_eq!(nav.controls(), vec![Control::Previous, Control::Next]);
    }

    #[test]
    fn expired_navigator_ignores_controls() {
        let mut nav = Navigator::new(3, false);
        nav.expire();

        assert_eq!(nav.apply(Control::Next), Transition::Unchanged);
    }

    #[test]
    fn single_page_never_moves() {
        let mut nav = Navigator::new(0, false);

        assert_eq!(nav.page_count(), 1);
        assert_eq!(nav.apply(Control::Next), Transition::Unchanged);
        assert_eq!(nav.apply(Control::Previous), Transition::Unchanged);
    }

    #[test]
    fn maps_reaction_emojis() {
        assert_eq!(Control::from_emoji("◀️"), Some(Control::Previous));
        assert_eq!(Control::from_emoji("▶️"), Some(Control::Next));
        assert_eq!(Control::from_emoji("⏹️"), Some(Control::Stop));
        assert_eq!(Control::from_emoji("👍"), None);
        assert_eq!(Control::Next.emoji(), "▶️");
    }
}
