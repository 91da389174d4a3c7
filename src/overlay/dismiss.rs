/// User input that may close an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissInput<'a> {
    /// A click that reached the backdrop layer. `on_backdrop` is false when
    /// it started inside the panel and bubbled up.
    BackdropClick { on_backdrop: bool },
    /// A key pressed anywhere in the document.
    Key(&'a str),
}

impl DismissInput<'_> {
    /// Whether this input closes an overlay whose `open` flag is `open`.
    pub fn dismisses(self, open: bool) -> bool {
        open && match self {
            DismissInput::BackdropClick { on_backdrop } => on_backdrop,
            DismissInput::Key(key) => key == "Escape",
        }
    }
}

/// The confirm button runs `on_confirm`, or closes when none was given.
pub fn confirm_action<A>(on_confirm: Option<A>, on_close: A) -> A {
    on_confirm.unwrap_or(on_close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_click_dismisses_only_on_backdrop() {
        assert!(DismissInput::BackdropClick { on_backdrop: true }.dismisses(true));
        // clicked inside the panel, bubbled to the backdrop
        assert!(!DismissInput::BackdropClick { on_backdrop: false }.dismisses(true));
    }

    #[test]
    fn test_escape_dismisses_open_overlay() {
        assert!(DismissInput::Key("Escape").dismisses(true));
        assert!(!DismissInput::Key("Enter").dismisses(true));
        assert!(!DismissInput::Key("Esc").dismisses(true));
    }

    #[test]
    fn test_closed_overlay_ignores_input() {
        assert!(!DismissInput::Key("Escape").dismisses(false));
        assert!(!DismissInput::BackdropClick { on_backdrop: true }.dismisses(false));
    }

    #[test]
    fn test_confirm_falls_back_to_close() {
        assert_eq!(confirm_action(None, "close"), "close");
        assert_eq!(confirm_action(Some("confirm"), "close"), "confirm");
    }
}
