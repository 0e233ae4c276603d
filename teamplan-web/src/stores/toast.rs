use yewdux::Store;

/// Single-slot toast banner state.
///
/// `show` overwrites whatever is currently displayed; there is no queue
/// and no auto-dismiss timer. `hide` is the only way back to the closed
/// rest state `{ is_open: false, message: "" }`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct ToastStore {
    /// Whether the banner is visible.
    pub is_open: bool,
    /// The message currently displayed; empty while closed.
    pub message: String,
}

impl ToastStore {
    /// Open the banner with `message`, replacing any current one.
    pub fn show(&mut self, message: impl Into<String>) {
        self.is_open = true;
        self.message = message.into();
    }

    /// Dismiss the banner and clear its message.
    pub fn hide(&mut self) {
        self.is_open = false;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yewdux::Dispatch;

    /// A second show() overwrites the first message, last write wins
    #[test]
    fn test_show_overwrites_message() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<ToastStore>::new(&cx);

        dispatch.reduce_mut(|toast| toast.show("first"));
        dispatch.reduce_mut(|toast| toast.show("second"));

        let state = dispatch.get();
        assert!(state.is_open);
        assert_eq!(state.message, "second");
    }

    /// hide() always lands on the closed rest state
    #[test]
    fn test_hide_resets_to_rest_state() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<ToastStore>::new(&cx);

        dispatch.reduce_mut(|toast| toast.show("saving failed"));
        dispatch.reduce_mut(ToastStore::hide);

        let state = dispatch.get();
        assert!(!state.is_open);
        assert_eq!(state.message, "");
    }

    /// hide() on an already-closed toast is harmless
    #[test]
    fn test_hide_when_closed() {
        let mut toast = ToastStore::default();
        toast.hide();
        assert_eq!(toast, ToastStore::default());
    }
}
