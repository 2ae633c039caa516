//! Short-lived success message with an expiry token.
//!
//! Every `show` bumps the generation. A delayed clear scheduled for an older
//! message carries the old generation and does nothing.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    text: Option<String>,
    generation: u32,
}

impl Notice {
    /// Shows `text` and returns the token for clearing this exact message
    pub fn show(&mut self, text: impl Into<String>) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.text = Some(text.into());
        self.generation
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    /// Clears the message only if it is still the one `generation` refers to
    pub fn expire(&mut self, generation: u32) {
        if self.generation == generation {
            self.text = None;
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_current_message() {
        let mut notice = Notice::default();
        let token = notice.show("Purchase saved");
        assert_eq!(notice.text(), Some("Purchase saved"));

        notice.expire(token);
        assert_eq!(notice.text(), None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        let mut notice = Notice::default();
        let first = notice.show("Purchase saved");
        let second = notice.show("Purchase saved");
        assert_ne!(first, second);

        notice.expire(first);
        assert_eq!(notice.text(), Some("Purchase saved"));

        notice.expire(second);
        assert_eq!(notice.text(), None);
    }

    #[test]
    fn test_edit_clear_then_old_timer() {
        let mut notice = Notice::default();
        let first = notice.show("Purchase saved");
        notice.clear();
        let second = notice.show("Purchase saved");

        notice.expire(first);
        assert_eq!(notice.text(), Some("Purchase saved"));
        notice.expire(second);
        assert_eq!(notice.text(), None);
    }
}
