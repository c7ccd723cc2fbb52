#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    EscapeKey,
    OutsideClick,
}

/// Open flag plus the id of the record shown in the details modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    selected: Option<String>,
}

impl ModalState {
    pub fn open(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
        self.open = true;
    }

    /// Every trigger ends in the same state.
    pub fn close(&mut self, _trigger: CloseTrigger) {
        self.open = false;
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Background scroll is disabled exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_triggers_converge() {
        for trigger in [
            CloseTrigger::Button,
            CloseTrigger::EscapeKey,
            CloseTrigger::OutsideClick,
        ] {
            let mut modal = ModalState::default();
            modal.open("5");
            assert!(modal.is_open());
            assert_eq!(modal.selected(), Some("5"));
            assert!(modal.scroll_locked());

            modal.close(trigger);
            assert_eq!(modal, ModalState::default());
            assert!(!modal.scroll_locked());
        }
    }

    #[test]
    fn test_open_replaces_selection() {
        let mut modal = ModalState::default();
        modal.open("1");
        modal.open("2");
        assert_eq!(modal.selected(), Some("2"));
    }
}
