#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    TriggerClicked,
    CloseClicked,
    /// Click that reached the overlay; `on_backdrop` is false when it
    /// started inside the modal body and bubbled up.
    OverlayClicked { on_backdrop: bool },
}

impl ModalState {
    pub fn apply(self, event: ModalEvent) -> ModalState {
        match event {
            ModalEvent::TriggerClicked => ModalState::Open,
            ModalEvent::CloseClicked => ModalState::Closed,
            ModalEvent::OverlayClicked { on_backdrop: true } => ModalState::Closed,
            ModalEvent::OverlayClicked { on_backdrop: false } => self,
        }
    }

    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_closes_body_click_does_not() {
        let open = ModalState::Closed.apply(ModalEvent::TriggerClicked);
        assert!(open.is_open());
        assert_eq!(
            open.apply(ModalEvent::OverlayClicked { on_backdrop: false }),
            ModalState::Open
        );
        assert_eq!(
            open.apply(ModalEvent::OverlayClicked { on_backdrop: true }),
            ModalState::Closed
        );
        assert_eq!(open.apply(ModalEvent::CloseClicked), ModalState::Closed);
    }
}
