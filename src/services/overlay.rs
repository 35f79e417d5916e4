/// The two modal regions a card action can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Detail,
    Trailer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Visibility of the detail and trailer overlays. The two flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    detail: Visibility,
    trailer: Visibility,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self, kind: OverlayKind) -> Visibility {
        match kind {
            OverlayKind::Detail => self.detail,
            OverlayKind::Trailer => self.trailer,
        }
    }

    pub fn is_shown(&self, kind: OverlayKind) -> bool {
        self.visibility(kind) == Visibility::Shown
    }

    pub fn open(&mut self, kind: OverlayKind) {
        self.set(kind, Visibility::Shown);
    }

    pub fn close(&mut self, kind: OverlayKind) {
        self.set(kind, Visibility::Hidden);
    }

    fn set(&mut self, kind: OverlayKind, visibility: Visibility) {
        match kind {
            OverlayKind::Detail => self.detail = visibility,
            OverlayKind::Trailer => self.trailer = visibility,
        }
    }
}
