/// Which social link, if any, the pointer is currently over.
///
/// A card owns exactly one of these. Holding a single id means at most one
/// tooltip can ever be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState(Option<String>);

impl HoverState {
    pub fn enter(&mut self, id: impl Into<String>) {
        self.0 = Some(id.into());
    }

    /// Clears unconditionally; the next `enter` overwrites whatever was left.
    pub fn leave(&mut self) {
        self.0 = None;
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.0.as_deref() == Some(id)
    }

    pub fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
