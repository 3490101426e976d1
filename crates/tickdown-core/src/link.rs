/// Where the active share link is kept.
///
/// Plays the role a browser address bar would: the controller reads it
/// once when it mounts and overwrites it in place after every successful
/// encode. Implementations must not keep history.
pub trait LinkSlot {
    /// The link currently in the slot, if any.
    fn current(&self) -> Option<&str>;

    /// Replace the slot's content with a freshly encoded link.
    fn replace(&mut self, link: String);
}

/// Link slot backed by a plain field, used by the interactive session and
/// by tests.
#[derive(Debug, Default)]
pub struct InMemoryLink {
    link: Option<String>,
}

impl InMemoryLink {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded(link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
        }
    }
}

impl LinkSlot for InMemoryLink {
    fn current(&self) -> Option<&str> {
        self.link.as_deref()
    }

    fn replace(&mut self, link: String) {
        self.link = Some(link);
    }
}
