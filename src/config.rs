/// Publisher behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Skip the append when an identical JSON-LD node is already in the head.
    /// Off by default: publishing twice yields two nodes.
    pub skip_if_present: bool,
}

impl PublisherConfig {
    pub fn guarded() -> Self {
        Self {
            skip_if_present: true,
        }
    }
}
