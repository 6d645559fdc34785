use bitflags::bitflags;
use marrow_traits::IntRect;

bitflags! {
    #[derive(Clone, Copy, PartialEq)]
    pub struct ViewFlags: u32 {
        /// Whether the host has assigned bounds to this view at least once
        const LAID_OUT = 0b00000001;
        /// Hidden views are skipped by bone capture
        const HIDDEN = 0b00000010;
    }
}

impl ViewFlags {
    #[inline(always)]
    pub fn is_laid_out(&self) -> bool {
        self.contains(Self::LAID_OUT)
    }

    #[inline(always)]
    pub fn is_hidden(&self) -> bool {
        self.contains(Self::HIDDEN)
    }
}

/// One node of the view hierarchy the overlay shadows.
pub struct View {
    /// Our Id
    pub id: usize,
    /// Our parent's ID
    pub parent: Option<usize>,
    /// What are our children?
    pub children: Vec<usize>,

    // Flags
    pub flags: ViewFlags,

    /// Bounds relative to the parent view, written by the host's layout pass
    pub(crate) bounds: IntRect,
}

impl View {
    pub(crate) fn new(id: usize, parent: Option<usize>) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            flags: ViewFlags::empty(),
            bounds: IntRect::ZERO,
        }
    }

    pub fn bounds(&self) -> IntRect {
        self.bounds
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.is_hidden()
    }

    pub fn is_laid_out(&self) -> bool {
        self.flags.is_laid_out()
    }
}
