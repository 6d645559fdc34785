use crate::bone::Bone;

/// An insertion-ordered collection of bones, at most one per view id.
///
/// Insertion order is render order, so the sequence itself is the primary
/// storage; lookups are a first-match linear scan. A missing view id is a
/// normal outcome of every operation, never an error.
#[derive(Default)]
pub struct BoneRegistry {
    bones: Vec<Bone>,
}

impl BoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bone registered for `view_id`, if any.
    pub fn get(&self, view_id: usize) -> Option<&Bone> {
        self.bones.iter().find(|bone| bone.view_id == view_id)
    }

    pub fn get_mut(&mut self, view_id: usize) -> Option<&mut Bone> {
        self.bones.iter_mut().find(|bone| bone.view_id == view_id)
    }

    /// Replace the bone registered for `view_id` in place, preserving its
    /// position in the sequence.
    ///
    /// Update-only: when no bone matches, the registry is left unchanged and
    /// `false` is returned. Use [`register`](Self::register) to add bones.
    pub fn update(&mut self, view_id: usize, updated_bone: Bone) -> bool {
        match self.bones.iter().position(|bone| bone.view_id == view_id) {
            Some(index) => {
                self.bones[index] = updated_bone;
                true
            }
            None => false,
        }
    }

    /// Register a bone at the end of the sequence. A bone already registered
    /// for the same view id is replaced in place instead, keeping both its
    /// position and the one-bone-per-view-id invariant.
    pub fn register(&mut self, bone: Bone) {
        match self
            .bones
            .iter()
            .position(|existing| existing.view_id == bone.view_id)
        {
            Some(index) => self.bones[index] = bone,
            None => self.bones.push(bone),
        }
    }

    pub fn remove(&mut self, view_id: usize) -> Option<Bone> {
        let index = self.bones.iter().position(|bone| bone.view_id == view_id)?;
        Some(self.bones.remove(index))
    }

    pub fn clear(&mut self) {
        self.bones.clear();
    }

    /// Bones in insertion (render) order.
    pub fn iter(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter()
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}
