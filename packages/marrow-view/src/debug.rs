use crate::overlay::SkeletonOverlay;

impl SkeletonOverlay {
    /// Log every registered bone and its captured rect.
    pub fn debug_log_bones(&self) {
        #[cfg(feature = "tracing")]
        for bone in self.bones().iter() {
            match bone.rect {
                Some(rect) => tracing::info!(
                    "bone for view {}: {:?} drawn at {:?}",
                    bone.view_id,
                    rect,
                    bone.draw_rect()
                ),
                None => tracing::info!("bone for view {}: not captured", bone.view_id),
            }
        }
    }
}
