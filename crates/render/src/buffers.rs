use std::collections::BTreeMap;

use galaxy_controller::{DisposeHook, LiveField};

/// Bookkeeping for one uploaded field: what a GPU backend would hold as a
/// pair of vertex buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidentBuffers {
    pub generation: u64,
    pub point_count: usize,
    pub position_bytes: usize,
    pub color_bytes: usize,
}

impl ResidentBuffers {
    pub fn total_bytes(&self) -> usize {
        self.position_bytes + self.color_bytes
    }
}

/// CPU-side stand-in for renderer buffer residency.
///
/// Install it as the controller's dispose hook: `upload` records a field's
/// buffers, and disposal of a retired field releases them.
#[derive(Debug, Default)]
pub struct BufferRegistry {
    resident: BTreeMap<u64, ResidentBuffers>,
    released: u64,
    released_bytes: usize,
}

impl BufferRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the buffers of `live` as resident. Uploading the same
    /// generation twice is a no-op.
    pub fn upload(&mut self, live: &LiveField) -> ResidentBuffers {
        let field = live.field();
        *self.resident.entry(live.generation()).or_insert_with(|| {
            let buffers = ResidentBuffers {
                generation: live.generation(),
                point_count: field.len(),
                position_bytes: field.position_bytes().len(),
                color_bytes: field.color_bytes().len(),
            };
            tracing::debug!(
                generation = buffers.generation,
                bytes = buffers.total_bytes(),
                "uploaded field buffers"
            );
            buffers
        })
    }

    /// Currently resident buffers, oldest generation first.
    pub fn resident(&self) -> impl Iterator<Item = &ResidentBuffers> {
        self.resident.values()
    }

    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    pub fn is_resident(&self, generation: u64) -> bool {
        self.resident.contains_key(&generation)
    }

    /// Number of buffer pairs released so far.
    pub fn released_count(&self) -> u64 {
        self.released
    }

    pub fn released_bytes(&self) -> usize {
        self.released_bytes
    }
}

impl DisposeHook for BufferRegistry {
    fn dispose(&mut self, retired: LiveField) {
        match self.resident.remove(&retired.generation()) {
            Some(buffers) => {
                self.released += 1;
                self.released_bytes += buffers.total_bytes();
                tracing::debug!(
                    generation = buffers.generation,
                    bytes = buffers.total_bytes(),
                    "released field buffers"
                );
            }
            None => {
                tracing::trace!(
                    generation = retired.generation(),
                    "retired field was never uploaded"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_controller::RegenerationController;
    use galaxy_generator::Parameters;

    fn params(count: usize) -> Parameters {
        Parameters {
            count,
            ..Parameters::default()
        }
    }

    fn reconfigure_and_upload(
        controller: &mut RegenerationController<BufferRegistry>,
        count: usize,
    ) -> ResidentBuffers {
        controller.reconfigure(params(count)).unwrap();
        let (registry, current) = controller.hook_and_current();
        registry.upload(current.unwrap())
    }

    #[test]
    fn upload_records_buffer_sizes() {
        let mut controller = RegenerationController::with_hook(BufferRegistry::new());
        let buffers = reconfigure_and_upload(&mut controller, 100);
        assert_eq!(buffers.generation, 1);
        assert_eq!(buffers.point_count, 100);
        assert_eq!(buffers.position_bytes, 100 * 3 * 4);
        assert_eq!(buffers.total_bytes(), 2 * 100 * 3 * 4);
        assert_eq!(controller.hook().resident_count(), 1);
    }

    #[test]
    fn reconfigure_releases_previous_upload() {
        let mut controller = RegenerationController::with_hook(BufferRegistry::new());
        reconfigure_and_upload(&mut controller, 100);
        reconfigure_and_upload(&mut controller, 50);

        let registry = controller.hook();
        assert_eq!(registry.resident_count(), 1);
        assert!(registry.is_resident(2));
        assert!(!registry.is_resident(1));
        assert_eq!(registry.released_count(), 1);
        assert_eq!(registry.released_bytes(), 2 * 100 * 3 * 4);
    }

    #[test]
    fn duplicate_upload_is_ignored() {
        let mut controller = RegenerationController::with_hook(BufferRegistry::new());
        reconfigure_and_upload(&mut controller, 10);
        let (registry, current) = controller.hook_and_current();
        registry.upload(current.unwrap());
        assert_eq!(controller.hook().resident_count(), 1);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut controller = RegenerationController::with_hook(BufferRegistry::new());
        reconfigure_and_upload(&mut controller, 10);
        controller.teardown();
        assert_eq!(controller.hook().resident_count(), 0);
        assert_eq!(controller.hook().released_count(), 1);
    }

    #[test]
    fn disposing_unuploaded_field_is_harmless() {
        let mut controller = RegenerationController::with_hook(BufferRegistry::new());
        controller.reconfigure(params(10)).unwrap();
        controller.reconfigure(params(10)).unwrap();
        assert_eq!(controller.hook().released_count(), 0);
        assert_eq!(controller.hook().resident().count(), 0);
    }
}
