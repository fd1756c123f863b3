use galaxy_generator::{Parameters, UniformSource};

use crate::controller::{ControllerError, DisposeHook, LiveField, RegenerationController};

/// Latest-wins buffer for parameter edits.
///
/// A UI slider emits many intermediate values while it is dragged; only the
/// value present when the edit finishes is worth generating. Submitting
/// replaces whatever is pending, and `flush` applies just that one.
#[derive(Debug, Default)]
pub struct ReconfigureQueue {
    pending: Option<Parameters>,
    superseded: u64,
    applied: u64,
}

impl ReconfigureQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `params`, dropping any edit still pending.
    pub fn submit(&mut self, params: Parameters) {
        if self.pending.replace(params).is_some() {
            self.superseded += 1;
        }
    }

    pub fn pending(&self) -> Option<&Parameters> {
        self.pending.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard the pending edit without applying it.
    pub fn cancel(&mut self) -> Option<Parameters> {
        self.pending.take()
    }

    /// Edits that were replaced before they could be applied.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Edits that reached the controller successfully.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Apply the pending edit, if any. Returns `Ok(None)` when nothing was queued.
    ///
    /// A rejected edit is consumed; resubmit corrected parameters to retry.
    pub fn flush<'c, H: DisposeHook>(
        &mut self,
        controller: &'c mut RegenerationController<H>,
    ) -> Result<Option<&'c LiveField>, ControllerError> {
        match self.pending.take() {
            Some(params) => {
                let live = controller.reconfigure(params)?;
                self.applied += 1;
                Ok(Some(live))
            }
            None => Ok(None),
        }
    }

    /// Like [`Self::flush`], drawing randomness from `source`.
    pub fn flush_with<'c, H: DisposeHook>(
        &mut self,
        controller: &'c mut RegenerationController<H>,
        source: &mut impl UniformSource,
    ) -> Result<Option<&'c LiveField>, ControllerError> {
        match self.pending.take() {
            Some(params) => {
                let live = controller.reconfigure_with(params, source)?;
                self.applied += 1;
                Ok(Some(live))
            }
            None => Ok(None),
        }
    }
}
