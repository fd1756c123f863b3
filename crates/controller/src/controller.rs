use galaxy_generator::{
    GenerateError, Parameters, PointField, RngSource, UniformSource, generate_with,
};

/// Errors from controller operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("no field has been generated yet")]
    NoFieldYet,
}

/// Controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Upper bound on `Parameters::count`, capping worst-case generation latency.
    /// `None` disables the bound.
    pub max_count: Option<usize>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_count: Some(1_000_000),
        }
    }
}

/// The installed field together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveField {
    generation: u64,
    parameters: Parameters,
    field: PointField,
}

impl LiveField {
    /// Monotonic install counter, starting at 1 for the first field.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }
}

/// Receives each field as it is retired, so renderer-side resources
/// (GPU buffers and the like) can be released.
pub trait DisposeHook {
    fn dispose(&mut self, retired: LiveField);
}

impl<F: FnMut(LiveField)> DisposeHook for F {
    fn dispose(&mut self, retired: LiveField) {
        self(retired)
    }
}

/// Hook for callers with nothing to release.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDispose;

impl DisposeHook for NoopDispose {
    fn dispose(&mut self, _retired: LiveField) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Empty,
    Populated,
}

/// Holds zero or one live field and replaces it when parameters change.
///
/// Not internally synchronized: callers serialize reconfiguration, e.g.
/// through a [`crate::ReconfigureQueue`].
pub struct RegenerationController<H: DisposeHook = NoopDispose> {
    config: ControllerConfig,
    hook: H,
    current: Option<LiveField>,
    generations: u64,
}

impl RegenerationController<NoopDispose> {
    pub fn new() -> Self {
        Self::with_hook(NoopDispose)
    }
}

impl Default for RegenerationController<NoopDispose> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: DisposeHook> RegenerationController<H> {
    pub fn with_hook(hook: H) -> Self {
        Self::with_config(ControllerConfig::default(), hook)
    }

    pub fn with_config(config: ControllerConfig, hook: H) -> Self {
        Self {
            config,
            hook,
            current: None,
            generations: 0,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> ControllerState {
        if self.current.is_some() {
            ControllerState::Populated
        } else {
            ControllerState::Empty
        }
    }

    pub fn is_populated(&self) -> bool {
        self.current.is_some()
    }

    /// The current field, or [`ControllerError::NoFieldYet`] before the first
    /// successful reconfiguration (and after teardown).
    pub fn current(&self) -> Result<&LiveField, ControllerError> {
        self.current.as_ref().ok_or(ControllerError::NoFieldYet)
    }

    /// Parameters of the current field, if any.
    pub fn parameters(&self) -> Option<&Parameters> {
        self.current.as_ref().map(LiveField::parameters)
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    /// Borrow the hook mutably alongside the current field, e.g. to upload
    /// the field's buffers into renderer-side storage owned by the hook.
    pub fn hook_and_current(&mut self) -> (&mut H, Option<&LiveField>) {
        (&mut self.hook, self.current.as_ref())
    }

    /// Replace the current field with one generated from `params`.
    pub fn reconfigure(&mut self, params: Parameters) -> Result<&LiveField, ControllerError> {
        self.reconfigure_with(params, &mut RngSource::thread())
    }

    /// Like [`Self::reconfigure`], drawing randomness from `source`.
    ///
    /// On error the controller is left exactly as it was and the hook is not called.
    pub fn reconfigure_with(
        &mut self,
        params: Parameters,
        source: &mut impl UniformSource,
    ) -> Result<&LiveField, ControllerError> {
        if let Err(err) = self.check(&params) {
            tracing::warn!(%err, "rejected reconfiguration");
            return Err(err.into());
        }

        // Release the old buffers before allocating the new ones so peak
        // memory stays at one field.
        self.retire();

        // `check` ran the same validation as `generate_with`, which has no
        // other failure mode, so the old field is never lost to an error here.
        let field = generate_with(&params, source)?;
        self.generations += 1;
        tracing::info!(
            generation = self.generations,
            count = field.len(),
            "installed point field"
        );

        Ok(&*self.current.insert(LiveField {
            generation: self.generations,
            parameters: params,
            field,
        }))
    }

    /// Dispose the current field, if any. Calling this on an empty controller is a no-op.
    pub fn teardown(&mut self) {
        if self.retire() {
            tracing::info!("controller torn down");
        }
    }

    fn check(&self, params: &Parameters) -> Result<(), GenerateError> {
        params.validate()?;
        match self.config.max_count {
            Some(max) if params.count > max => Err(GenerateError::InvalidParameter {
                field: "count",
                reason: format!("{} exceeds the configured maximum of {max}", params.count),
            }),
            _ => Ok(()),
        }
    }

    fn retire(&mut self) -> bool {
        match self.current.take() {
            Some(old) => {
                tracing::debug!(generation = old.generation, "disposing point field");
                self.hook.dispose(old);
                true
            }
            None => false,
        }
    }
}

impl<H: DisposeHook> Drop for RegenerationController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
