//! Bookkeeping for the chart instances living on each chart surface.

/// A chart drawn by some engine that must be released before the surface is
/// reused (`Plotly.purge`, `Chart#destroy`).
pub trait ChartInstance {
    fn dispose(self);
}

/// A DOM element charts are drawn into, holding at most one live instance.
#[derive(Debug)]
pub struct ChartSurface<H: ChartInstance> {
    id: String,
    current: Option<H>,
}

impl<H: ChartInstance> ChartSurface<H> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current: None,
        }
    }

    pub fn is_drawn(&self) -> bool {
        self.current.is_some()
    }

    /// Disposes the current instance, then installs the one built by `draw`.
    /// When `draw` fails the surface is left empty.
    pub fn replace<E>(&mut self, draw: impl FnOnce(&str) -> Result<H, E>) -> Result<(), E> {
        self.clear();
        let instance = draw(&self.id)?;
        tracing::trace!("Chart drawn on surface {}", self.id);
        self.current = Some(instance);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::trace!("Disposing chart on surface {}", self.id);
            previous.dispose();
        }
    }
}

impl<H: ChartInstance> Drop for ChartSurface<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
