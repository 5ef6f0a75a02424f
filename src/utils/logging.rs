use log::{debug, log_enabled, Level};
use std::time::{Duration, Instant};

use crate::schema::PhysicsDocument;

/// Scoped timer tracing how long a load stage took.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("end {} ({} µs)", self.label, self.elapsed().as_micros());
        }
    }
}

/// Emits a one-line summary of a freshly loaded document at debug level.
pub fn log_document_summary(document: &PhysicsDocument) {
    if !log_enabled!(Level::Debug) {
        return;
    }

    let (inputs, outputs, particles) =
        document
            .physics_settings
            .iter()
            .fold((0usize, 0usize, 0usize), |(i, o, p), setting| {
                (
                    i + setting.input.len(),
                    o + setting.output.len(),
                    p + setting.vertices.len(),
                )
            });

    debug!(
        "loaded physics json: {} settings (meta {}), {} inputs (meta {}), {} outputs (meta {}), {} particles (meta {})",
        document.physics_settings.len(),
        document.meta.physics_setting_count,
        inputs,
        document.meta.total_input_count,
        outputs,
        document.meta.total_output_count,
        particles,
        document.meta.vertex_count,
    );
}
