//! Per-generation telemetry sinks
//!
//! The engine hands every generation's statistics to a [`TelemetrySink`].
//! Where the line ends up (stdout, the tracing subscriber, memory) is up to
//! the sink.

use super::GenerationStats;

/// Receiver of one telemetry record per generation
pub trait TelemetrySink {
    /// Publish the statistics of one generation
    fn emit(&mut self, stats: &GenerationStats);
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for &mut S {
    fn emit(&mut self, stats: &GenerationStats) {
        (**self).emit(stats);
    }
}

/// Collects every record in memory
impl TelemetrySink for Vec<GenerationStats> {
    fn emit(&mut self, stats: &GenerationStats) {
        self.push(stats.clone());
    }
}

/// Prints the telemetry line to standard output
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutTelemetry;

impl TelemetrySink for StdoutTelemetry {
    fn emit(&mut self, stats: &GenerationStats) {
        println!("{}", stats);
    }
}

/// Emits the telemetry line as a `tracing` event
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn emit(&mut self, stats: &GenerationStats) {
        tracing::info!(
            target: "selfadapt_es::telemetry",
            generation = stats.generation,
            evaluations = stats.evaluations,
            "{}",
            stats
        );
    }
}

/// Discards every record
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn emit(&mut self, _stats: &GenerationStats) {}
}
