use std::time::Instant;

use tracing::{Level, Span};
use uuid::Uuid;

use crate::config::TelemetryConfig;

pub fn init_logging(level: Level) {
    // a subscriber may already be installed by an embedding host
    if let Err(err) = tracing_subscriber::fmt().with_max_level(level).try_init() {
        tracing::debug!("keeping existing subscriber: {}", err);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plugin {
    pub name: &'static str,
    pub enabled: bool,
}

/// Per-invocation marks and profiling, toggled by config.
#[derive(Clone, Debug)]
pub struct Telemetry {
    plugins: Vec<Plugin>,
    distributed_tracing: bool,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new(&TelemetryConfig::default())
    }
}

impl Telemetry {
    pub fn new(config: &TelemetryConfig) -> Self {
        let plugins = vec![
            Plugin {
                name: "profiler",
                enabled: config.profiler_enabled,
            },
            Plugin {
                name: "trace",
                enabled: config.trace_enabled,
            },
        ];

        if config.token.is_none() && plugins.iter().any(|plugin| plugin.enabled) {
            tracing::warn!("telemetry token not set, marks are recorded locally only");
        }

        Self {
            plugins,
            distributed_tracing: config.distributed_tracing_enabled,
        }
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    fn is_enabled(&self, name: &str) -> bool {
        self.plugins
            .iter()
            .any(|plugin| plugin.name == name && plugin.enabled)
    }

    pub fn log_plugins(&self) {
        for plugin in self.plugins.iter().filter(|plugin| plugin.enabled) {
            tracing::info!("telemetry {} plugin enabled", plugin.name);
        }
    }

    /// Span wrapping one invocation; disabled unless distributed tracing is on.
    pub fn invocation_span(&self) -> Span {
        if !self.distributed_tracing {
            return Span::none();
        }

        tracing::info_span!("invocation", invocation_id = %Uuid::new_v4())
    }

    /// Starts a named mark that reports its elapsed time when dropped.
    pub fn mark(&self, name: &'static str) -> Mark {
        Mark {
            name,
            started: self.is_enabled("trace").then(Instant::now),
        }
    }

    /// Starts the whole-invocation timer reported by the profiler.
    pub fn profile(&self) -> Mark {
        Mark {
            name: "invocation",
            started: self.is_enabled("profiler").then(Instant::now),
        }
    }
}

#[derive(Debug)]
pub struct Mark {
    name: &'static str,
    started: Option<Instant>,
}

impl Mark {
    pub fn is_recording(&self) -> bool {
        self.started.is_some()
    }
}

impl Drop for Mark {
    fn drop(&mut self) {
        if let Some(started) = self.started {
            tracing::info!(
                mark = self.name,
                elapsed_us = started.elapsed().as_micros() as u64,
                "mark"
            );
        }
    }
}
