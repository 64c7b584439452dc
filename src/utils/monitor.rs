use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

#[derive(Debug, Clone)]
pub struct ProcessStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// Tracks wall time for the whole run and, with the `cli` feature and
/// monitoring enabled, process CPU and memory.
pub struct RunMonitor {
    start_time: Instant,
    enabled: bool,
    #[cfg(feature = "cli")]
    system: System,
    #[cfg(feature = "cli")]
    pid: Option<Pid>,
    #[cfg(feature = "cli")]
    peak_memory_mb: u64,
}

impl RunMonitor {
    #[cfg(feature = "cli")]
    pub fn new(enabled: bool) -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("Process stats unavailable: {}", e);
                None
            }
        };

        let mut system = System::new();
        if enabled {
            system.refresh_all();
        }

        Self {
            start_time: Instant::now(),
            enabled,
            system,
            pid,
            peak_memory_mb: 0,
        }
    }

    #[cfg(not(feature = "cli"))]
    pub fn new(_enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[cfg(feature = "cli")]
    pub fn sample(&mut self) -> Option<ProcessStats> {
        if !self.enabled {
            return None;
        }

        self.system.refresh_all();
        let process = self.system.process(self.pid?)?;
        let memory_mb = process.memory() / 1024 / 1024;
        self.peak_memory_mb = self.peak_memory_mb.max(memory_mb);

        Some(ProcessStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: self.peak_memory_mb,
            elapsed_time: self.elapsed(),
        })
    }

    #[cfg(not(feature = "cli"))]
    pub fn sample(&mut self) -> Option<ProcessStats> {
        None
    }

    pub fn log_phase(&mut self, phase: &str) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final(&mut self) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 Final - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_has_no_samples() {
        let mut monitor = RunMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.sample().is_none());
    }
}
