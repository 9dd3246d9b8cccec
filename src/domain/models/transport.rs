#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;

/// Transient playback state for the active media entry. Re-derived whenever
/// a different file becomes active, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transport {
    pub elapsed: f64,
    pub duration: f64,
    pub playing: bool,
}

pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    return format!("{:02}:{:02}", total / 60, total % 60);
}

impl Transport {
    pub fn with_duration(duration: f64) -> Transport {
        return Transport {
            elapsed: 0.0,
            duration: duration.max(0.0),
            playing: false,
        };
    }

    /// Advances elapsed time while playing, clamping at the known duration.
    /// Returns true when playback just ran off the end.
    pub fn tick(&mut self, delta_seconds: f64) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed += delta_seconds;
        if self.duration > 0.0 && self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.playing = false;
            return true;
        }

        return false;
    }

    pub fn percent(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }

        return (self.elapsed / self.duration) * 100.0;
    }

    pub fn format_elapsed(&self) -> String {
        return format_time(self.elapsed);
    }

    pub fn format_duration(&self) -> String {
        return format_time(self.duration);
    }
}
