/// Demo settings, overridable from positional command-line arguments
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Cube edge length, in terminal rows
    pub face_size: f64,
    /// Time for one sweep from 0 to `end_angle`
    pub duration: Duration,
    pub fps: u32,
    /// Distance from the viewer to the z = 0 plane
    pub perspective: f64,
    pub end_angle: f64,
    /// Terminal cells are roughly twice as tall as they are wide
    pub cell_aspect: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            face_size: 12.0,
            duration: Duration::from_millis(5000),
            fps: 30,
            perspective: 60.0,
            end_angle: std::f64::consts::PI,
            cell_aspect: 2.0,
        }
    }
}

impl AnimationConfig {
    /// `[face-size] [duration-ms]`, anything missing keeps its default
    pub fn from_args(args: &[String]) -> io::Result<Self> {
        let mut config = Self::default();

        if let Some(size) = args.first() {
            config.face_size = size
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or_else(|| invalid(format!("face size must be a positive number, got {:?}", size)))?;
        }

        if let Some(ms) = args.get(1) {
            let ms = ms
                .parse::<u64>()
                .ok()
                .filter(|&ms| ms > 0)
                .ok_or_else(|| invalid(format!("duration must be a positive number of ms, got {:?}", ms)))?;
            config.duration = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }

    /// The rotating cube must stay in front of the viewer
    pub fn validate(&self) -> io::Result<()> {
        // farthest a corner gets from the center under any rotation
        let reach = self.face_size * 3f64.sqrt() / 2.0;
        if reach >= self.perspective {
            return Err(invalid(format!(
                "face size {} reaches past the viewer at perspective {}",
                self.face_size, self.perspective
            )));
        }
        Ok(())
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1) as u64)
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
