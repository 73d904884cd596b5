/// Terminal demo: a perspective cube driven by the matrix toolkit
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use matrix3d_core::{Point3, RotationState};

pub mod animation;
pub mod config;
pub mod cube;
pub mod renderer;

pub use animation::PingPong;
pub use config::AnimationConfig;
pub use cube::Cube;
pub use renderer::AsciiRenderer;

/// Main application struct for the terminal cube
pub struct TerminalApp {
    config: AnimationConfig,
    cube: Cube,
    sweep: PingPong,
    /// User-controlled offset added on top of the sweep
    tilt: RotationState,
    renderer: AsciiRenderer,
    running: bool,
    paused_at: Option<Duration>,
    started: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: AnimationConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let renderer = AsciiRenderer::new(width as usize, height as usize, config.cell_aspect);

        let center = Point3::new(renderer.world_width() / 2.0, height as f64 / 2.0, 0.0);
        let cube = Cube::new(config.face_size, center)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to build cube: {}", e)))?;
        log::debug!("cube of size {} centered at {}", config.face_size, center);

        Ok(Self {
            sweep: PingPong::new(config.duration),
            config,
            cube,
            tilt: RotationState::new(0.3, 0.5, 0.0),
            renderer,
            running: true,
            paused_at: None,
            started: Instant::now(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = self.config.frame_time();

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => self.toggle_pause(),
                KeyCode::Char('w') | KeyCode::Up => {
                    self.tilt.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.tilt.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.tilt.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.tilt.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.tilt.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.tilt.rotate(0.0, 0.0, -0.1);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn toggle_pause(&mut self) {
        match self.paused_at.take() {
            Some(at) => self.started = Instant::now().checked_sub(at).unwrap_or_else(Instant::now),
            None => self.paused_at = Some(self.started.elapsed()),
        }
    }

    /// Rotation for the current frame: the sweep angle on X and Y plus the tilt
    pub fn rotation_at(&self, elapsed: Duration) -> RotationState {
        let angle = self.sweep.progress(elapsed) * self.config.end_angle;
        let mut rotation = self.tilt;
        rotation.rotate(angle, angle, 0.0);
        rotation
    }

    fn render(&mut self) -> io::Result<()> {
        let elapsed = self.paused_at.unwrap_or_else(|| self.started.elapsed());
        let rotation = self.rotation_at(elapsed);
        let faces = self.cube.frame(&rotation, self.config.perspective);

        self.renderer.clear();
        self.renderer.render_faces(&faces);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Matrix3D Cube | FPS: {:.1} | Controls: WASD/Arrows=Tilt E/R=Roll Space=Pause Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
