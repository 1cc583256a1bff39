/// Terminal-based ASCII host for the tilt engine
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tilt3d_core::{
    AnimatedCycle, Corner, Direction, ShadowStyle, StaticPose, TiltConfig,
};
use tilt3d_surface::apply;

pub mod layer;
pub mod renderer;

pub use layer::CardLayer;
pub use renderer::AsciiRenderer;

/// Cycle length used when a static pose is toggled into animated mode.
const CYCLE_SECONDS: f32 = 8.0;

/// Frame pacing for playback sampling.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Card extents in points.
const CARD_HALF_WIDTH: f32 = 22.0;
const CARD_HALF_HEIGHT: f32 = 14.0;

/// Main application struct for the terminal tilt demo
pub struct TerminalApp {
    layer: CardLayer,
    renderer: AsciiRenderer,
    corner: Corner,
    direction: Direction,
    animated: bool,
    distortion: f32,
    angle_degrees: f32,
    step: f32,
    duration_seconds: f32,
    shadow_style: Option<ShadowStyle>,
    running: bool,
    started: Instant,
    fps_mark: Instant,
    frames_since_mark: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: TiltConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let (corner, direction, animated) = match config {
            TiltConfig::Static(pose) => (pose.corner, Direction::Clockwise, false),
            TiltConfig::Animated(cycle) => (cycle.from_corner, cycle.direction, true),
        };
        let (distortion, angle_degrees, step, duration_seconds, shadow_style) = match config {
            TiltConfig::Static(pose) => (
                pose.distortion,
                pose.angle_degrees,
                pose.step,
                CYCLE_SECONDS,
                pose.shadow_style,
            ),
            TiltConfig::Animated(cycle) => (
                cycle.distortion,
                cycle.angle_degrees,
                cycle.step,
                cycle.duration_seconds,
                cycle.shadow_style,
            ),
        };

        let mut app = Self {
            layer: CardLayer::new(),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            corner,
            direction,
            animated,
            distortion,
            angle_degrees,
            step,
            duration_seconds,
            shadow_style,
            running: true,
            started: Instant::now(),
            fps_mark: Instant::now(),
            frames_since_mark: 0,
            fps: 0.0,
        };
        app.reapply()?;
        Ok(app)
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let outcome = self.drive();

        // Restore the terminal even when the loop bailed out early.
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        outcome
    }

    /// One frame per tick: drain pending input (each configuration key
    /// does a full reset-then-apply and restarts playback), sample the
    /// layer's animations at wall-clock time, paint, then sleep off the
    /// rest of the frame interval.
    fn drive(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                self.handle_input()?;
            }

            let elapsed = self.started.elapsed().as_secs_f32();
            self.render_frame(elapsed)?;
            self.tick_fps();

            std::thread::sleep(FRAME_INTERVAL.saturating_sub(frame_start.elapsed()));
        }

        Ok(())
    }

    fn tick_fps(&mut self) {
        self.frames_since_mark += 1;
        let since_mark = self.fps_mark.elapsed();
        if since_mark.as_secs() >= 1 {
            self.fps = self.frames_since_mark as f32 / since_mark.as_secs_f32();
            self.frames_since_mark = 0;
            self.fps_mark = Instant::now();
        }
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.animated = !self.animated;
                    self.reapply()?;
                }
                KeyCode::Char('d') => {
                    self.direction = match self.direction {
                        Direction::Clockwise => Direction::CounterClockwise,
                        Direction::CounterClockwise => Direction::Clockwise,
                    };
                    self.reapply()?;
                }
                KeyCode::Left => {
                    self.corner = self.corner.next(Direction::CounterClockwise);
                    self.reapply()?;
                }
                KeyCode::Right => {
                    self.corner = self.corner.next(Direction::Clockwise);
                    self.reapply()?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Current configuration rebuilt from the interactive state.
    fn config(&self) -> TiltConfig {
        if self.animated {
            TiltConfig::Animated(AnimatedCycle {
                from_corner: self.corner,
                direction: self.direction,
                distortion: self.distortion,
                angle_degrees: self.angle_degrees,
                step: self.step,
                duration_seconds: self.duration_seconds,
                shadow_style: self.shadow_style,
            })
        } else {
            TiltConfig::Static(StaticPose {
                corner: self.corner,
                distortion: self.distortion,
                angle_degrees: self.angle_degrees,
                step: self.step,
                shadow_style: self.shadow_style,
            })
        }
    }

    /// Reset-then-apply the current configuration and restart playback.
    fn reapply(&mut self) -> io::Result<()> {
        let config = self.config();
        apply(&mut self.layer, &config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        self.started = Instant::now();
        Ok(())
    }

    fn render_frame(&mut self, elapsed: f32) -> io::Result<()> {
        let transform = self.layer.transform_at(elapsed);
        let shadow_offset = self.layer.shadow_offset_at(elapsed);

        self.renderer.clear();

        // Shadow first so the card paints over it
        self.renderer.render_shadow(
            CARD_HALF_WIDTH,
            CARD_HALF_HEIGHT,
            &transform,
            shadow_offset,
            self.layer.shadow_opacity(),
            1.0,
        );
        self.renderer
            .render_card(CARD_HALF_WIDTH, CARD_HALF_HEIGHT, &transform, 1.0);

        let mut out = stdout();
        queue!(out, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut out)?;

        // Status line over the frame
        let mode = if self.animated { "cycle" } else { "static" };
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Tilt3D Terminal | {:?} | {} | FPS: {:.1} | Controls: Left/Right=Corner D=Direction Space=Mode Q=Quit",
                self.corner, mode, self.fps
            )),
            ResetColor
        )?;

        out.flush()?;
        Ok(())
    }
}
