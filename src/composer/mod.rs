//! Scene composer: the imperative half of the scroll choreography.
//!
//! The composer owns the camera and the core mesh transform. Host events
//! go in through [`SceneComposer::handle_event`]; once per animation frame
//! the host calls [`SceneComposer::frame`], which samples the timeline at
//! the latest scroll progress and assigns a fresh pose to the camera and
//! the [`RenderSurface`].
//!
//! Scroll events are coalesced: only the newest progress reaches the next
//! frame. After [`SceneComposer::teardown`] every entry point is a no-op.

mod listeners;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub use listeners::{ListenerKind, ListenerRegistry, Liveness};

use crate::camera::{Camera, OrbitOffset};
use crate::error::SceneError;
use crate::input::{InputEvent, InputProcessor, SceneCommand};
use crate::options::{MotionOptions, Options, PointerOptions};
use crate::scene::{ObjectTransform, SceneDescription};
use crate::scroll::{ScrollMetrics, ScrollProgress};
use crate::surface::RenderSurface;
use crate::timeline::{ScrollTimeline, TimelineSample};

/// What a call to [`SceneComposer::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Pose computed and applied to the surface.
    Rendered(TimelineSample),
    /// No surface mounted; camera and object were left untouched.
    Skipped,
    /// The composer has been torn down.
    Inactive,
}

/// Owns the live camera and applies timeline samples to a render surface.
pub struct SceneComposer<S: RenderSurface> {
    timeline: ScrollTimeline,
    camera: Camera,
    object: ObjectTransform,
    scene: SceneDescription,
    surface: Option<S>,
    input: InputProcessor,
    orbit: OrbitOffset,
    pointer: PointerOptions,
    motion: MotionOptions,
    metrics: ScrollMetrics,
    progress: ScrollProgress,
    /// Progress recorded by scroll events and not yet applied by a frame.
    pending: Option<ScrollProgress>,
    listeners: ListenerRegistry,
    liveness: Liveness,
    active_segment: Option<usize>,
    frames: u64,
}

impl<S: RenderSurface> SceneComposer<S> {
    /// Build a composer from options, validating the timeline.
    pub fn new(options: &Options) -> Result<Self, SceneError> {
        let timeline = options.build_timeline()?;
        Ok(Self::with_timeline(timeline, options))
    }

    /// Build a composer around an already validated timeline.
    #[must_use]
    pub fn with_timeline(timeline: ScrollTimeline, options: &Options) -> Self {
        let cam = &options.camera;
        let camera = Camera::new(
            timeline.start_pose(),
            cam.fallback_aspect,
            cam.fovy,
            cam.znear,
            cam.zfar,
        );

        Self {
            timeline,
            camera,
            object: ObjectTransform::default(),
            scene: SceneDescription::from_options(options),
            surface: None,
            input: InputProcessor::new(options.pointer.orbit_enabled),
            orbit: OrbitOffset::default(),
            pointer: options.pointer.clone(),
            motion: options.motion.clone(),
            metrics: ScrollMetrics::default(),
            progress: ScrollProgress::START,
            pending: None,
            listeners: ListenerRegistry::default(),
            liveness: Liveness::new(),
            active_segment: None,
            frames: 0,
        }
    }

    /// Attach the render surface and build the scene on it. Ignored after
    /// teardown.
    pub fn mount(&mut self, mut surface: S) {
        if !self.is_alive() {
            return;
        }
        surface.build(&self.scene);
        self.surface = Some(surface);
        log::info!(
            "scene mounted: {} particles, {} timeline segments",
            self.scene.particles.len(),
            self.timeline.segments().len()
        );
    }

    /// Detach and return the render surface.
    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Mounted surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Whether [`teardown`](Self::teardown) has not run yet.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.liveness.is_alive()
    }

    /// Handle to the liveness flag for host callbacks.
    #[must_use]
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Register how to detach a host listener. After teardown the release
    /// callback runs immediately instead.
    pub fn register_listener(&mut self, kind: ListenerKind, release: impl FnOnce() + 'static) {
        if self.is_alive() {
            self.listeners.register(kind, release);
        } else {
            release();
        }
    }

    /// Host listeners currently attached.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// The camera as of the last frame.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The core mesh transform as of the last frame.
    #[must_use]
    pub fn object(&self) -> ObjectTransform {
        self.object
    }

    /// The scene built on mount.
    #[must_use]
    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    /// The choreography being driven.
    #[must_use]
    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    /// Latest scroll progress, including a pending one.
    #[must_use]
    pub fn progress(&self) -> ScrollProgress {
        self.pending.unwrap_or(self.progress)
    }

    /// Scroll metrics from the latest scroll or resize event.
    #[must_use]
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Whether a scroll change is waiting for the next frame.
    #[must_use]
    pub fn has_pending_update(&self) -> bool {
        self.pending.is_some()
    }

    /// Frames applied to a surface so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Feed a raw host event through the input processor.
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.is_alive() {
            return;
        }
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Apply a composer command.
    pub fn execute(&mut self, cmd: SceneCommand) {
        if !self.is_alive() {
            return;
        }
        match cmd {
            SceneCommand::Orbit { delta } => {
                let base = self.timeline.sample(self.progress()).pose;
                self.orbit.drag(
                    delta,
                    self.pointer.rotate_speed,
                    base,
                    self.pointer.limits(),
                );
                self.pending = Some(self.progress());
            }
            SceneCommand::UpdateScroll(metrics) => self.set_metrics(metrics),
            SceneCommand::Resize(metrics) => {
                if let Some(aspect) = metrics.aspect() {
                    self.camera.aspect = aspect;
                }
                self.set_metrics(metrics);
            }
        }
    }

    /// Set scroll progress directly, e.g. from a host that computes it
    /// itself.
    pub fn set_progress(&mut self, progress: ScrollProgress) {
        if self.is_alive() {
            self.pending = Some(progress);
        }
    }

    fn set_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
        self.pending = Some(metrics.progress());
    }

    /// Advance one animation frame. `elapsed` is scene time since start and
    /// drives idle motion only; the pose depends on scroll progress alone.
    pub fn frame(&mut self, elapsed: Duration) -> FrameOutcome {
        if !self.is_alive() {
            return FrameOutcome::Inactive;
        }
        if let Some(progress) = self.pending.take() {
            self.progress = progress;
        }

        let Some(surface) = self.surface.as_mut() else {
            log::trace!("no surface mounted, skipping frame");
            return FrameOutcome::Skipped;
        };

        let sample = self.timeline.sample(self.progress);
        let pose = self.orbit.apply(sample.pose, self.pointer.limits());
        self.camera.set_pose(pose);
        self.object = idle_transform(&self.motion, sample.rotation, elapsed);

        if self.active_segment != Some(sample.segment) {
            self.active_segment = Some(sample.segment);
            log::debug!(
                "entered stage '{}' at progress {:.3}",
                self.timeline.segments()[sample.segment].stage,
                sample.progress.get()
            );
        }

        surface.apply_camera(&self.camera);
        surface.apply_object(&self.object);
        self.frames += 1;
        FrameOutcome::Rendered(sample)
    }

    /// Release host listeners, drop the pending update and the surface,
    /// and mark the composer dead. Returns `false` if it already was.
    pub fn teardown(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.liveness.kill();
        let released = self.listeners.release_all();
        self.pending = None;
        drop(self.surface.take());
        log::info!(
            "scene torn down after {} frames, released {released} listeners",
            self.frames
        );
        true
    }
}

impl<S: RenderSurface> Drop for SceneComposer<S> {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}

/// A composer shared with host callbacks.
pub type SharedComposer<S> = Rc<RefCell<SceneComposer<S>>>;

/// Run `register` to wire host listeners to `composer`. On error the
/// composer is torn down, which releases every listener registered before
/// the failure.
///
/// Listener closures hold the composer, so without this a failed attach
/// would leave it alive with listeners that are never removed.
pub fn attach_or_teardown<S, T, E>(
    composer: &SharedComposer<S>,
    register: impl FnOnce(&SharedComposer<S>) -> Result<T, E>,
) -> Result<T, E>
where
    S: RenderSurface,
{
    let result = register(composer);
    if result.is_err() {
        match composer.try_borrow_mut() {
            Ok(mut composer) => {
                let _ = composer.teardown();
            }
            Err(_) => log::warn!("composer busy, cannot tear down after failed attach"),
        }
    }
    result
}

/// Core mesh transform: scroll rotation plus time-based spin and bob.
fn idle_transform(
    motion: &MotionOptions,
    scroll_rotation: f32,
    elapsed: Duration,
) -> ObjectTransform {
    let t = elapsed.as_secs_f32();
    ObjectTransform {
        yaw: scroll_rotation + motion.spin_rate * t,
        height: (t * motion.bob_frequency).sin() * motion.bob_amplitude,
    }
}
