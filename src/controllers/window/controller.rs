use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use log::{debug, error, trace};

use crate::controllers::window::ports::{
    EmbeddedGuiPort, ImageBuffer, NativeEvent, PlatformEvent, PlatformPort, RenderBackendPort,
};
use crate::core::cursor::{AppliedCursorState, CursorArbiter, CursorRequest, GuiCursorSignal};
use crate::core::data::WindowConfig;
use crate::core::errors::WindowError;
use crate::core::events::{Event, EventQueue, EventType};
use crate::core::input::{
    Action, ButtonCode, InputHandler, InputListener, button_name, name_to_button_codes,
};
use crate::core::pacing::{Clock, FpsCounter, FramePacer, SystemClock};

/// Owns a native window and drives the per-frame lifecycle around it:
/// present, input polling, frame pacing and cursor arbitration.
///
/// Callers run their own loop:
///
/// ```ignore
/// while window.is_running() {
///     for event in window.poll_events(EventType::Press)? { /* ... */ }
///     window.show()?;
/// }
/// ```
pub struct Window<P, R, G, C = SystemClock>
where
    P: PlatformPort,
    R: RenderBackendPort<Frame = G::Frame>,
    G: EmbeddedGuiPort<RawEvent = P::RawEvent>,
    C: Clock,
{
    config: WindowConfig,
    platform: P,
    backend: R,
    gui: G,
    input: InputHandler,
    events: Rc<RefCell<EventQueue>>,
    cursor: CursorArbiter,
    pacer: FramePacer<C>,
    fps: FpsCounter,
    drawn_frame: bool,
}

impl<P, R, G> Window<P, R, G>
where
    P: PlatformPort,
    R: RenderBackendPort<Frame = G::Frame>,
    G: EmbeddedGuiPort<RawEvent = P::RawEvent>,
{
    pub fn new(config: WindowConfig, platform: P, backend: R, gui: G) -> Result<Self, WindowError> {
        Self::with_clock(config, platform, backend, gui, SystemClock)
    }
}

impl<P, R, G, C> Window<P, R, G, C>
where
    P: PlatformPort,
    R: RenderBackendPort<Frame = G::Frame>,
    G: EmbeddedGuiPort<RawEvent = P::RawEvent>,
    C: Clock,
{
    /// Like `new`, with frame pacing and the FPS title driven by `clock`.
    pub fn with_clock(
        config: WindowConfig,
        platform: P,
        backend: R,
        gui: G,
        clock: C,
    ) -> Result<Self, WindowError> {
        config.validate()?;

        let events = Rc::new(RefCell::new(EventQueue::new()));
        let mut input = InputHandler::new();
        input.add_key_listener(queue_listener(Rc::clone(&events)));
        input.add_mouse_button_listener(queue_listener(Rc::clone(&events)));

        let mut window = Self {
            config,
            platform,
            backend,
            gui,
            input,
            events,
            cursor: CursorArbiter::new(),
            fps: FpsCounter::new(clock.now()),
            pacer: FramePacer::with_clock(clock),
            drawn_frame: false,
        };

        if window.config.show_window {
            window.resize()?;
        }
        window.prepare_for_next_frame();

        Ok(window)
    }

    /// Presents the current frame and advances to the next one.
    ///
    /// Draws an empty frame first if nothing was drawn this tick.
    pub fn show(&mut self) -> Result<(), WindowError> {
        self.require_visible("show")?;

        if !self.drawn_frame {
            self.draw_frame()?;
        }

        if let Err(err) = self.backend.present() {
            error!("present failed: {err}");
            return Err(err.into());
        }

        self.pump_platform_events()?;
        self.pacer.pace(self.config.fps_limit);

        if let Some(fps) = self.fps.tick(self.pacer.clock().now()) {
            let title = format!("{}  {:.2} FPS", self.config.name, fps);
            self.platform.set_title(&title);
        }

        // Decided from last frame's arbitration, before the GUI's own update.
        self.gui
            .set_cursor_changes_suppressed(self.cursor.gui_cursor_suppressed());
        self.prepare_for_next_frame();

        let signal = GuiCursorSignal {
            desired: self.gui.desired_cursor(),
            wants_mouse_capture: self.gui.wants_mouse_capture(),
        };
        let previous = self.cursor.applied();
        let applied = self.cursor.arbitrate(signal, &mut self.platform);
        if applied == AppliedCursorState::GuiControlled && previous != applied {
            self.gui.reclaim_cursor();
        }

        Ok(())
    }

    /// Always true for a window without a visible surface.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.config.show_window || !self.platform.close_requested()
    }

    pub fn request_stop(&mut self, stop: bool) {
        if self.config.show_window {
            self.platform.set_close_requested(stop);
        }
    }

    /// Unknown names are never pressed.
    #[must_use]
    pub fn is_pressed(&self, name: &str) -> bool {
        match name_to_button_codes(name) {
            Ok(codes) => codes.into_iter().any(|code| self.input.is_pressed(code)),
            Err(err) => {
                trace!("Pressed: {err}.");
                false
            }
        }
    }

    #[must_use]
    pub fn is_any_pressed(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.is_pressed(name))
    }

    /// Cursor position in `[0, 1] x [0, 1]`, origin bottom-left.
    pub fn cursor_position(&self) -> Result<(f32, f32), WindowError> {
        self.require_visible("cursor_position")?;
        Ok((self.input.last_x(), 1.0 - self.input.last_y()))
    }

    /// Scroll accumulated since the previous call.
    pub fn take_scroll_delta(&mut self) -> Result<(f64, f64), WindowError> {
        self.require_visible("take_scroll_delta")?;
        Ok(self.input.take_scroll_delta())
    }

    pub fn poll_events(&mut self, filter: EventType) -> Result<Vec<Event>, WindowError> {
        self.require_visible("poll_events")?;
        self.pump_platform_events()?;
        Ok(self.events.borrow_mut().drain(filter))
    }

    /// Moves the first queued event matching `filter` into the current event slot.
    pub fn poll_one_event(&mut self, filter: EventType) -> Result<bool, WindowError> {
        self.require_visible("poll_one_event")?;
        self.pump_platform_events()?;
        Ok(self.events.borrow_mut().consume_one(filter))
    }

    pub fn current_event(&self) -> Result<Event, WindowError> {
        self.require_visible("current_event")?;
        Ok(self.events.borrow().current().clone())
    }

    pub fn set_current_event(&mut self, event: Event) -> Result<(), WindowError> {
        self.require_visible("set_current_event")?;
        self.events.borrow_mut().set_current(event);
        Ok(())
    }

    /// Requests a cursor: -2 leaves it to the GUI, -1 hides it, 0-9 picks a shape.
    /// Takes effect at the end of the next `show`.
    pub fn set_cursor(&mut self, shape: i32, force: bool) -> Result<(), WindowError> {
        self.require_visible("set_cursor")?;
        self.cursor.set_request(CursorRequest::from_index(shape, force)?);
        Ok(())
    }

    pub fn set_cursor_request(&mut self, request: CursorRequest) -> Result<(), WindowError> {
        self.require_visible("set_cursor")?;
        self.cursor.set_request(request);
        Ok(())
    }

    #[must_use]
    pub fn applied_cursor(&self) -> AppliedCursorState {
        self.cursor.applied()
    }

    pub fn gui_wants_mouse(&self) -> Result<bool, WindowError> {
        self.require_visible("gui_wants_mouse")?;
        Ok(self.gui.wants_mouse_capture())
    }

    pub fn gui_wants_keyboard(&self) -> Result<bool, WindowError> {
        self.require_visible("gui_wants_keyboard")?;
        Ok(self.gui.wants_keyboard_capture())
    }

    #[must_use]
    pub fn window_shape(&self) -> (u32, u32) {
        self.backend.size()
    }

    /// Renders the frame now instead of waiting for `show`.
    pub fn draw_frame(&mut self) -> Result<(), WindowError> {
        let frame = self.gui.end_frame();
        self.backend.draw(frame)?;
        self.drawn_frame = true;
        Ok(())
    }

    pub fn dump_image_buffer(&mut self) -> Result<ImageBuffer, WindowError> {
        self.ensure_drawn()?;
        let image = self.backend.dump_image_buffer()?;
        self.finish_offscreen_read();
        Ok(image)
    }

    pub fn write_image(&mut self, path: impl AsRef<Path>) -> Result<(), WindowError> {
        self.ensure_drawn()?;
        self.backend.write_image(path.as_ref())?;
        self.finish_offscreen_read();
        Ok(())
    }

    pub fn copy_depth_buffer_to(&mut self, target: &mut [f32]) -> Result<(), WindowError> {
        self.ensure_drawn()?;
        self.backend.copy_depth_buffer_to(target)?;
        self.finish_offscreen_read();
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn gui(&mut self) -> &mut G {
        &mut self.gui
    }

    #[must_use]
    pub fn backend(&self) -> &R {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut R {
        &mut self.backend
    }

    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    fn require_visible(&self, operation: &'static str) -> Result<(), WindowError> {
        if self.config.show_window {
            Ok(())
        } else {
            Err(WindowError::NoVisibleSurface { operation })
        }
    }

    fn ensure_drawn(&mut self) -> Result<(), WindowError> {
        if self.drawn_frame {
            return Ok(());
        }
        self.draw_frame()
    }

    // Without a visible surface nobody calls `show`, so reads close the frame themselves.
    fn finish_offscreen_read(&mut self) {
        if !self.config.show_window {
            self.prepare_for_next_frame();
        }
    }

    fn prepare_for_next_frame(&mut self) {
        self.backend.prepare_for_next_frame();
        self.gui.prepare_for_next_frame();
        self.drawn_frame = false;
    }

    fn pump_platform_events(&mut self) -> Result<(), WindowError> {
        let events = self.platform.poll_events();
        self.dispatch(events)
    }

    fn dispatch(&mut self, events: Vec<PlatformEvent<P::RawEvent>>) -> Result<(), WindowError> {
        for event in events {
            if let Some(raw) = &event.raw {
                self.gui.on_raw_event(raw);
            }

            match event.native {
                Some(NativeEvent::Key { code, action }) => self.input.key_callback(code, action),
                Some(NativeEvent::MouseButton { code, action }) => {
                    self.input.mouse_button_callback(code, action);
                }
                Some(NativeEvent::CursorMoved { x, y }) => {
                    self.input
                        .cursor_pos_callback(x, y, self.config.width, self.config.height);
                }
                Some(NativeEvent::Scroll { dx, dy }) => self.input.scroll_callback(dx, dy),
                Some(NativeEvent::FramebufferResized { width, height }) => {
                    trace!("framebuffer resized to {width}x{height}");
                    self.resize()?;
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Blocks until the framebuffer has a usable size, then propagates it.
    fn resize(&mut self) -> Result<(), WindowError> {
        let mut deferred = Vec::new();
        let (mut width, mut height) = self.platform.framebuffer_size();

        while width == 0 || height == 0 {
            debug!("framebuffer is {width}x{height}, waiting for a usable size");
            deferred.extend(self.platform.wait_events());
            (width, height) = self.platform.framebuffer_size();
        }

        self.backend.resize(width, height)?;
        // Cursor normalization reads these.
        self.config.width = width;
        self.config.height = height;

        if deferred.is_empty() {
            Ok(())
        } else {
            self.dispatch(deferred)
        }
    }
}

fn queue_listener(events: Rc<RefCell<EventQueue>>) -> impl InputListener {
    move |code: ButtonCode, action: Action| {
        let kind = match action {
            Action::Press => EventType::Press,
            Action::Release => EventType::Release,
            Action::Repeat => return,
        };
        events.borrow_mut().push_event(kind, button_name(code));
    }
}
