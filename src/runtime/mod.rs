use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use serde_json::json;

use crate::component::Component;
use crate::error::Result;
use crate::layout::{LayoutEngine, apply_flex_adjustments};
use crate::logging::{FileSink, LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::RuntimeMetrics;
use crate::render::{FrameRenderer, RenderContext, compose_frame, render_tree};
use crate::statics::StaticBuffer;

mod driver;

pub use driver::{CliDriver, CliDriverError, DriverResult};

/// Configuration knobs for the runtime loop.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Interval between synthetic tick events.
    pub tick_interval: Duration,
    /// Optional structured logger used by the runtime.
    pub logger: Option<Logger>,
    /// Metrics accumulator used for periodic snapshots.
    pub metrics: Option<Arc<Mutex<RuntimeMetrics>>>,
    /// Interval between metrics snapshot emissions. Zero disables snapshots.
    pub metrics_interval: Duration,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
    /// Run the alignment/justification post-pass after each layout.
    pub apply_adjustments: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            logger: None,
            metrics: None,
            metrics_interval: Duration::from_secs(5),
            metrics_target: "weft::runtime.metrics".to_string(),
            apply_adjustments: false,
        }
    }
}

impl RuntimeConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(RuntimeMetrics::new())));
        }
    }

    /// Disable metrics collection and prevent further snapshots.
    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<RuntimeMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    /// Install a JSON-lines file logger, rotating at `max_bytes`.
    pub fn log_to_file(&mut self, path: impl AsRef<Path>, max_bytes: u64) -> Result<()> {
        let sink = FileSink::new(path, max_bytes)?;
        self.logger = Some(Logger::new(sink));
        Ok(())
    }
}

/// High-level events delivered to the update handler.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    Tick { elapsed: Duration },
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    FocusGained,
    FocusLost,
    Resize { width: u16, height: u16 },
    Raw(CrosstermEvent),
}

/// Control the propagation of an event past the update handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    Consumed,
}

/// Requests an update handler can make against the runtime.
#[derive(Debug, Default)]
pub struct RuntimeContext {
    exit_requested: bool,
}

impl RuntimeContext {
    /// Signal that execution should terminate at the end of the frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

type UpdateHandler = dyn FnMut(&RuntimeEvent, &mut RuntimeContext) -> EventFlow;
type RootFn = dyn Fn() -> Component;

/// Drives a root component function through the frame loop: rebuild the
/// tree, lay it out, render, repeat on every event or tick.
pub struct AppRuntime {
    root: Box<RootFn>,
    engine: LayoutEngine,
    statics: StaticBuffer,
    renderer: FrameRenderer,
    update: Option<Box<UpdateHandler>>,
    config: RuntimeConfig,
    should_exit: bool,
    redraw_requested: bool,
    start_instant: Option<Instant>,
    last_metrics_emit: Option<Instant>,
}

impl AppRuntime {
    /// Create a runtime for `root`, sized to a conventional 80x24 terminal
    /// until the first resize arrives.
    pub fn new(root: impl Fn() -> Component + 'static) -> Self {
        Self {
            root: Box::new(root),
            engine: LayoutEngine::new(80, 24),
            statics: StaticBuffer::new(),
            renderer: FrameRenderer::new(),
            update: None,
            config: RuntimeConfig::default(),
            should_exit: false,
            redraw_requested: true,
            start_instant: None,
            last_metrics_emit: None,
        }
    }

    /// Install an update handler that sees every event before the runtime's
    /// default handling.
    pub fn with_update(
        mut self,
        update: impl FnMut(&RuntimeEvent, &mut RuntimeContext) -> EventFlow + 'static,
    ) -> Self {
        self.update = Some(Box::new(update));
        self
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    /// Rebuild the layout engine for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.engine = LayoutEngine::new(i32::from(width), i32::from(height));
        self.renderer.invalidate();
        self.redraw_requested = true;
        self.log_runtime_event(
            LogLevel::Info,
            "resized",
            [
                json_kv("width", json!(width)),
                json_kv("height", json!(height)),
            ],
        );
    }

    /// Run against the live terminal until exit is requested.
    pub fn run(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.bootstrap(stdout)?;
        let mut last_tick = Instant::now();

        while !self.should_exit {
            let timeout = self
                .config
                .tick_interval
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(0));

            if event::poll(timeout)? {
                let crossterm_event = event::read()?;
                let runtime_event = self.map_event(crossterm_event);
                self.dispatch_event(runtime_event);
                self.render_if_needed(stdout)?;
                if self.should_exit {
                    break;
                }
            }

            if last_tick.elapsed() >= self.config.tick_interval {
                let now = Instant::now();
                let elapsed = now.duration_since(last_tick);
                last_tick = now;
                self.dispatch_event(RuntimeEvent::Tick { elapsed });
                self.render_if_needed(stdout)?;
            }

            self.maybe_emit_metrics();
        }

        self.finalize();
        Ok(())
    }

    /// Replay a fixed sequence of events; used by tests and benches.
    pub fn run_scripted<I>(&mut self, stdout: &mut impl Write, events: I) -> Result<()>
    where
        I: IntoIterator<Item = RuntimeEvent>,
    {
        self.bootstrap(stdout)?;
        for event in events.into_iter() {
            if let RuntimeEvent::Resize { width, height } = &event {
                self.resize(*width, *height);
            }
            self.dispatch_event(event);
            self.render_if_needed(stdout)?;
            if self.should_exit {
                break;
            }
        }
        self.finalize();
        Ok(())
    }

    fn dispatch_event(&mut self, event: RuntimeEvent) {
        let mut ctx = RuntimeContext::default();
        let flow = match self.update.as_mut() {
            Some(update) => update(&event, &mut ctx),
            None => EventFlow::Continue,
        };

        if flow == EventFlow::Continue {
            if let RuntimeEvent::Key(key) = &event {
                if is_ctrl_c(key) {
                    ctx.request_exit();
                }
            }
        }

        if ctx.exit_requested {
            self.should_exit = true;
            self.log_runtime_event(LogLevel::Info, "exit_requested", std::iter::empty());
        }

        // The root function may read state the handler just changed, so any
        // event invalidates the frame; the frame hash dedupes actual writes.
        self.redraw_requested = true;

        self.record_event_metric();
        self.log_runtime_event(
            LogLevel::Debug,
            "event_dispatched",
            [
                json_kv("event", json!(Self::describe_event(&event))),
                json_kv("consumed", json!(flow == EventFlow::Consumed)),
            ],
        );
        self.maybe_emit_metrics();
    }

    fn render_if_needed(&mut self, stdout: &mut impl Write) -> Result<()> {
        if !self.redraw_requested {
            return Ok(());
        }
        self.redraw_requested = false;

        let root = (self.root)();
        let mut tree = self.engine.calculate_layout(&root);
        if self.config.apply_adjustments {
            apply_flex_adjustments(&mut tree);
        }
        self.record_layout_metric(tree.node_count());

        let lines_before = self.statics.line_count();
        let dynamic_content = {
            let mut ctx = RenderContext::new(&mut self.statics);
            render_tree(&tree, &mut ctx)
        };
        self.record_static_lines_metric(self.statics.line_count() - lines_before);

        let frame = compose_frame(&self.statics.render(), &dynamic_content);
        if self.renderer.draw(stdout, &frame)? {
            self.record_frame_metric();
            self.log_runtime_event(
                LogLevel::Debug,
                "frame_rendered",
                [json_kv("lines", json!(frame.split('\n').count()))],
            );
        }

        Ok(())
    }

    fn map_event(&mut self, event: CrosstermEvent) -> RuntimeEvent {
        match event {
            CrosstermEvent::Key(key) => RuntimeEvent::Key(key),
            CrosstermEvent::Mouse(mouse) => RuntimeEvent::Mouse(mouse),
            CrosstermEvent::Paste(data) => RuntimeEvent::Paste(data),
            CrosstermEvent::FocusGained => RuntimeEvent::FocusGained,
            CrosstermEvent::FocusLost => RuntimeEvent::FocusLost,
            CrosstermEvent::Resize(width, height) => {
                self.resize(width, height);
                RuntimeEvent::Resize { width, height }
            }
        }
    }

    fn bootstrap(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.should_exit = false;
        self.redraw_requested = true;
        self.ensure_metrics_initialized();
        let now = Instant::now();
        self.start_instant = Some(now);
        self.last_metrics_emit = Some(now);
        self.log_runtime_event(
            LogLevel::Info,
            "runtime_started",
            [json_kv("has_update", json!(self.update.is_some()))],
        );
        self.render_if_needed(stdout)
    }

    fn finalize(&mut self) {
        let uptime_ms = self
            .start_instant
            .map(|start| start.elapsed().as_millis())
            .unwrap_or(0);
        self.log_runtime_event(
            LogLevel::Info,
            "runtime_stopped",
            [json_kv("uptime_ms", json!(uptime_ms))],
        );
    }

    fn ensure_metrics_initialized(&mut self) {
        if self.config.metrics.is_none() && self.config.metrics_interval > Duration::from_millis(0)
        {
            self.config.metrics = Some(Arc::new(Mutex::new(RuntimeMetrics::new())));
        }
    }

    fn log_runtime_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, "weft::runtime", message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_event_metric(&mut self) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_event();
            }
        }
    }

    fn record_frame_metric(&mut self) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_frame();
            }
        }
    }

    fn record_layout_metric(&mut self, node_count: usize) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_layout(node_count);
            }
        }
    }

    fn record_static_lines_metric(&mut self, count: usize) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_static_lines(count);
            }
        }
    }

    fn maybe_emit_metrics(&mut self) {
        if self.config.metrics.is_none() {
            return;
        }

        if self.config.metrics_interval == Duration::from_millis(0) {
            return;
        }

        let now = Instant::now();
        match self.last_metrics_emit {
            Some(last) if now.duration_since(last) < self.config.metrics_interval => {
                return;
            }
            _ => {
                self.last_metrics_emit = Some(now);
            }
        }

        let uptime = self
            .start_instant
            .map(|start| now.duration_since(start))
            .unwrap_or_default();

        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let target = self.config.metrics_target.as_str();
                let snapshot_event = guard.snapshot(uptime).to_log_event(target);
                let _ = logger.log_event(snapshot_event);
            }
        }
    }

    fn describe_event(event: &RuntimeEvent) -> &'static str {
        match event {
            RuntimeEvent::Tick { .. } => "tick",
            RuntimeEvent::Key(_) => "key",
            RuntimeEvent::Mouse(_) => "mouse",
            RuntimeEvent::Paste(_) => "paste",
            RuntimeEvent::FocusGained => "focus_gained",
            RuntimeEvent::FocusLost => "focus_lost",
            RuntimeEvent::Resize { .. } => "resize",
            RuntimeEvent::Raw(_) => "raw",
        }
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
