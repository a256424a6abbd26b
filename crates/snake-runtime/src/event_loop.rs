use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Render after every state change (tick or crossterm event).
    #[default]
    OnDirty,
    /// Render after state changes, but at most once per interval.
    ///
    /// Changes arriving faster than the interval are folded into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Event source with a single one-shot tick timer.
///
/// A tick fires once when its deadline passes and then disarms itself. The
/// application has to call [`EventLoop::schedule_tick`] again to get another
/// one, so a slow tick pushes every later tick back and missed ticks are
/// never replayed.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_deadline: Option<Instant>,
    render_mode: RenderMode,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates an `EventLoop` with no tick armed and `OnDirty` rendering.
    pub fn new() -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_deadline: None,
            render_mode: RenderMode::default(),
            last_render: past_time,
            dirty: true, // Initial render is required on startup
        }
    }

    /// Arms the tick timer to fire `delay` after `now`, replacing any armed tick.
    pub(super) fn schedule_tick_at(&mut self, now: Instant, delay: Duration) {
        self.tick_deadline = Some(now + delay);
    }

    pub(super) fn schedule_tick(&mut self, delay: Duration) {
        self.schedule_tick_at(Instant::now(), delay);
    }

    pub(super) fn cancel_tick(&mut self) {
        self.tick_deadline = None;
    }

    pub(super) fn is_tick_armed(&self) -> bool {
        self.tick_deadline.is_some()
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Returns the next event.
    ///
    /// Blocks until the tick deadline or a render time is reached, or a
    /// crossterm event arrives. With no tick armed and nothing to render,
    /// only waits for crossterm events.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(event) = self.due_event(now) {
                return Ok(event);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// Returns the timer-driven event due at `now`, if any.
    ///
    /// Ticks take priority over renders; a fired tick disarms the timer.
    fn due_event(&mut self, now: Instant) -> Option<TuiEvent> {
        if let Some(deadline) = self.tick_deadline
            && now >= deadline
        {
            self.tick_deadline = None;
            self.dirty = true;
            return Some(TuiEvent::Tick);
        }

        let do_render = match self.render_mode {
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => {
                self.dirty && now.duration_since(self.last_render) >= interval
            }
        };
        if do_render {
            self.last_render = now;
            self.dirty = false;
            return Some(TuiEvent::Render);
        }
        None
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_render_at = match self.render_mode {
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| self.last_render + interval),
        };
        let next_timeout_at = [self.tick_deadline, next_render_at]
            .into_iter()
            .flatten()
            .min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(75);

    /// Event loop that has already performed its initial render.
    fn rendered_loop(now: Instant) -> EventLoop {
        let mut events = EventLoop::new();
        assert!(events.due_event(now).is_some_and(|e| e.is_render()));
        events
    }

    #[test]
    fn test_initial_render() {
        let now = Instant::now();
        let mut events = EventLoop::new();
        assert!(events.due_event(now).is_some_and(|e| e.is_render()));
        assert!(events.due_event(now).is_none());
    }

    #[test]
    fn test_tick_fires_once_after_delay() {
        let now = Instant::now();
        let mut events = rendered_loop(now);
        events.schedule_tick_at(now, DELAY);

        assert!(events.due_event(now + DELAY / 2).is_none());
        assert!(events.due_event(now + DELAY).is_some_and(|e| e.is_tick()));
        assert!(!events.is_tick_armed());

        // Nothing else fires until the app re-arms, however late it is.
        assert!(events.due_event(now + DELAY).is_some_and(|e| e.is_render()));
        assert!(events.due_event(now + DELAY * 10).is_none());
    }

    #[test]
    fn test_rescheduling_is_relative_to_call_time() {
        let now = Instant::now();
        let mut events = rendered_loop(now);
        events.schedule_tick_at(now, DELAY);
        assert!(events.due_event(now + DELAY).is_some_and(|e| e.is_tick()));

        // A tick that took 40ms to process re-arms at its end.
        let tick_done = now + DELAY + Duration::from_millis(40);
        events.schedule_tick_at(tick_done, DELAY);
        let _render = events.due_event(tick_done);
        assert!(events.due_event(now + DELAY * 2).is_none());
        assert!(events.due_event(tick_done + DELAY).is_some_and(|e| e.is_tick()));
    }

    #[test]
    fn test_schedule_replaces_pending_tick() {
        let now = Instant::now();
        let mut events = rendered_loop(now);
        events.schedule_tick_at(now, DELAY);
        events.schedule_tick_at(now + DELAY / 2, DELAY);

        assert!(events.due_event(now + DELAY).is_none());
        assert!(
            events
                .due_event(now + DELAY / 2 + DELAY)
                .is_some_and(|e| e.is_tick())
        );
    }

    #[test]
    fn test_cancel_disarms() {
        let now = Instant::now();
        let mut events = rendered_loop(now);
        events.schedule_tick_at(now, DELAY);
        events.cancel_tick();
        assert!(!events.is_tick_armed());
        assert!(events.due_event(now + DELAY * 2).is_none());
        assert_eq!(events.compute_timeout(now), None);
    }

    #[test]
    fn test_timeout_targets_tick_deadline() {
        let now = Instant::now();
        let mut events = rendered_loop(now);
        events.schedule_tick_at(now, DELAY);
        assert_eq!(events.compute_timeout(now), Some(DELAY));
    }

    #[test]
    fn test_throttled_render_waits_for_interval() {
        let now = Instant::now();
        let mut events = EventLoop::new();
        events.set_render_mode(RenderMode::Throttled(Duration::from_millis(100)));
        assert!(events.due_event(now).is_some_and(|e| e.is_render()));

        events.dirty = true;
        assert!(events.due_event(now + Duration::from_millis(50)).is_none());
        assert!(
            events
                .due_event(now + Duration::from_millis(100))
                .is_some_and(|e| e.is_render())
        );
    }
}
