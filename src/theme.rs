use std::fmt;

use eframe::egui;

// ---------------------------------------------------------------------------
// ThemeMode – the two-valued display mode
// ---------------------------------------------------------------------------

/// Active display mode. Starts light; flips indefinitely, no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Label for the toggle button: names the mode a click switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙 Dark",
            ThemeMode::Dark => "☀ Light",
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeState – mode + observers
// ---------------------------------------------------------------------------

type Listener = Box<dyn FnMut(ThemeMode)>;

/// Theme state owned by the application and passed explicitly to whoever
/// needs it; there is no process-wide singleton.
///
/// Initialisation is two-phase: construction yields the default state
/// (`Light`, no observers); a setup collaborator then binds behaviour by
/// subscribing listeners, e.g. the egui visuals applier. Mutation is
/// single-threaded and event-driven (UI interaction), so no locking.
pub struct ThemeState {
    mode: ThemeMode,
    listeners: Vec<Listener>,
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Phase one: default state, light mode, nothing bound yet.
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::Light,
            listeners: Vec::new(),
        }
    }

    /// The current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Replace the current mode and notify every observer.
    /// Any value is accepted; no validation is performed.
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        for listener in &mut self.listeners {
            listener(mode);
        }
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.set(self.mode.flipped());
    }

    /// Phase two: bind an observer that is called with the new mode on every
    /// change. Observers registered here persist for the life of the state.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

// ---------------------------------------------------------------------------
// egui binding
// ---------------------------------------------------------------------------

/// Apply a mode to the egui context. Registered as the observer during app
/// setup and also called once for the initial mode.
pub fn apply_visuals(ctx: &egui::Context, mode: ThemeMode) {
    let visuals = match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_light_before_any_setup() {
        let theme = ThemeState::new();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut theme = ThemeState::new();
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn set_accepts_any_mode() {
        let mut theme = ThemeState::new();
        theme.set(ThemeMode::Dark);
        assert!(theme.mode().is_dark());
        theme.set(ThemeMode::Dark);
        assert!(theme.mode().is_dark());
    }

    #[test]
    fn observers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut theme = ThemeState::new();

        let sink = Rc::clone(&seen);
        theme.subscribe(move |mode| sink.borrow_mut().push(mode));

        theme.toggle();
        theme.toggle();
        theme.set(ThemeMode::Dark);

        assert_eq!(
            *seen.borrow(),
            vec![ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark]
        );
    }
}
