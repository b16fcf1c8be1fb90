/// Events are queued by UI components and applied once per frame, so that
/// components never have to borrow the whole application mutably.
///
/// An event that returns `Ok` has changed the application and is discarded.
pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<(), String>;
}
