/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async lift pass client. Dispatches every store access to the
    /// blocking thread pool and serializes it behind one lock.
    pub pass: lift_pass::AsyncLiftPass,
}
