//! Session and theme commands.

use canopy_client::SessionStore;
use tracing::info;

use super::CommandError;

/// Show the session ID and where it is stored.
pub fn show(session: &SessionStore) -> Result<(), CommandError> {
    let id = session.session_id()?;
    info!("Session: {id}");
    info!("Storage: {}", session.path().display());
    Ok(())
}

/// Forget the session. The next command mints a fresh one, which also
/// means a fresh, empty cart.
pub fn reset(session: &SessionStore) -> Result<(), CommandError> {
    session.reset_session()?;
    info!("Session reset.");
    Ok(())
}

/// Show the persisted theme.
pub fn theme_show(session: &SessionStore) -> Result<(), CommandError> {
    match session.theme()? {
        Some(theme) => info!("Theme: {theme}"),
        None => info!("No theme set."),
    }
    Ok(())
}

/// Persist a theme.
pub fn theme_set(session: &SessionStore, theme: &str) -> Result<(), CommandError> {
    session.set_theme(theme)?;
    info!("Theme set to {theme}.");
    Ok(())
}
