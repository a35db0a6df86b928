//! Terminal setup and restoration

/// Install a panic hook that restores the terminal
///
/// The panic is also written to the log file, since the message printed by
/// the default hook is easily lost when the alternate screen closes.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("Panic: {}", panic_info);
        ratatui::restore();
        original_hook(panic_info);
    }));
}
