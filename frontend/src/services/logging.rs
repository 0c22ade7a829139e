use gloo::console;

/// Component-tagged console logging.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        console::debug!(Self::tag(component), message.to_string());
    }

    pub fn info(component: &str, message: &str) {
        console::info!(Self::tag(component), message.to_string());
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(Self::tag(component), message.to_string());
    }

    pub fn error(component: &str, message: &str) {
        console::error!(Self::tag(component), message.to_string());
    }

    fn tag(component: &str) -> String {
        format!("[{}]", component)
    }
}
