// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed (fatal, nothing is on screen yet).
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// A command-line value can't describe a usable starfield.
    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure_site() {
        assert_eq!(
            Error::WindowInit("no display".into()).to_string(),
            "Window init error: no display"
        );
        assert_eq!(
            Error::Config("width must be > 0".into()).to_string(),
            "Config error: width must be > 0"
        );
    }
}
