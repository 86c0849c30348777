//! Desktop client settings

use std::path::PathBuf;

/// Window, font and controller settings for the desktop client
#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: String,
    pub fullscreen: bool,
    pub font_path: PathBuf,
    pub font_size: f32, // pixels
    pub mapping_path: PathBuf,
    pub required_controllers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "PONG".to_string(),
            fullscreen: true,
            font_path: PathBuf::from("Cantarell-Bold.ttf"),
            font_size: 72.0,
            mapping_path: PathBuf::from("gamecontrollerdb.txt"),
            required_controllers: 2,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::new();
        assert_eq!(settings.window_title, "PONG");
        assert!(settings.fullscreen);
        assert_eq!(settings.font_path, PathBuf::from("Cantarell-Bold.ttf"));
        assert_eq!(settings.font_size, 72.0);
        assert_eq!(settings.mapping_path, PathBuf::from("gamecontrollerdb.txt"));
        assert_eq!(settings.required_controllers, 2);
    }
}
