// config module - startup settings for the viewer window
use super::shades::ShadeColor;

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub editor_font_size: f32,
    pub default_shade_color: ShadeColor,
    /// (filter name, extensions) offered by the open dialog, in order
    pub file_filters: Vec<(&'static str, Vec<&'static str>)>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: [800.0, 600.0],
            min_window_size: [480.0, 320.0],
            editor_font_size: 14.0,
            default_shade_color: ShadeColor::YELLOW,
            file_filters: vec![
                ("Text files", vec!["txt", "log"]),
                ("All files", vec!["*"]),
            ],
        }
    }
}
