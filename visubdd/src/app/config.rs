use app_core::string_error::ErrorStringExt;
use shape_layout::DEFAULT_SPACING;
use std::{io::Read, path::PathBuf};

const CONFIG_FILE: &str = ".visubdd";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub spacing: u32,
    pub combine_colors: bool,
    /// Horizontal space of the main window not available to the chart.
    pub canvas_margin: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 600.0,
            window_height: 500.0,
            spacing: DEFAULT_SPACING,
            combine_colors: false,
            canvas_margin: 35,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(CONFIG_FILE));
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    /// Parse `key=value` lines. Unknown keys are ignored, values that do not
    /// parse keep their default.
    pub fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.trim_start().starts_with('#') {
                continue;
            }
            let mut iter = line.splitn(2, '=').map(str::trim);
            let key = iter.next();
            let val = iter.next();
            match (key, val) {
                (Some("window_width"), Some(width_str)) => {
                    if let Ok(width) = width_str.parse::<f32>() {
                        config.window_width = width;
                    } else {
                        log::warn!("could not parse 'window_width' as number")
                    }
                }
                (Some("window_height"), Some(height_str)) => {
                    if let Ok(height) = height_str.parse::<f32>() {
                        config.window_height = height;
                    } else {
                        log::warn!("could not parse 'window_height' as number")
                    }
                }
                (Some("spacing"), Some(spacing_str)) => match spacing_str.parse::<u32>() {
                    Ok(spacing) if spacing > 0 => config.spacing = spacing,
                    _ => log::warn!("'spacing' has to be a positive integer"),
                },
                (Some("combine_colors"), Some(flag_str)) => {
                    if let Ok(flag) = flag_str.parse::<bool>() {
                        config.combine_colors = flag;
                    } else {
                        log::warn!("could not parse 'combine_colors' as true/false")
                    }
                }
                (Some("canvas_margin"), Some(margin_str)) => {
                    if let Ok(margin) = margin_str.parse::<u32>() {
                        config.canvas_margin = margin;
                    } else {
                        log::warn!("could not parse 'canvas_margin' as number")
                    }
                }
                _ => continue,
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_file() {
        // Depends on the home directory of whoever runs the tests, so we only
        // make sure this does not panic.
        #[allow(unused)]
        let res = Config::from_config_file();
        dbg!(res);
    }

    #[test]
    fn test_parse_values() {
        let raw = "window_width=800\nwindow_height = 700.5\nspacing=3\ncombine_colors=true\ncanvas_margin=10";
        let config = Config::parse(raw);
        assert_eq!(
            config,
            Config {
                window_width: 800.0,
                window_height: 700.5,
                spacing: 3,
                combine_colors: true,
                canvas_margin: 10,
            }
        );
    }

    #[test]
    fn test_parse_skips_comments_and_bad_values() {
        let raw = "# spacing=3\nspacing=0\nwindow_width=wide\nunknown=1\nno equal sign\n";
        assert_eq!(Config::parse(raw), Config::default());
    }
}
