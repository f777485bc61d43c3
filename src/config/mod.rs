use serde::Deserialize;
use std::path::PathBuf;

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}
fn default_segments() -> u32 {
    20
}
fn default_max_files() -> usize {
    100
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML config file, merged under CLI flags
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Directory where generated STL files and the index are stored
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// Default tessellation resolution for cylinder and sphere
    #[serde(default = "default_segments")]
    pub segments: u32,
    /// Keep at most this many generated files in the export directory
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            segments: default_segments(),
            max_files: default_max_files(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("modelo3d.toml"));
    paths.push(PathBuf::from(".modelo3d.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("modelo3d").join("config.toml"));
        paths.push(config_dir.join("modelo3d.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".modelo3d.toml"));
        paths.push(home.join(".config").join("modelo3d").join("config.toml"));
    }

    paths
}
