//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Skyline engine configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[display]
# width = 800            # 1-16384
# height = 600           # 1-16384

[editor]
# active = false
# worldmap_mode = false  # requires active = true

[run]
# frames = 3
# frame_time = 0.016667  # seconds, 0.0-1.0
# camera_speed = 32.0    # pixels per frame

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
