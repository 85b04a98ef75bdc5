//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Game Hub Configuration
# Only override what you want to change -- missing fields use defaults.

[service]
# base_url = "http://127.0.0.1:2301"
# connect_timeout_ms = 2000    # 100-60000
# request_timeout_ms = 10000   # 100-120000

[launcher]
# decoy_enabled = true
# decoy_game = 1
# decoy_delay_ms = 3000        # 0-60000

[[launcher.games]]
id = 0
name = "Traffic Rush"

[[launcher.games]]
id = 1
name = "Tilt Master"

[assistant]
# tilt_master_game = 1
# welcome_ms = 8000            # 0-60000
# tilt_tick_ms = 40            # 10-1000
# bounce_tick_ms = 50          # 10-1000
# eye_tick_ms = 50             # 10-1000
# wave_tick_ms = 100           # 10-1000

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
