//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Oriel Configuration
# Only override what you want to change; missing fields use defaults.

# Seconds the engine waits for a browser to connect when a window is first
# shown. 0 waits forever.
# startup_timeout_secs = 30

# Browser to launch windows with: any, chrome, firefox, edge, safari,
# chromium, opera, brave, vivaldi, epic, yandex
# browser = "any"

[script]
# Seconds to wait for a script result. 0 waits forever.
# timeout_secs = 0
# Response buffer size in bytes. 0 uses the built-in 8 KiB default.
# buffer_capacity = 0

[window]
# Allow more than one browser client to attach to a window.
# multi_access = false
# Runtime for server-side .js / .ts files: none, deno, nodejs
# runtime = "none"
"##
    .to_string()
}
