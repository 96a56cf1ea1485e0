use super::{types::Config, ConfigError};

/// Largest ticket count whose serials fit the four-digit padding.
pub const SERIAL_WIDTH_MAX: u32 = 9999;

/// Upper bound for `render.box_size`, in pixels.
pub const BOX_SIZE_MAX: u32 = 1000;

/// Upper bound for `render.border`, in modules.
pub const BORDER_MAX: u32 = 1000;

/// Validate configuration
/// Currently validates:
/// - Ticket count is not 0
/// - Box size and progress interval are not 0
/// - Box size and border stay within `BOX_SIZE_MAX` / `BORDER_MAX`
/// - CSV path and output directory are not empty
///
/// Counts above `SERIAL_WIDTH_MAX` are accepted; serials then grow past
/// four digits.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.tickets.total_count == 0 {
        return Err(ConfigError::ValidationError(
            "tickets.total_count cannot be 0".to_string(),
        ));
    }

    if config.tickets.total_count > SERIAL_WIDTH_MAX {
        tracing::warn!(
            "tickets.total_count = {} exceeds {}, serial numbers will be wider than 4 digits",
            config.tickets.total_count,
            SERIAL_WIDTH_MAX
        );
    }

    if config.render.box_size == 0 {
        return Err(ConfigError::ValidationError(
            "render.box_size cannot be 0".to_string(),
        ));
    }

    if config.render.box_size > BOX_SIZE_MAX {
        return Err(ConfigError::ValidationError(format!(
            "render.box_size cannot exceed {}",
            BOX_SIZE_MAX
        )));
    }

    if config.render.border > BORDER_MAX {
        return Err(ConfigError::ValidationError(format!(
            "render.border cannot exceed {}",
            BORDER_MAX
        )));
    }

    if config.render.progress_interval == 0 {
        return Err(ConfigError::ValidationError(
            "render.progress_interval cannot be 0".to_string(),
        ));
    }

    if config.paths.csv_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "paths.csv_path cannot be empty".to_string(),
        ));
    }

    if config.paths.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "paths.output_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
