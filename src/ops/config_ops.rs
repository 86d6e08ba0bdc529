use crate::model::{Config, ConfigError, ConfigField};

use super::position;

/// Field under a 1-based index
pub fn field_at(config: &Config, index: i64) -> Result<&ConfigField, ConfigError> {
    position(index, config.len())
        .and_then(|pos| config.field(pos))
        .ok_or(ConfigError::NotFound(index))
}

/// Set the field under a 1-based index. An out-of-range index and an illegal
/// value are reported separately; neither changes the config.
pub fn set_at<'a>(
    config: &'a mut Config,
    index: i64,
    value: &str,
) -> Result<&'a ConfigField, ConfigError> {
    let field = position(index, config.len())
        .and_then(|pos| config.field_mut(pos))
        .ok_or(ConfigError::NotFound(index))?;
    field.assign(value)?;
    Ok(&*field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DoneTaskDisplay, PRINT_DONE_TASKS};

    #[test]
    fn set_at_updates_exactly_to_value() {
        let mut config = Config::default();
        let field = set_at(&mut config, 1, "no").unwrap();
        assert_eq!(field.value(), "no");
        assert_eq!(config.done_task_display(), DoneTaskDisplay::No);
    }

    #[test]
    fn set_at_illegal_value() {
        let mut config = Config::default();
        let err = set_at(&mut config, 1, "maybe").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(config.get(PRINT_DONE_TASKS), Some("hidden"));
    }

    #[test]
    fn set_at_out_of_range() {
        let mut config = Config::default();
        assert_eq!(set_at(&mut config, 0, "yes"), Err(ConfigError::NotFound(0)));
        assert_eq!(set_at(&mut config, 4, "yes"), Err(ConfigError::NotFound(4)));
        assert_eq!(set_at(&mut config, -1, "yes"), Err(ConfigError::NotFound(-1)));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn field_at_lookup() {
        let config = Config::default();
        assert_eq!(field_at(&config, 3).unwrap().description, "Show list progress");
        assert_eq!(field_at(&config, 9), Err(ConfigError::NotFound(9)));
    }
}
