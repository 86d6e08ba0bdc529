pub mod config_ops;
pub mod list_ops;
pub mod task_ops;

/// Translate a user-facing 1-based index into a 0-based position within
/// `len` items. Anything below 1 or past the end has no position.
pub fn position(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .filter(|&pos| pos < len)
}

#[cfg(test)]
mod tests {
    use super::position;

    #[test]
    fn position_translation() {
        assert_eq!(position(1, 3), Some(0));
        assert_eq!(position(3, 3), Some(2));
        assert_eq!(position(4, 3), None);
        assert_eq!(position(0, 3), None);
        assert_eq!(position(-1, 3), None);
        assert_eq!(position(1, 0), None);
        assert_eq!(position(i64::MAX, 3), None);
    }
}
