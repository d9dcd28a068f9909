use thiserror::Error;

/// Hard ceiling on accepted uploads, checked before any decoding starts.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("File size should be less than 10MB")]
    TooLarge { size: u64 },
    #[error("Failed to read image: {0}")]
    Decode(String),
}

/// Rejecting an upload must leave whatever was published before untouched;
/// callers surface the error and keep their state as-is.
pub fn check_upload_size(size: u64) -> Result<(), IntakeError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(IntakeError::TooLarge { size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_files_up_to_the_limit() {
        assert_eq!(check_upload_size(0), Ok(()));
        assert_eq!(check_upload_size(2 * 1024 * 1024), Ok(()));
        assert_eq!(check_upload_size(MAX_UPLOAD_BYTES), Ok(()));
    }

    #[test]
    fn rejects_anything_over_the_limit() {
        let size = MAX_UPLOAD_BYTES + 1;
        assert_eq!(check_upload_size(size), Err(IntakeError::TooLarge { size }));

        let size = 15 * 1024 * 1024;
        assert_eq!(check_upload_size(size), Err(IntakeError::TooLarge { size }));
    }

    #[test]
    fn oversize_error_displays_the_user_facing_message() {
        let err = check_upload_size(MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err.to_string(), "File size should be less than 10MB");
    }
}
