pub type FlovizResult<T> = Result<T, FlovizError>;

#[derive(thiserror::Error, Debug)]
pub enum FlovizError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error: bad magic tag 0x{0:08x} (expected 0x48454950 \"PIEH\")")]
    BadTag(u32),

    #[error("format error: truncated payload (expected {expected} bytes, got {actual})")]
    Truncated { expected: usize, actual: usize },

    #[error("format error: {0}")]
    Format(String),
}

impl FlovizError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            FlovizError::BadTag(0xdead_beef)
                .to_string()
                .contains("bad magic tag 0xdeadbeef")
        );
        assert!(
            FlovizError::Truncated {
                expected: 800,
                actual: 400
            }
            .to_string()
            .contains("expected 800 bytes, got 400")
        );
        assert!(
            FlovizError::format("x")
                .to_string()
                .contains("format error:")
        );
    }

    #[test]
    fn io_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = FlovizError::Io(base);
        assert!(err.to_string().contains("boom"));
    }
}
