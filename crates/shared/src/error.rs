use thiserror::Error;

/// Errors surfaced at the binary seam. Library crates carry their own
/// error enums; this one covers bootstrap and transport setup.
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("io error")]
    IoError {
        #[from]
        #[source]
        source: std::io::Error,
    },
    #[error("address parse error")]
    AddrParseError {
        #[from]
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("unknown error")]
    Unknown(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_io_error_conversion() {
            let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
            let err: CommonError = io.into();
            assert_eq!(err.to_string(), "io error");
        }
    }
}
