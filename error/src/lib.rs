use std::fmt;

pub enum Error {
    BadRequest(String),
    Forbidden(String),
    InternalServerError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "{msg}"),
            Self::Forbidden(msg) => write!(f, "{msg}"),
            Self::InternalServerError(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "BadRequest({msg})"),
            Self::Forbidden(msg) => write!(f, "Forbidden({msg})"),
            Self::InternalServerError(msg) => write!(f, "InternalServerError({msg})"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = Error::Forbidden("This project does not belong to you".to_owned());
        assert_eq!(err.to_string(), "This project does not belong to you");
    }
}
