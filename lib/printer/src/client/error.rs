#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    EmptyLine,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::EmptyLine => write!(f, "Refusing to send an empty line"),
        }
    }
}

impl std::error::Error for Error {}
