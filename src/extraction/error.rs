#[derive(Debug)]
pub enum ExtractError {
    EmptyUrl,
    InvalidUrl { input: String },
    Busy,
    Cancelled,
    Unexpected(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::EmptyUrl => write!(f, "Por favor, ingresa una URL válida"),
            ExtractError::InvalidUrl { .. } => write!(f, "La URL ingresada no es válida"),
            ExtractError::Busy => write!(f, "an extraction is already in progress"),
            ExtractError::Cancelled => write!(f, "extraction cancelled"),
            ExtractError::Unexpected(msg) => write!(f, "Error al extraer el contenido: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}
