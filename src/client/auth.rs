use base64::Engine;

pub enum Auth {
    /// Use username and password authentication via Basic Auth headers
    Basic(String, String),
    /// Don't send an Authorization header
    None,
}

impl Auth {
    /// Pick the auth mode from optional credentials.
    ///
    /// A username without a password authenticates with an empty password.
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        match (username, password) {
            (Some(username), password) => Self::Basic(username, password.unwrap_or_default()),
            (None, _) => Self::None,
        }
    }

    /// Value of the `Authorization` header, if any
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Basic(username, password) => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                Some(format!("Basic {}", credentials))
            }
            Self::None => None,
        }
    }
}

impl std::fmt::Display for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic(_, _) => write!(f, "Basic"),
            Self::None => write!(f, "None"),
        }
    }
}
