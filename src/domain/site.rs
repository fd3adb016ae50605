use serde::{Deserialize, Serialize};

/// An external site reachable by voice ("go to github")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Spoken name matched against the transcript (lowercase)
    pub name: String,
    /// URL handed to the site opener
    pub url: String,
}

impl Site {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
