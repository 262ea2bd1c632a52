use derive_more::Display;

/// Human-readable name of one game session, used to tell sessions apart in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{}", _0)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
