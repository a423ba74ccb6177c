use serde::{Deserialize, Serialize};

/// Registration form contents as sent to the server
///
/// `image` and `image_ext` are private so they can only be set together
/// through [`RegistrationPayload::with_image`]. Decoding rejects a body that
/// carries one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRegistrationPayload")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Highest completed level of studies
    pub max_level: String,
    pub age: String,
    pub resume: Option<String>,
    image: Option<Vec<u8>>,
    image_ext: Option<String>,
}

impl RegistrationPayload {
    /// Build a payload with no image attached.
    ///
    /// An empty `resume` is stored as `None`.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        max_level: impl Into<String>,
        age: impl Into<String>,
        resume: impl Into<String>,
    ) -> Self {
        let resume = resume.into();

        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            max_level: max_level.into(),
            age: age.into(),
            resume: (!resume.is_empty()).then_some(resume),
            image: None,
            image_ext: None,
        }
    }

    pub fn with_image(mut self, bytes: Vec<u8>, ext: impl Into<String>) -> Self {
        self.image = Some(bytes);
        self.image_ext = Some(ext.into());
        self
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    pub fn image_ext(&self) -> Option<&str> {
        self.image_ext.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegistrationPayload {
    full_name: String,
    email: String,
    password: String,
    max_level: String,
    age: String,
    resume: Option<String>,
    image: Option<Vec<u8>>,
    image_ext: Option<String>,
}

impl TryFrom<RawRegistrationPayload> for RegistrationPayload {
    type Error = &'static str;

    fn try_from(raw: RawRegistrationPayload) -> Result<Self, Self::Error> {
        if raw.image.is_some() != raw.image_ext.is_some() {
            return Err("image and imageExt must be both set or both null");
        }

        Ok(Self {
            full_name: raw.full_name,
            email: raw.email,
            password: raw.password,
            max_level: raw.max_level,
            age: raw.age,
            resume: raw.resume,
            image: raw.image,
            image_ext: raw.image_ext,
        })
    }
}

/// Login form contents as sent to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginPayload {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
