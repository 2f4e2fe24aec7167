use crate::User;

const DEFAULT_AVATAR_CONTENT_TYPE: &str = "image/jpeg";

/// Image picked on the device, ready for `PATCH /users/avatar`.
#[derive(Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// JPEG named after the user, the way the mobile picker uploads it.
    pub fn jpeg_for(user: &User, bytes: Vec<u8>) -> Self {
        Self::new(format!("{}.jpg", user.id), DEFAULT_AVATAR_CONTENT_TYPE, bytes)
    }
}

impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
