pub mod guide;
pub mod layout;
pub mod prediction;
pub mod uploader;
