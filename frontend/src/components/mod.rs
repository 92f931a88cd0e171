//! UI Components for the upload form.
//!
//! # Form Components
//! - [`FileUpload`] - Owns the held files and reconciles them on removal
//! - [`FileUploadField`] - Forwards the form's props to the picker
//! - [`FileUploader`] - Drop zone and file input
//!
//! # Display Components
//! - [`FileCard`] - One held file with its remove control
//! - [`Alert`] - Aggregate error banner

mod alert;
mod file_card;
mod file_upload;
mod file_upload_field;
mod file_uploader;

pub use alert::*;
pub use file_card::*;
pub use file_upload::*;
pub use file_upload_field::*;
pub use file_uploader::*;
