//! The single platform call: paint an image onto a folder.
//!
//! The traversal only sees the [`IconSetter`] trait. [`SystemIconSetter`] goes
//! through `NSWorkspace` on macOS and refuses every request elsewhere.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors that can occur while applying an icon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconSetError {
    #[error("Image {0} could not be loaded")]
    UnreadableImage(Utf8PathBuf),

    #[error("The system refused to set the icon of {0}")]
    Rejected(Utf8PathBuf),

    #[error("Setting folder icons is not supported on this platform")]
    Unsupported,
}

/// Applies an image file as the display icon of a folder.
#[cfg_attr(test, mockall::automock)]
pub trait IconSetter {
    fn apply_icon(&self, folder: &Utf8Path, image: &Utf8Path) -> Result<(), IconSetError>;
}

/// The operating system's icon setter
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIconSetter;

impl SystemIconSetter {
    pub fn new() -> Self {
        Self
    }
}

impl IconSetter for SystemIconSetter {
    #[cfg(target_os = "macos")]
    fn apply_icon(&self, folder: &Utf8Path, image: &Utf8Path) -> Result<(), IconSetError> {
        use objc2::AllocAnyThread;
        use objc2_app_kit::{NSImage, NSWorkspace, NSWorkspaceIconCreationOptions};
        use objc2_foundation::NSString;

        let image_path = NSString::from_str(image.as_str());
        let folder_path = NSString::from_str(folder.as_str());

        let icon = unsafe { NSImage::initWithContentsOfFile(NSImage::alloc(), &image_path) }
            .ok_or_else(|| IconSetError::UnreadableImage(image.to_path_buf()))?;

        let workspace = NSWorkspace::sharedWorkspace();
        let applied = unsafe {
            workspace.setIcon_forFile_options(
                Some(&icon),
                &folder_path,
                NSWorkspaceIconCreationOptions(0),
            )
        };

        if applied {
            Ok(())
        } else {
            Err(IconSetError::Rejected(folder.to_path_buf()))
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn apply_icon(&self, folder: &Utf8Path, _image: &Utf8Path) -> Result<(), IconSetError> {
        tracing::debug!("No folder icon support for {}", folder);
        Err(IconSetError::Unsupported)
    }
}
