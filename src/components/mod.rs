mod image_modal;
mod stream_thumbnail;

pub use image_modal::ImageModal;
pub use stream_thumbnail::StreamThumbnail;
