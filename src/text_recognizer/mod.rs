pub mod impl_fake;
#[cfg(feature = "ocr")]
pub mod impl_tesseract;
pub mod interface;
