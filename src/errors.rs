// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the camera application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera-related errors
    Camera(CameraError),
    /// Photo capture errors
    Photo(PhotoError),
    /// Photo library errors
    Library(LibraryError),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Camera-specific errors
#[derive(Debug, Clone)]
pub enum CameraError {
    /// No camera devices found
    NoCameraFound,
    /// Access to the video device was denied
    AccessDenied(String),
    /// Camera initialization failed
    InitializationFailed(String),
    /// Camera disconnected during operation
    Disconnected,
    /// The device produced a pixel format we cannot display
    UnsupportedFormat(String),
    /// Streaming error from the device
    StreamError(String),
}

/// Photo capture errors
#[derive(Debug, Clone)]
pub enum PhotoError {
    /// No frame available for capture
    NoFrameAvailable,
    /// Encoding failed
    EncodingFailed(String),
    /// Save failed
    SaveFailed(String),
}

/// Photo library errors
#[derive(Debug, Clone)]
pub enum LibraryError {
    /// The pictures directory is missing or not writable
    AccessDenied(String),
    /// Filesystem error while reading the library
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::Photo(e) => write!(f, "Photo error: {}", e),
            AppError::Library(e) => write!(f, "Library error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoCameraFound => write!(f, "No camera devices found"),
            CameraError::AccessDenied(msg) => write!(f, "Camera access denied: {}", msg),
            CameraError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            CameraError::Disconnected => write!(f, "Camera disconnected"),
            CameraError::UnsupportedFormat(msg) => write!(f, "Unsupported pixel format: {}", msg),
            CameraError::StreamError(msg) => write!(f, "Stream error: {}", msg),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NoFrameAvailable => write!(f, "No frame available for capture"),
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            PhotoError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AccessDenied(msg) => write!(f, "Library access denied: {}", msg),
            LibraryError::Io(msg) => write!(f, "Library I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CameraError {}
impl std::error::Error for PhotoError {}
impl std::error::Error for LibraryError {}

// Conversions from sub-errors to AppError
impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        AppError::Camera(err)
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Photo(err)
    }
}

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        AppError::Library(err)
    }
}

// Conversions for I/O errors
impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::SaveFailed(err.to_string())
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::Io(err.to_string())
    }
}
