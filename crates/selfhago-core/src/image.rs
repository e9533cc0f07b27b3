//! Image containers
//!
//! [`Image`] is the read-capability handle over a finite RGBA grid and
//! [`ImageMut`] the write-capability handle. Kernels receive an
//! immutable `Image` (through a [`crate::Sampler`]) and drivers write
//! results through an `ImageMut`; the split enforces the
//! read-only-source / write-only-destination contract at the type
//! level instead of by convention.
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for efficient cloning (shared ownership). To
//! modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.
//!
//! # Memory layout
//!
//! One [`Rgba`] per pixel, row-major, no padding. The pixel at (x, y)
//! is at index `y * width + x`.

use crate::error::{Error, Result};
use crate::rgba::Rgba;
use half::f16;
use std::sync::Arc;

#[derive(Debug)]
struct ImageData {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

/// Immutable RGBA image (read capability).
///
/// Cloning an `Image` is cheap: the pixel data is shared. Use
/// [`Image::deep_clone`] for an independent copy.
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with all pixels fully transparent black.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new image with all pixels set to `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: Rgba) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data: vec![value; size],
            }),
        })
    }

    /// Create an image by evaluating `f` at every pixel coordinate.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create an image from raw pixel data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// does not match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<Rgba>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create an image from half-precision pixel data in row-major order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Image::from_data`].
    pub fn from_f16_data(width: u32, height: u32, data: &[[f16; 4]]) -> Result<Self> {
        let pixels = data.iter().map(|&p| Rgba::from_f16(p)).collect();
        Self::from_data(width, height, pixels)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Raw read-only access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[Rgba] {
        &self.inner.data
    }

    /// Get a row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba] {
        let start = (y as usize) * (self.inner.width as usize);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Export the pixel data as half-precision values, row-major.
    pub fn to_f16_data(&self) -> Vec<[f16; 4]> {
        self.inner.data.iter().map(|p| p.to_f16()).collect()
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable RGBA image (write capability).
///
/// Holds the pixel data exclusively; convert back to an immutable
/// [`Image`] using `Into<Image>`. An invocation owns exclusive write
/// access to its destination, so no locking is involved anywhere.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new mutable image with all pixels fully transparent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(ImageMut {
            inner: ImageData {
                width,
                height,
                data: vec![Rgba::TRANSPARENT; size],
            },
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: Rgba) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: Rgba) {
        let idx = (y as usize) * (self.inner.width as usize) + (x as usize);
        self.inner.data[idx] = value;
    }

    /// Raw mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgba] {
        &mut self.inner.data
    }

    /// Set all pixels to `value`.
    pub fn fill(&mut self, value: Rgba) {
        self.inner.data.fill(value);
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}
