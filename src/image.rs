use crate::refs::{ObjectReferences, RefType};
use crate::RenderError;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

enum Encoding {
    /// Baseline RGB JPEG data that PDF readers can decode themselves
    Jpeg(Vec<u8>),
    Decoded(DynamicImage),
}

/// A raster image (the company logo) embedded once per document
pub struct Image {
    encoding: Encoding,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load a PNG or JPEG image from disk
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, RenderError> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    /// Decode an image from memory. RGB JPEGs are kept as-is, anything else is decoded and
    /// re-compressed losslessly.
    pub fn from_bytes(data: Vec<u8>) -> Result<Image, RenderError> {
        let format = image::guess_format(&data)?;
        let decoded = image::load_from_memory_with_format(&data, format)?;
        let (width, height) = decoded.dimensions();

        let encoding = match (format, decoded.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => Encoding::Jpeg(data),
            _ => Encoding::Decoded(decoded),
        };

        Ok(Image {
            encoding,
            width,
            height,
        })
    }

    /// Height over width
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }

    fn encode(&self) -> EncodeOutput {
        match &self.encoding {
            Encoding::Jpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            Encoding::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
            s_mask.finish();
        }
    }
}
