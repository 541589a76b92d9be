//! Product conversion functions.

use commerce_bridge_core::{Product, ProductCode};

use crate::remote::types::{RemoteImage, RemoteProduct};

/// Image format used for thumbnails.
const THUMBNAIL_FORMAT: &str = "thumbnail";
/// Image format used for the main product image.
const PRODUCT_FORMAT: &str = "product";
/// Image type of the primary image set.
const PRIMARY_IMAGE_TYPE: &str = "PRIMARY";

/// Convert a product, resolving image URLs against the media base URL.
#[must_use]
pub fn convert_product(product: RemoteProduct, media_url: &str) -> Product {
    let thumbnail =
        select_image(&product.images, THUMBNAIL_FORMAT).map(|i| media(media_url, &i.url));
    let image = select_image(&product.images, PRODUCT_FORMAT).map(|i| media(media_url, &i.url));

    Product {
        id: ProductCode::new(product.code),
        label: product.name.unwrap_or_default(),
        extract: product.url.unwrap_or_default(),
        thumbnail,
        image,
    }
}

/// Pick the image in `format`, preferring the primary image set.
fn select_image<'a>(images: &'a [RemoteImage], format: &str) -> Option<&'a RemoteImage> {
    let mut in_format = images
        .iter()
        .filter(|image| image.format.as_deref() == Some(format));

    let first = in_format.next()?;
    if first.image_type.as_deref() == Some(PRIMARY_IMAGE_TYPE) {
        return Some(first);
    }

    Some(
        in_format
            .find(|image| image.image_type.as_deref() == Some(PRIMARY_IMAGE_TYPE))
            .unwrap_or(first),
    )
}

/// Prefix a relative media path with the media base URL.
fn media(media_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        media_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MEDIA: &str = "https://media.example.com";

    fn image(format: &str, image_type: Option<&str>, url: &str) -> RemoteImage {
        RemoteImage {
            format: Some(format.to_string()),
            image_type: image_type.map(str::to_string),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_convert_product_selects_formats() {
        let product = RemoteProduct {
            code: "1934793".to_string(),
            name: Some("PowerShot A480".to_string()),
            url: Some("/Open-Catalogue/Cameras/PowerShot-A480/p/1934793".to_string()),
            images: vec![
                image("zoom", Some("PRIMARY"), "/medias/zoom.jpg"),
                image("thumbnail", Some("PRIMARY"), "/medias/thumb.jpg"),
                image("product", Some("PRIMARY"), "/medias/product.jpg"),
            ],
        };

        let converted = convert_product(product, MEDIA);

        assert_eq!(converted.id.as_str(), "1934793");
        assert_eq!(converted.label, "PowerShot A480");
        assert_eq!(
            converted.extract,
            "/Open-Catalogue/Cameras/PowerShot-A480/p/1934793"
        );
        assert_eq!(
            converted.thumbnail.as_deref(),
            Some("https://media.example.com/medias/thumb.jpg")
        );
        assert_eq!(
            converted.image.as_deref(),
            Some("https://media.example.com/medias/product.jpg")
        );
    }

    #[test]
    fn test_convert_product_without_images() {
        let product = RemoteProduct {
            code: "42".to_string(),
            name: None,
            url: None,
            images: vec![],
        };

        let converted = convert_product(product, MEDIA);

        assert_eq!(converted.label, "");
        assert_eq!(converted.thumbnail, None);
        assert_eq!(converted.image, None);
    }

    #[test]
    fn test_select_image_prefers_primary() {
        let images = vec![
            image("product", Some("GALLERY"), "/gallery.jpg"),
            image("product", Some("PRIMARY"), "/primary.jpg"),
        ];
        assert_eq!(select_image(&images, "product").unwrap().url, "/primary.jpg");

        let gallery_only = vec![image("product", Some("GALLERY"), "/gallery.jpg")];
        assert_eq!(
            select_image(&gallery_only, "product").unwrap().url,
            "/gallery.jpg"
        );
    }

    #[test]
    fn test_media_keeps_absolute_urls() {
        assert_eq!(
            media(MEDIA, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            media("https://m.example.com/", "/a.jpg"),
            "https://m.example.com/a.jpg"
        );
    }
}
