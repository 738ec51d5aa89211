use std::io::Cursor;

use super::*;

#[test]
fn decode_gray_png_keeps_values_and_shape() {
    let img = image::GrayImage::from_raw(3, 2, vec![0, 10, 20, 200, 250, 255]).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let field = decode_depth_image(&buf).unwrap();
    assert_eq!(field.width(), 3);
    assert_eq!(field.height(), 2);
    assert_eq!(field.get(1, 0), 10);
    assert_eq!(field.get(2, 1), 255);
}

#[test]
fn decode_garbage_is_an_error() {
    let err = decode_depth_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, crate::ParallaxError::Other(_)));
}
