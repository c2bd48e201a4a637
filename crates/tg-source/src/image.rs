use std::path::Path;

use tg_core::error::ConvertError;
use tg_core::frame::FrameBuffer;

/// True if the locator should be fetched over HTTP rather than read from disk.
///
/// # Example
/// ```
/// use tg_source::image::is_url;
/// assert!(is_url("https://example.com/cat.png"));
/// assert!(!is_url("./cat.png"));
/// ```
#[must_use]
pub fn is_url(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

/// Lit les octets bruts de l'image, depuis le disque ou le réseau.
///
/// # Errors
/// Returns [`ConvertError::SourceUnavailable`] if the file cannot be read or
/// the URL cannot be fetched.
pub fn read_source(locator: &str) -> Result<Vec<u8>, ConvertError> {
    if is_url(locator) {
        fetch_url(locator)
    } else {
        std::fs::read(Path::new(locator)).map_err(|e| unavailable(locator, &e))
    }
}

#[cfg(feature = "http")]
fn fetch_url(url: &str) -> Result<Vec<u8>, ConvertError> {
    log::debug!("Téléchargement de {url}");
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| unavailable(url, &e))?;
    let bytes = response.bytes().map_err(|e| unavailable(url, &e))?;
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "http"))]
fn fetch_url(url: &str) -> Result<Vec<u8>, ConvertError> {
    Err(ConvertError::SourceUnavailable {
        locator: url.to_string(),
        reason: "HTTP sources require the 'http' feature".into(),
    })
}

fn unavailable(locator: &str, err: &dyn std::fmt::Display) -> ConvertError {
    ConvertError::SourceUnavailable {
        locator: locator.to_string(),
        reason: err.to_string(),
    }
}

/// Décode une image (PNG, JPEG, BMP, GIF) en `FrameBuffer` RGBA.
///
/// When `invert` is set, color channels are inverted and alpha is kept.
///
/// # Errors
/// Returns [`ConvertError::DecodeFailure`] if the bytes are not a supported
/// image or the image is empty.
///
/// # Example
/// ```
/// use tg_source::image::decode_frame;
/// assert!(decode_frame(b"not an image", false).is_err());
/// ```
pub fn decode_frame(bytes: &[u8], invert: bool) -> Result<FrameBuffer, ConvertError> {
    let mut img =
        image::load_from_memory(bytes).map_err(|e| ConvertError::DecodeFailure(e.to_string()))?;
    if invert {
        img.invert();
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::DecodeFailure(format!(
            "image vide ({width}×{height})"
        )));
    }
    log::debug!("Image décodée : {width}×{height}");
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

/// Lit puis décode l'image désignée par `locator`.
///
/// # Errors
/// Returns [`ConvertError::SourceUnavailable`] or
/// [`ConvertError::DecodeFailure`].
///
/// # Example
/// ```no_run
/// use tg_source::image::load_frame;
/// let frame = load_frame("test.png", false).unwrap();
/// ```
pub fn load_frame(locator: &str, invert: bool) -> Result<FrameBuffer, ConvertError> {
    let bytes = read_source(locator)?;
    decode_frame(&bytes, invert)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, rgba: [u8; 4]) -> String {
        let path = dir.join(name);
        image::RgbaImage::from_pixel(3, 2, image::Rgba(rgba))
            .save(&path)
            .unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "red.png", [200, 10, 20, 255]);
        let frame = load_frame(&path, false).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.pixel(2, 1), (200, 10, 20, 255));
    }

    #[test]
    fn invert_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "half.png", [10, 20, 30, 128]);
        let frame = load_frame(&path, true).unwrap();
        assert_eq!(frame.pixel(0, 0), (245, 235, 225, 128));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = load_frame("/nonexistent/termglyph/none.png", false).unwrap_err();
        assert!(matches!(err, ConvertError::SourceUnavailable { .. }));
    }

    #[test]
    fn garbage_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_frame(&path.to_string_lossy(), false).unwrap_err();
        assert!(matches!(err, ConvertError::DecodeFailure(_)));
    }

    #[test]
    fn url_detection() {
        assert!(is_url("http://localhost/a.gif"));
        assert!(!is_url("httpfile.png"));
        assert!(!is_url("ftp://host/a.png"));
    }

    #[cfg(feature = "http")]
    mod http {
        use super::*;
        use std::io::{Read, Write};
        use std::net::TcpListener;
        use std::thread::{self, JoinHandle};

        /// Serve a single request on loopback with the given status line and body.
        fn serve_once(status: &'static str, body: Vec<u8>) -> (String, JoinHandle<()>) {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let port = listener.local_addr().unwrap().port();
            let handle = thread::spawn(move || {
                let (mut stream, _) = listener.accept().unwrap();
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut chunk).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&chunk[..n]);
                }
                let head = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: image/png\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                stream.write_all(head.as_bytes()).unwrap();
                stream.write_all(&body).unwrap();
                stream.flush().unwrap();
            });
            (format!("http://127.0.0.1:{port}/x.png"), handle)
        }

        #[test]
        fn fetches_and_decodes_png() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_png(dir.path(), "served.png", [0, 0, 255, 255]);
            let body = std::fs::read(path).unwrap();
            let (url, server) = serve_once("200 OK", body);

            let frame = load_frame(&url, false).unwrap();
            server.join().unwrap();
            assert_eq!((frame.width, frame.height), (3, 2));
            assert_eq!(frame.pixel(0, 0), (0, 0, 255, 255));
        }

        #[test]
        fn not_found_is_source_unavailable() {
            let (url, server) = serve_once("404 Not Found", b"missing".to_vec());

            let err = load_frame(&url, false).unwrap_err();
            server.join().unwrap();
            match err {
                ConvertError::SourceUnavailable { locator, reason } => {
                    assert_eq!(locator, url);
                    assert!(reason.contains("404"), "reason: {reason}");
                }
                other => panic!("expected SourceUnavailable, got {other:?}"),
            }
        }
    }
}
