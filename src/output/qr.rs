use std::fs;
use std::path::Path;

use qrcode::render::{svg, unicode};
use qrcode::QrCode;

use super::{ensure_not_empty, OutputError, Result};

// Smallest rendered edge, in pixels, of an exported QR image
const QR_MIN_DIMENSION: u32 = 150;

fn encode(password: &str) -> Result<QrCode> {
    ensure_not_empty(password, "encode")?;
    QrCode::new(password.as_bytes()).map_err(|e| OutputError::Qr(e.to_string()))
}

/// Renders the password as a QR code made of Unicode half blocks, suitable for
/// printing to a terminal.
pub fn render_qr_terminal(password: &str) -> Result<String> {
    let code = encode(password)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

/// Writes the password as an SVG QR code.
pub fn write_qr_svg(path: &Path, password: &str) -> Result<()> {
    let code = encode(password)?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_DIMENSION, QR_MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    fs::write(path, image)?;
    log::info!("QR code written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_rendering_has_rows() {
        let rendered = render_qr_terminal("Xk3!pq09LmZa").unwrap();
        assert!(rendered.lines().count() > 10);
    }

    #[test]
    fn empty_password_cannot_be_encoded() {
        let err = render_qr_terminal("").unwrap_err();
        assert!(matches!(err, OutputError::EmptyPassword("encode")));
    }

    #[test]
    fn writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code.svg");
        write_qr_svg(&path, "abcDEF123").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }
}
